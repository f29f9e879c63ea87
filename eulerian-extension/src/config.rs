use crate::error::{ErrorKind, Result};

/// The largest imbalance for which the exhaustive search is used by default.
/// The search evaluates up to `8! = 40320` pairings.
pub const DEFAULT_EXACT_THRESHOLD: usize = 8;

/// The largest threshold that can be configured, bounding the exhaustive search to `10!` pairings.
pub const MAX_EXACT_THRESHOLD: usize = 10;

/// Configures how a graph is augmented.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AugmentationConfig {
    /// Imbalances with at most this many node slots missing outgoing edges are augmented by exhaustive search,
    /// larger ones greedily.
    pub exact_threshold: usize,
}

impl AugmentationConfig {
    /// Creates a configuration with the given exact search threshold.
    /// Fails if the threshold exceeds `MAX_EXACT_THRESHOLD`.
    pub fn new(exact_threshold: usize) -> Result<Self> {
        if exact_threshold > MAX_EXACT_THRESHOLD {
            return Err(
                ErrorKind::ExactThresholdTooLarge(exact_threshold, MAX_EXACT_THRESHOLD).into(),
            );
        }

        Ok(Self { exact_threshold })
    }
}

impl Default for AugmentationConfig {
    fn default() -> Self {
        Self {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
        }
    }
}
