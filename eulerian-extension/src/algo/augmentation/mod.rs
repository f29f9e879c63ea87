use crate::algo::degree::{unbalanced_nodes, Imbalance};
use crate::config::AugmentationConfig;
use crate::error::{ErrorKind, Result};
use crate::index::GraphIndex;
use crate::interface::{DynamicGraph, Edge, ImmutableGraphContainer};
use log::{info, warn};
use std::fmt;

/// Exhaustive search for a minimum augmentation.
pub mod exact;
/// Linear-time augmentation without optimality guarantee.
pub mod greedy;

pub use exact::{exact_augment, exact_augment_with_statistics, ExactSearchStatistics};
pub use greedy::greedy_augment;

/// The two ways of pairing nodes that miss outgoing edges with nodes that miss incoming edges.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AugmentationStrategy {
    /// Try all pairings and keep the smallest one that results in an Eulerian graph, see `exact_augment`.
    Exact,
    /// Pair nodes in order, see `greedy_augment`.
    Greedy,
}

/// The result of augmenting a graph.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Augmentation<NodeIndex> {
    /// The strategy that was used.
    pub strategy: AugmentationStrategy,
    /// The edges that were added to the graph, in insertion order.
    pub added_edges: Vec<Edge<NodeIndex>>,
    /// False if the exact search found no pairing that makes the graph Eulerian.
    /// The graph is unchanged in this case.
    pub feasible: bool,
    /// Counters of the exact search, `None` if the greedy strategy was used.
    pub exact_search_statistics: Option<ExactSearchStatistics>,
}

impl AugmentationStrategy {
    /// Selects the exact strategy if the imbalance is at most the configured threshold, and the greedy strategy otherwise.
    pub fn select<NodeIndex>(imbalance: &Imbalance<NodeIndex>, config: &AugmentationConfig) -> Self {
        if imbalance.len() <= config.exact_threshold {
            AugmentationStrategy::Exact
        } else {
            AugmentationStrategy::Greedy
        }
    }

    /// Augments the graph using this strategy, where `imbalance` must be the imbalance of the graph.
    pub fn augment<Graph: DynamicGraph>(
        self,
        graph: &mut Graph,
        imbalance: &Imbalance<Graph::NodeIndex>,
    ) -> Result<Augmentation<Graph::NodeIndex>>
    where
        Graph::EdgeData: Default,
    {
        match self {
            AugmentationStrategy::Exact => {
                let (added_edges, statistics) = exact_augment_with_statistics(
                    graph,
                    &imbalance.missing_out,
                    &imbalance.missing_in,
                )?;
                let feasible = added_edges.is_some();
                if !feasible {
                    warn!(
                        "Found no pairing of {} imbalanced node slots that makes the graph Eulerian",
                        imbalance.len()
                    );
                }

                Ok(Augmentation {
                    strategy: self,
                    added_edges: added_edges.unwrap_or_default(),
                    feasible,
                    exact_search_statistics: Some(statistics),
                })
            }
            AugmentationStrategy::Greedy => Ok(Augmentation {
                strategy: self,
                added_edges: greedy_augment(
                    graph,
                    &imbalance.missing_out,
                    &imbalance.missing_in,
                )?,
                feasible: true,
                exact_search_statistics: None,
            }),
        }
    }
}

impl fmt::Display for AugmentationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AugmentationStrategy::Exact => write!(f, "exact"),
            AugmentationStrategy::Greedy => write!(f, "greedy"),
        }
    }
}

/// Adds edges to the graph to make it Eulerian, using the default configuration.
/// Returns the added edges in insertion order.
///
/// If the exact search is used and finds no solution, no edges are added and the returned list is empty.
pub fn make_eulerian<Graph: DynamicGraph>(graph: &mut Graph) -> Result<Vec<Edge<Graph::NodeIndex>>>
where
    Graph::EdgeData: Default,
{
    Ok(make_eulerian_with_config(graph, &AugmentationConfig::default())?.added_edges)
}

/// Adds edges to the graph to make it Eulerian, choosing the strategy according to the given configuration.
pub fn make_eulerian_with_config<Graph: DynamicGraph>(
    graph: &mut Graph,
    config: &AugmentationConfig,
) -> Result<Augmentation<Graph::NodeIndex>>
where
    Graph::EdgeData: Default,
{
    let imbalance = unbalanced_nodes(graph);
    let strategy = AugmentationStrategy::select(&imbalance, config);
    info!(
        "Augmenting graph with {} nodes, {} edges and {} imbalanced node slots using the {} strategy",
        graph.node_count(),
        graph.edge_count(),
        imbalance.len(),
        strategy
    );

    let augmentation = strategy.augment(graph, &imbalance)?;
    info!("Added {} edges", augmentation.added_edges.len());
    Ok(augmentation)
}

/// Checks that the two node lists can be paired up positionally and that all nodes belong to the graph.
pub(crate) fn check_pairing_arguments<Graph: ImmutableGraphContainer>(
    graph: &Graph,
    missing_out: &[Graph::NodeIndex],
    missing_in: &[Graph::NodeIndex],
) -> Result<()> {
    if missing_out.len() != missing_in.len() {
        return Err(ErrorKind::MismatchedImbalance(missing_out.len(), missing_in.len()).into());
    }

    for &node in missing_out.iter().chain(missing_in) {
        if !graph.contains_node_index(node) {
            return Err(ErrorKind::NodeNotInGraph(node.as_usize()).into());
        }
    }

    Ok(())
}
