#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::str::FromStr;

mod custom;
mod preset;
mod presets;
mod random;
mod report;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        EulerianExtension(eulerian_extension::error::Error, eulerian_extension::error::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }

        UnknownPreset(name: String) {
            description("there is no preset graph with the given name")
            display("there is no preset graph named '{}', see the presets subcommand for a list", name)
        }
    }
}

/// How the augmentation strategy is chosen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StrategyChoice {
    /// Exact search for small imbalances, greedy pairing otherwise.
    Auto,
    Exact,
    Greedy,
}

impl FromStr for StrategyChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(StrategyChoice::Auto),
            "exact" => Ok(StrategyChoice::Exact),
            "greedy" => Ok(StrategyChoice::Greedy),
            _ => Err(format!(
                "unknown strategy '{}', expected one of auto, exact, greedy",
                s
            )),
        }
    }
}

#[derive(Parser)]
#[clap(
    name = "eulerize",
    version = env!("CARGO_PKG_VERSION"),
    about = "Adds edges to directed multigraphs to make them Eulerian."
)]
pub struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,

    #[clap(
        long,
        default_value = "8",
        help = "The largest amount of imbalanced node slots for which the exact search is used, at most 10"
    )]
    pub exact_threshold: usize,

    #[clap(
        long,
        default_value = "auto",
        help = "The augmentation strategy, one of auto, exact, greedy. Auto selects by --exact-threshold, exact fails above it"
    )]
    pub strategy: StrategyChoice,
}

#[derive(Parser)]
pub enum Command {
    #[clap(about = "Lists the available preset graphs.")]
    Presets(preset::ListPresetsCommand),
    #[clap(about = "Makes a preset graph Eulerian.")]
    Preset(preset::RunPresetCommand),
    /// Makes a graph given as edge list Eulerian.
    Custom(custom::RunCustomCommand),
    /// Makes a random multigraph Eulerian.
    Random(random::RunRandomCommand),
}

// The main is unpacked from an error-chain macro.
// The real main is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    match &options.subcommand {
        Command::Presets(subcommand) => preset::list_presets(options, subcommand),
        Command::Preset(subcommand) => preset::run_preset(options, subcommand),
        Command::Custom(subcommand) => custom::run_custom(options, subcommand),
        Command::Random(subcommand) => random::run_random(options, subcommand),
    }?;

    info!("Goodbye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, Command, StrategyChoice};
    use clap::Parser;
    use simplelog::LevelFilter;

    #[test]
    fn test_parse_defaults() {
        let options = CliOptions::try_parse_from(["eulerize", "preset", "star"]).unwrap();
        assert_eq!(options.log_level, LevelFilter::Info);
        assert_eq!(options.exact_threshold, 8);
        assert_eq!(options.strategy, StrategyChoice::Auto);
        match options.subcommand {
            Command::Preset(subcommand) => assert_eq!(subcommand.name, "star"),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let options = CliOptions::try_parse_from([
            "eulerize",
            "--log-level",
            "Debug",
            "--exact-threshold",
            "4",
            "--strategy",
            "greedy",
            "random",
            "--nodes",
            "10",
            "--edges",
            "20",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(options.log_level, LevelFilter::Debug);
        assert_eq!(options.exact_threshold, 4);
        assert_eq!(options.strategy, StrategyChoice::Greedy);
        match options.subcommand {
            Command::Random(subcommand) => {
                assert_eq!(subcommand.nodes, 10);
                assert_eq!(subcommand.edges, 20);
                assert_eq!(subcommand.seed, Some(7));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_parse_custom_edges() {
        let options = CliOptions::try_parse_from(["eulerize", "custom", "A->B,B->A"]).unwrap();
        match options.subcommand {
            Command::Custom(subcommand) => assert_eq!(subcommand.edges, "A->B,B->A"),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_reject_unknown_strategy() {
        assert!(
            CliOptions::try_parse_from(["eulerize", "--strategy", "optimal", "presets"]).is_err()
        );
        assert_eq!("Exact".parse::<StrategyChoice>(), Ok(StrategyChoice::Exact));
    }
}
