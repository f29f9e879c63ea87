use crate::report::augment_and_report;
use crate::CliOptions;
use clap::Parser;
use eulerian_extension::algo::predefined_graphs::create_random_multigraph;
use eulerian_extension::implementation::petgraph_impl::PetGraph;
use eulerian_extension::index::GraphIndex;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

#[derive(Parser)]
pub struct RunRandomCommand {
    #[clap(long, help = "The amount of nodes of the random graph")]
    pub nodes: usize,

    #[clap(long, help = "The amount of edges of the random graph")]
    pub edges: usize,

    #[clap(
        long,
        help = "The seed of the random number generator. If not given, a random seed is chosen and logged"
    )]
    pub seed: Option<u64>,
}

pub(crate) fn run_random(options: &CliOptions, subcommand: &RunRandomCommand) -> crate::Result<()> {
    if subcommand.nodes == 0 && subcommand.edges > 0 {
        error!("Cannot add {} edges to a graph without nodes", subcommand.edges);
        return Err(crate::ErrorKind::Parameter.into());
    }

    let seed = subcommand.seed.unwrap_or_else(|| thread_rng().gen());
    info!(
        "Generating a random multigraph with {} nodes and {} edges using seed {}",
        subcommand.nodes, subcommand.edges, seed
    );

    let mut graph = PetGraph::<(), ()>::default();
    create_random_multigraph(
        &mut graph,
        subcommand.nodes,
        subcommand.edges,
        &mut StdRng::seed_from_u64(seed),
    );
    augment_and_report(options, &mut graph, |_, node| format!("n{}", node.as_usize()))
}
