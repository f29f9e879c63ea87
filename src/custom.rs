use crate::report::augment_and_report;
use crate::CliOptions;
use clap::Parser;
use eulerian_extension::implementation::petgraph_impl::PetGraph;
use eulerian_extension::interface::ImmutableGraphContainer;
use eulerian_extension::io::{graph_from_labelled_edges, parse_edge_list};
use log::{info, warn};

#[derive(Parser)]
pub struct RunCustomCommand {
    #[clap(help = "The edges of the graph, formatted as comma separated list like A->B,B->C")]
    pub edges: String,
}

pub(crate) fn run_custom(options: &CliOptions, subcommand: &RunCustomCommand) -> crate::Result<()> {
    let edges = parse_edge_list(&subcommand.edges)?;
    if edges.is_empty() {
        warn!("The edge list is empty");
    }
    info!("Parsed {} edges", edges.len());

    let mut graph: PetGraph<String, ()> = graph_from_labelled_edges(edges);
    augment_and_report(options, &mut graph, |graph, node| {
        ImmutableGraphContainer::node_data(graph, node).clone()
    })
}
