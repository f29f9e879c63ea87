use crate::presets::{find_preset, PRESETS};
use crate::report::augment_and_report;
use crate::CliOptions;
use clap::Parser;
use eulerian_extension::implementation::petgraph_impl::PetGraph;
use eulerian_extension::interface::ImmutableGraphContainer;
use eulerian_extension::io::graph_from_labelled_edges;
use log::info;

#[derive(Parser)]
pub struct ListPresetsCommand {}

#[derive(Parser)]
pub struct RunPresetCommand {
    #[clap(help = "The name of the preset graph, see the presets subcommand")]
    pub name: String,
}

pub(crate) fn list_presets(_options: &CliOptions, _subcommand: &ListPresetsCommand) -> crate::Result<()> {
    info!("Available presets:");
    for preset in PRESETS {
        let edges: Vec<_> = preset
            .edges
            .iter()
            .map(|(from_label, to_label)| format!("{}->{}", from_label, to_label))
            .collect();
        info!("{}: {} ({})", preset.name, preset.description, edges.join(","));
    }
    Ok(())
}

pub(crate) fn run_preset(options: &CliOptions, subcommand: &RunPresetCommand) -> crate::Result<()> {
    let preset = find_preset(&subcommand.name)?;
    info!("Running preset {}: {}", preset.name, preset.description);

    let mut graph: PetGraph<&str, ()> = graph_from_labelled_edges(preset.edges.iter().copied());
    augment_and_report(options, &mut graph, |graph, node| {
        ImmutableGraphContainer::node_data(graph, node).to_string()
    })
}
