use crate::{CliOptions, StrategyChoice};
use colored::*;
use eulerian_extension::algo::augmentation::{
    make_eulerian_with_config, Augmentation, AugmentationStrategy,
};
use eulerian_extension::algo::components::decompose_weakly_connected_components;
use eulerian_extension::algo::degree::{
    degree_differences, node_degrees, unbalanced_nodes, NodeDegree,
};
use eulerian_extension::algo::eulerian::is_eulerian;
use eulerian_extension::config::AugmentationConfig;
use eulerian_extension::interface::{DynamicGraph, Edge, StaticGraph};
use log::{error, info, warn};
use std::time::Instant;

/// Formats the in- and outdegree of each node, one node per line, in node order.
pub fn format_degrees<Graph: StaticGraph, Label: Fn(&Graph, Graph::NodeIndex) -> String>(
    graph: &Graph,
    label: &Label,
) -> Vec<String> {
    node_degrees(graph)
        .into_iter()
        .map(|degree: NodeDegree<_>| {
            let line = format!(
                "{}: in = {}, out = {}",
                label(graph, degree.node),
                degree.in_degree,
                degree.out_degree
            );
            if degree.is_balanced() {
                line
            } else {
                format!("{} (unbalanced)", line)
            }
        })
        .collect()
}

/// Formats the nodes with indegree != outdegree with their outdegree - indegree, as `A (+1), D (-1)`.
pub fn format_imbalance<Graph: StaticGraph, Label: Fn(&Graph, Graph::NodeIndex) -> String>(
    graph: &Graph,
    label: &Label,
) -> String {
    degree_differences(graph)
        .into_iter()
        .map(|(node, difference)| format!("{} ({:+})", label(graph, node), difference))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a list of edges as `A->B, B->C`.
pub fn format_edges<Graph: StaticGraph, Label: Fn(&Graph, Graph::NodeIndex) -> String>(
    graph: &Graph,
    edges: &[Edge<Graph::NodeIndex>],
    label: &Label,
) -> String {
    edges
        .iter()
        .map(|edge| format!("{}->{}", label(graph, edge.from_node), label(graph, edge.to_node)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn eulerian_verdict(eulerian: bool) -> ColoredString {
    if eulerian {
        "Eulerian".green()
    } else {
        "not Eulerian".red()
    }
}

fn print_graph_report<Graph: StaticGraph, Label: Fn(&Graph, Graph::NodeIndex) -> String>(
    heading: &str,
    graph: &Graph,
    label: &Label,
) -> bool {
    info!("");
    info!(" === {} === ", heading);
    info!("");
    info!(
        "{} nodes, {} edges, {} weakly connected components",
        graph.node_count(),
        graph.edge_count(),
        decompose_weakly_connected_components(graph).len()
    );
    for line in format_degrees(graph, label) {
        info!("{}", line);
    }
    let imbalance = format_imbalance(graph, label);
    if !imbalance.is_empty() {
        info!("Unbalanced nodes (out - in): {}", imbalance);
    }

    let eulerian = is_eulerian(graph);
    info!("The graph is {}", eulerian_verdict(eulerian));
    eulerian
}

fn augment<Graph: DynamicGraph>(
    options: &CliOptions,
    graph: &mut Graph,
) -> crate::Result<Augmentation<Graph::NodeIndex>>
where
    Graph::EdgeData: Default,
{
    let config = AugmentationConfig::new(options.exact_threshold)?;
    Ok(match options.strategy {
        StrategyChoice::Auto => make_eulerian_with_config(graph, &config)?,
        StrategyChoice::Exact => {
            let imbalance = unbalanced_nodes(&*graph);
            if imbalance.len() > config.exact_threshold {
                error!(
                    "The exact strategy was forced, but the graph has {} imbalanced node slots, more than the exact threshold of {}",
                    imbalance.len(),
                    config.exact_threshold
                );
                return Err(crate::ErrorKind::Parameter.into());
            }
            AugmentationStrategy::Exact.augment(graph, &imbalance)?
        }
        StrategyChoice::Greedy => {
            let imbalance = unbalanced_nodes(&*graph);
            AugmentationStrategy::Greedy.augment(graph, &imbalance)?
        }
    })
}

/// Reports the degrees of the graph and, if it is not Eulerian, augments it and reports the result.
pub fn augment_and_report<Graph: DynamicGraph, Label: Fn(&Graph, Graph::NodeIndex) -> String>(
    options: &CliOptions,
    graph: &mut Graph,
    label: Label,
) -> crate::Result<()>
where
    Graph::EdgeData: Default,
{
    if print_graph_report("Input Graph", &*graph, &label) {
        info!("Nothing to do");
        return Ok(());
    }

    let start_time = Instant::now();
    let augmentation = augment(options, graph)?;
    let elapsed = start_time.elapsed();

    let eulerian = print_graph_report("Augmented Graph", &*graph, &label);
    info!("");
    info!(" === Augmentation === ");
    info!("");
    info!("Strategy: {}", augmentation.strategy);
    if let Some(statistics) = &augmentation.exact_search_statistics {
        info!(
            "Evaluated {} complete pairings, {} of them Eulerian, pruned {} partial pairings",
            statistics.evaluated_pairings, statistics.eulerian_pairings, statistics.pruned_pairings
        );
    }
    if !augmentation.feasible {
        warn!(
            "{}",
            "No pairing of the unbalanced nodes makes the graph Eulerian, the graph was left unchanged"
                .yellow()
        );
    }
    info!("Added {} edges", augmentation.added_edges.len());
    if !augmentation.added_edges.is_empty() {
        info!(
            "Added edges: {}",
            format_edges(&*graph, &augmentation.added_edges, &label)
        );
    }
    info!("Took {:.3}ms", elapsed.as_secs_f64() * 1000.0);

    if augmentation.feasible && !eulerian {
        warn!(
            "{}",
            format!(
                "The {} strategy did not make the graph Eulerian",
                augmentation.strategy
            )
            .red()
        );
    }
    Ok(())
}
