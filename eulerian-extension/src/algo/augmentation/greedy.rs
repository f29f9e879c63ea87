use crate::algo::augmentation::check_pairing_arguments;
use crate::algo::components::connect_components;
use crate::error::Result;
use crate::interface::{DynamicGraph, Edge};
use log::debug;

/// Augments the graph by pairing `missing_out[i]` with `missing_in[i]` and then connecting its weakly connected components.
/// Returns all added edges in insertion order.
///
/// Runs in linear time, but the result is not checked:
/// the connecting edges unbalance the representatives of the components, so the graph is only Eulerian if it was weakly connected after the pairing.
/// Unlike the exact search, pairs of a node with itself are inserted as self-loops.
///
/// Fails if the two lists differ in length or contain nodes that are not in the graph.
pub fn greedy_augment<Graph: DynamicGraph>(
    graph: &mut Graph,
    missing_out: &[Graph::NodeIndex],
    missing_in: &[Graph::NodeIndex],
) -> Result<Vec<Edge<Graph::NodeIndex>>>
where
    Graph::EdgeData: Default,
{
    check_pairing_arguments(graph, missing_out, missing_in)?;

    let mut added_edges: Vec<_> = missing_out
        .iter()
        .zip(missing_in)
        .map(|(&from_node, &to_node)| Edge::new(from_node, to_node))
        .collect();
    for edge in &added_edges {
        graph.add_edge(edge.from_node, edge.to_node, Default::default());
    }

    let pairing_len = added_edges.len();
    added_edges.extend(connect_components(graph));
    debug!(
        "Greedy augmentation added {} pairing edges and {} connecting edges",
        pairing_len,
        added_edges.len() - pairing_len
    );

    Ok(added_edges)
}

#[cfg(test)]
mod tests {
    use super::greedy_augment;
    use crate::algo::degree::unbalanced_nodes;
    use crate::algo::eulerian::{decomposes_into_eulerian_cycles, is_eulerian};
    use crate::algo::predefined_graphs::create_star;
    use crate::error::ErrorKind;
    use crate::implementation::petgraph_impl;
    use crate::interface::{Edge, ImmutableGraphContainer, MutableGraphContainer};

    #[test]
    fn test_star_is_closed_positionally() {
        let mut graph = petgraph_impl::new::<(), ()>();
        let center = create_star(&mut graph, 9);
        let imbalance = unbalanced_nodes(&graph);

        let added =
            greedy_augment(&mut graph, &imbalance.missing_out, &imbalance.missing_in).unwrap();
        assert_eq!(added.len(), 9);
        for (edge, &leaf) in added.iter().zip(&imbalance.missing_out) {
            assert_eq!(*edge, Edge::new(leaf, center));
        }
        assert!(is_eulerian(&graph));
    }

    #[test]
    fn test_positional_self_loops_are_inserted() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ());

        let added = greedy_augment(&mut graph, &[b, b], &[b, a]).unwrap();
        assert_eq!(added, vec![Edge::new(b, b), Edge::new(b, a)]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_connecting_edges_are_not_rebalanced() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.add_edge(a, b, ());
        graph.add_edge(c, d, ());

        let imbalance = unbalanced_nodes(&graph);
        let added =
            greedy_augment(&mut graph, &imbalance.missing_out, &imbalance.missing_in).unwrap();
        // B->A and D->C close two separate cycles, which are then chained by A->C.
        assert_eq!(
            added,
            vec![Edge::new(b, a), Edge::new(d, c), Edge::new(a, c)]
        );
        assert!(!decomposes_into_eulerian_cycles(&graph));
    }

    #[test]
    fn test_nodes_outside_the_graph_are_rejected() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ());
        let outside = b + 5;

        let error = greedy_augment(&mut graph, &[outside], &[a]).unwrap_err();
        match error.kind() {
            ErrorKind::NodeNotInGraph(6) => {}
            other => panic!("unexpected error kind: {:?}", other),
        }
        assert_eq!(graph.edge_count(), 1);
    }
}
