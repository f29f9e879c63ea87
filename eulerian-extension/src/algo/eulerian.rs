use crate::algo::components::WeakComponents;
use crate::interface::StaticGraph;

/// Returns true if each node of the graph has indegree == outdegree,
/// i.e. if each weakly connected component of the graph contains a Eulerian cycle.
pub fn decomposes_into_eulerian_cycles<Graph: StaticGraph>(graph: &Graph) -> bool {
    for node_index in graph.node_indices() {
        if graph.in_degree(node_index) != graph.out_degree(node_index) {
            return false;
        }
    }

    true
}

/// Returns true if the graph is Eulerian, i.e. if it is weakly connected and each node has indegree == outdegree.
///
/// Graphs without nodes and single-node graphs are Eulerian if they are balanced.
/// Note that a graph with isolated nodes is not weakly connected unless it consists of a single node.
pub fn is_eulerian<Graph: StaticGraph>(graph: &Graph) -> bool {
    is_eulerian_with_buffer(graph, &mut WeakComponents::new())
}

/// Same as `is_eulerian`, but reuses the given component buffers.
pub(crate) fn is_eulerian_with_buffer<Graph: StaticGraph>(
    graph: &Graph,
    components: &mut WeakComponents<Graph::NodeIndex>,
) -> bool {
    if !decomposes_into_eulerian_cycles(graph) {
        return false;
    }

    components.compute(graph);
    components.component_count() <= 1
}

#[cfg(test)]
mod tests {
    use super::{decomposes_into_eulerian_cycles, is_eulerian};
    use crate::implementation::petgraph_impl;
    use crate::interface::{ImmutableGraphContainer, MutableGraphContainer};

    #[test]
    fn test_cycle_is_eulerian() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node('A');
        let b = graph.add_node('B');
        let c = graph.add_node('C');
        graph.add_edge(a, b, ());
        graph.add_edge(b, c, ());
        graph.add_edge(c, a, ());

        assert!(is_eulerian(&graph));
        // Checking must not change the graph.
        assert!(is_eulerian(&graph));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_empty_and_single_node_graphs_are_eulerian() {
        let mut graph = petgraph_impl::new::<(), ()>();
        assert!(is_eulerian(&graph));

        let a = graph.add_node(());
        assert!(is_eulerian(&graph));

        graph.add_edge(a, a, ());
        graph.add_edge(a, a, ());
        assert!(is_eulerian(&graph));
    }

    #[test]
    fn test_path_is_not_eulerian() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ());

        assert!(!decomposes_into_eulerian_cycles(&graph));
        assert!(!is_eulerian(&graph));
    }

    #[test]
    fn test_balanced_but_disconnected_graph_is_not_eulerian() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.add_edge(a, b, ());
        graph.add_edge(b, a, ());
        graph.add_edge(c, d, ());
        graph.add_edge(d, c, ());

        assert!(decomposes_into_eulerian_cycles(&graph));
        assert!(!is_eulerian(&graph));
    }

    #[test]
    fn test_isolated_node_breaks_eulerian_property() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_node(());
        graph.add_edge(a, b, ());
        graph.add_edge(b, a, ());

        assert!(decomposes_into_eulerian_cycles(&graph));
        assert!(!is_eulerian(&graph));
    }

    #[test]
    fn test_parallel_edges_are_counted() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ());
        graph.add_edge(a, b, ());
        graph.add_edge(b, a, ());
        assert!(!is_eulerian(&graph));

        graph.add_edge(b, a, ());
        assert!(is_eulerian(&graph));
    }
}
