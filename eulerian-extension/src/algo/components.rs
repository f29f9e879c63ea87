use crate::index::GraphIndex;
use crate::interface::{DynamicGraph, Edge, StaticGraph};
use log::trace;
use std::collections::VecDeque;

const UNVISITED: usize = usize::MAX;

/// The weakly connected components of a graph, i.e. the connected components when ignoring edge directions.
///
/// Components are numbered in the order of their smallest node index,
/// and the smallest node index of each component is its representative.
/// The buffers are kept between calls to `compute`, so the same instance can be reused for many graphs of the same size without allocating.
#[derive(Debug, Clone)]
pub struct WeakComponents<NodeIndex> {
    component_of: Vec<usize>,
    representatives: Vec<NodeIndex>,
    queue: VecDeque<NodeIndex>,
}

impl<NodeIndex: GraphIndex> Default for WeakComponents<NodeIndex> {
    fn default() -> Self {
        Self {
            component_of: Vec::new(),
            representatives: Vec::new(),
            queue: VecDeque::new(),
        }
    }
}

impl<NodeIndex: GraphIndex> WeakComponents<NodeIndex> {
    /// Creates an instance without components.
    /// Call `compute` to fill it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the weakly connected components of the given graph, replacing the previous result.
    pub fn compute<Graph: StaticGraph<NodeIndex = NodeIndex>>(&mut self, graph: &Graph) {
        self.component_of.clear();
        self.component_of.resize(graph.node_count(), UNVISITED);
        self.representatives.clear();
        self.queue.clear();

        for start in graph.node_indices() {
            if self.component_of[start.as_usize()] != UNVISITED {
                continue;
            }

            let component = self.representatives.len();
            self.representatives.push(start);
            self.component_of[start.as_usize()] = component;
            self.queue.push_back(start);

            while let Some(node) = self.queue.pop_front() {
                let neighbors = graph
                    .out_neighbors(node)
                    .chain(graph.in_neighbors(node))
                    .map(|neighbor| neighbor.node_id);
                for neighbor in neighbors {
                    if self.component_of[neighbor.as_usize()] == UNVISITED {
                        self.component_of[neighbor.as_usize()] = component;
                        self.queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    /// Returns the amount of components found by the last call to `compute`.
    pub fn component_count(&self) -> usize {
        self.representatives.len()
    }

    /// Returns the representative of each component, ordered by component.
    pub fn representatives(&self) -> &[NodeIndex] {
        &self.representatives
    }

    /// Returns the component of the given node.
    pub fn component_of(&self, node: NodeIndex) -> usize {
        self.component_of[node.as_usize()]
    }

    /// Computes the components of the given graph and chains them together with one edge per consecutive pair of components.
    /// The edge from component `i` to component `i + 1` connects their representatives.
    /// Returns the added edges in insertion order.
    ///
    /// The added edges make the graph weakly connected, but break the degree balance of the representatives.
    pub fn connect<Graph: DynamicGraph<NodeIndex = NodeIndex>>(
        &mut self,
        graph: &mut Graph,
    ) -> Vec<Edge<NodeIndex>>
    where
        Graph::EdgeData: Default,
    {
        self.compute(&*graph);
        if self.component_count() <= 1 {
            return Vec::new();
        }

        let added_edges: Vec<_> = self
            .representatives
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .collect();
        for edge in &added_edges {
            graph.add_edge(edge.from_node, edge.to_node, Default::default());
        }

        trace!(
            "Connected {} weakly connected components with {} edges",
            self.component_count(),
            added_edges.len()
        );
        added_edges
    }
}

/// Decomposes the graph into its weakly connected components, given as lists of their nodes in ascending order.
/// The components are ordered by their smallest node.
pub fn decompose_weakly_connected_components<Graph: StaticGraph>(
    graph: &Graph,
) -> Vec<Vec<Graph::NodeIndex>> {
    let mut components = WeakComponents::new();
    components.compute(graph);

    let mut result = vec![Vec::new(); components.component_count()];
    for node in graph.node_indices() {
        result[components.component_of(node)].push(node);
    }
    result
}

/// Returns true if the graph is weakly connected.
/// Graphs without nodes and graphs with a single node are weakly connected.
pub fn is_weakly_connected<Graph: StaticGraph>(graph: &Graph) -> bool {
    let mut components = WeakComponents::new();
    components.compute(graph);
    components.component_count() <= 1
}

/// Makes the graph weakly connected by chaining its weakly connected components with additional edges.
/// If the graph is already weakly connected, nothing is added.
///
/// See `WeakComponents::connect` for the choice of edges.
pub fn connect_components<Graph: DynamicGraph>(graph: &mut Graph) -> Vec<Edge<Graph::NodeIndex>>
where
    Graph::EdgeData: Default,
{
    WeakComponents::new().connect(graph)
}

#[cfg(test)]
mod tests {
    use super::{
        connect_components, decompose_weakly_connected_components, is_weakly_connected,
        WeakComponents,
    };
    use crate::implementation::petgraph_impl;
    use crate::interface::{Edge, ImmutableGraphContainer, MutableGraphContainer};

    #[test]
    fn test_decompose_weakly_connected_components_ignores_direction() {
        let mut graph = petgraph_impl::new();
        let n0 = graph.add_node(0);
        let n1 = graph.add_node(1);
        let n2 = graph.add_node(2);
        let n3 = graph.add_node(3);
        let n4 = graph.add_node(4);
        graph.add_edge(n1, n0, ());
        graph.add_edge(n3, n1, ());
        graph.add_edge(n2, n4, ());
        graph.add_edge(n4, n4, ());

        let components = decompose_weakly_connected_components(&graph);
        assert_eq!(components, vec![vec![n0, n1, n3], vec![n2, n4]]);
        assert!(!is_weakly_connected(&graph));
    }

    #[test]
    fn test_components_of_empty_and_single_node_graphs() {
        let mut graph = petgraph_impl::new::<(), ()>();
        assert!(is_weakly_connected(&graph));
        assert!(decompose_weakly_connected_components(&graph).is_empty());

        graph.add_node(());
        assert!(is_weakly_connected(&graph));
        assert_eq!(connect_components(&mut graph), Vec::new());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_connect_components_chains_representatives() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node('A');
        let b = graph.add_node('B');
        let c = graph.add_node('C');
        let d = graph.add_node('D');
        let e = graph.add_node('E');
        let f = graph.add_node('F');
        graph.add_edge(b, a, ());
        graph.add_edge(d, c, ());
        graph.add_edge(f, e, ());

        let added = connect_components(&mut graph);
        assert_eq!(added, vec![Edge::new(a, c), Edge::new(c, e)]);
        assert_eq!(graph.edge_count(), 5);
        assert!(is_weakly_connected(&graph));
    }

    #[test]
    fn test_connect_components_includes_isolated_nodes() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let isolated = graph.add_node(());
        graph.add_edge(a, b, ());
        graph.add_edge(b, a, ());

        let added = connect_components(&mut graph);
        assert_eq!(added, vec![Edge::new(a, isolated)]);
        assert!(is_weakly_connected(&graph));
    }

    #[test]
    fn test_weak_components_reuse() {
        let mut graph = petgraph_impl::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, ());

        let mut components = WeakComponents::new();
        components.compute(&graph);
        assert_eq!(components.component_count(), 2);
        assert_eq!(components.representatives(), &[a, c]);
        assert_eq!(components.component_of(b), 0);
        assert_eq!(components.component_of(c), 1);

        graph.add_edge(c, b, ());
        components.compute(&graph);
        assert_eq!(components.component_count(), 1);
        assert_eq!(components.representatives(), &[a]);
        assert_eq!(components.component_of(c), 0);
    }
}
