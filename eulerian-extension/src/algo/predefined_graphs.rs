use crate::interface::DynamicGraph;
use rand::Rng;

/// Adds a star with edges from a center to `leaf_amount` leaves to the given graph.
/// The first added node is the center of the star, which is returned.
///
/// Every leaf has one more incoming than outgoing edge, so the star needs `leaf_amount` additional edges to become Eulerian.
pub fn create_star<Graph: DynamicGraph>(graph: &mut Graph, leaf_amount: usize) -> Graph::NodeIndex
where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    let center = graph.add_node(Default::default());
    for _ in 0..leaf_amount {
        let leaf = graph.add_node(Default::default());
        graph.add_edge(center, leaf, Default::default());
    }
    center
}

/// Adds a directed path with `node_amount` nodes to the given graph.
/// Returns the first and the last node of the path, or `None` if `node_amount` is zero.
pub fn create_path<Graph: DynamicGraph>(
    graph: &mut Graph,
    node_amount: usize,
) -> Option<(Graph::NodeIndex, Graph::NodeIndex)>
where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    if node_amount == 0 {
        return None;
    }

    let first = graph.add_node(Default::default());
    let mut last = first;
    for _ in 1..node_amount {
        let next = graph.add_node(Default::default());
        graph.add_edge(last, next, Default::default());
        last = next;
    }
    Some((first, last))
}

/// Adds `cycle_amount` disjoint directed cycles of `cycle_length` nodes each to the given graph.
/// The result is balanced, but not weakly connected if there is more than one cycle.
pub fn create_disjoint_cycles<Graph: DynamicGraph>(
    graph: &mut Graph,
    cycle_amount: usize,
    cycle_length: usize,
) where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    for _ in 0..cycle_amount {
        if let Some((first, last)) = create_path(graph, cycle_length) {
            graph.add_edge(last, first, Default::default());
        }
    }
}

/// Adds `node_amount` nodes and `edge_amount` edges with uniformly random endpoints to the given graph.
/// The result may contain self-loops, parallel edges and isolated nodes.
///
/// Edges are only added between the new nodes.
/// If `node_amount` is zero, no edges are added.
pub fn create_random_multigraph<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    node_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    if node_amount == 0 {
        return;
    }

    let offset = graph.node_count();
    for _ in 0..node_amount {
        graph.add_node(Default::default());
    }
    for _ in 0..edge_amount {
        let from_node = Graph::NodeIndex::from(offset + random.gen_range(0..node_amount));
        let to_node = Graph::NodeIndex::from(offset + random.gen_range(0..node_amount));
        graph.add_edge(from_node, to_node, Default::default());
    }
}
