use crate::interface::StaticGraph;
use std::cmp::Ordering;

/// The nodes of a graph that have indegree != outdegree.
///
/// Each node is repeated once per unit of difference between its in- and outdegree,
/// and nodes appear in the order of their indices.
/// Since the sum of indegrees equals the sum of outdegrees in every graph, both lists always have the same length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Imbalance<NodeIndex> {
    /// Nodes with indegree > outdegree.
    /// These need additional outgoing edges, and become the tails of edges added to balance the graph.
    pub missing_out: Vec<NodeIndex>,
    /// Nodes with outdegree > indegree.
    /// These need additional incoming edges, and become the heads of edges added to balance the graph.
    pub missing_in: Vec<NodeIndex>,
}

impl<NodeIndex> Imbalance<NodeIndex> {
    /// Returns the amount of edges needed to balance all degrees, ignoring connectivity.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.missing_out.len(), self.missing_in.len());
        self.missing_out.len()
    }

    /// Returns true if all nodes are balanced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The in- and outdegree of a node.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NodeDegree<NodeIndex> {
    /// The node.
    pub node: NodeIndex,
    /// The amount of incoming edges of the node.
    pub in_degree: usize,
    /// The amount of outgoing edges of the node.
    pub out_degree: usize,
}

impl<NodeIndex> NodeDegree<NodeIndex> {
    /// Returns true if the indegree of the node equals its outdegree.
    pub fn is_balanced(&self) -> bool {
        self.in_degree == self.out_degree
    }
}

/// Compute the in- and outdegree of each node, in the order of the node indices.
pub fn node_degrees<Graph: StaticGraph>(graph: &Graph) -> Vec<NodeDegree<Graph::NodeIndex>> {
    graph
        .node_indices()
        .map(|node| NodeDegree {
            node,
            in_degree: graph.in_degree(node),
            out_degree: graph.out_degree(node),
        })
        .collect()
}

/// Compute a vector of tuples of nodes and outdegree - indegree for all nodes that have indegree != outdegree.
pub fn degree_differences<Graph: StaticGraph>(graph: &Graph) -> Vec<(Graph::NodeIndex, isize)> {
    let mut node_indices_and_differences = Vec::new();
    for node_index in graph.node_indices() {
        let difference =
            graph.out_degree(node_index) as isize - graph.in_degree(node_index) as isize;
        if difference != 0 {
            node_indices_and_differences.push((node_index, difference));
        }
    }
    node_indices_and_differences
}

/// Compute the nodes that need additional outgoing or incoming edges to have indegree == outdegree.
pub fn unbalanced_nodes<Graph: StaticGraph>(graph: &Graph) -> Imbalance<Graph::NodeIndex> {
    let mut missing_out = Vec::new();
    let mut missing_in = Vec::new();

    for NodeDegree {
        node,
        in_degree,
        out_degree,
    } in node_degrees(graph)
    {
        match in_degree.cmp(&out_degree) {
            Ordering::Greater => {
                missing_out.extend(std::iter::repeat(node).take(in_degree - out_degree))
            }
            Ordering::Less => {
                missing_in.extend(std::iter::repeat(node).take(out_degree - in_degree))
            }
            Ordering::Equal => {}
        }
    }

    debug_assert_eq!(missing_out.len(), missing_in.len());
    Imbalance {
        missing_out,
        missing_in,
    }
}
