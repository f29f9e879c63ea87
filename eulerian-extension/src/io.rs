use crate::error::{ErrorKind, Result};
use crate::implementation::petgraph_impl::PetGraph;
use crate::interface::DynamicGraph;
use std::collections::HashMap;
use std::hash::Hash;

/// The separator between the source and the target label of an edge in an edge list.
pub const EDGE_SEPARATOR: &str = "->";

/// Adds the given labelled edges to the graph.
/// Each distinct label becomes one node, created when the label is first seen.
/// The source label of an edge is seen before its target label.
///
/// Labels are only matched against each other, not against nodes already in the graph.
/// Returns the nodes created for each label.
pub fn add_labelled_edges<
    Label: Clone + Eq + Hash,
    Graph: DynamicGraph<NodeData = Label>,
    Edges: IntoIterator<Item = (Label, Label)>,
>(
    graph: &mut Graph,
    edges: Edges,
) -> HashMap<Label, Graph::NodeIndex>
where
    Graph::EdgeData: Default,
{
    let mut nodes = HashMap::new();
    for (from_label, to_label) in edges {
        let from_node = *nodes
            .entry(from_label.clone())
            .or_insert_with(|| graph.add_node(from_label));
        let to_node = *nodes
            .entry(to_label.clone())
            .or_insert_with(|| graph.add_node(to_label));
        graph.add_edge(from_node, to_node, Default::default());
    }
    nodes
}

/// Builds a graph from the given labelled edges, see `add_labelled_edges`.
pub fn graph_from_labelled_edges<Label: Clone + Eq + Hash, Edges: IntoIterator<Item = (Label, Label)>>(
    edges: Edges,
) -> PetGraph<Label, ()> {
    let mut graph = PetGraph::default();
    add_labelled_edges(&mut graph, edges);
    graph
}

/// Parses an edge list of the form `A->B,B->C`.
/// Whitespace around edges and labels is ignored.
/// An input consisting only of whitespace is an empty edge list.
pub fn parse_edge_list(input: &str) -> Result<Vec<(String, String)>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input.split(',').map(parse_edge).collect()
}

fn parse_edge(edge: &str) -> Result<(String, String)> {
    let edge = edge.trim();
    let mut labels = edge.split(EDGE_SEPARATOR);
    let (from_label, to_label) = match (labels.next(), labels.next(), labels.next()) {
        (Some(from_label), Some(to_label), None) => (from_label.trim(), to_label.trim()),
        _ => return Err(ErrorKind::MalformedEdge(edge.to_owned()).into()),
    };

    if from_label.is_empty() || to_label.is_empty() {
        return Err(ErrorKind::EmptyNodeLabel(edge.to_owned()).into());
    }
    Ok((from_label.to_owned(), to_label.to_owned()))
}
