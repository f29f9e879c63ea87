use crate::index::{GraphIndex, GraphIndices};
use crate::interface::{
    DynamicGraph, Edge, GraphBase, ImmutableGraphContainer, MutableGraphContainer, NavigableGraph,
    Neighbor,
};
use num_traits::{PrimInt, ToPrimitive};
use petgraph::graph::{DiGraph, Edges};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use std::iter::Map;

pub use petgraph;

/// The petgraph-backed directed multigraph used throughout this crate.
/// Parallel edges and self-loops are allowed.
pub type PetGraph<NodeData, EdgeData> = DiGraph<NodeData, EdgeData, usize>;

/// Creates an empty petgraph-backed graph that is only accessible through the graph traits.
pub fn new<NodeData: 'static + Clone, EdgeData: 'static + Clone>(
) -> impl DynamicGraph<NodeData = NodeData, EdgeData = EdgeData> + Default + Clone {
    PetGraph::<NodeData, EdgeData>::default()
}

impl<NodeData, EdgeData> GraphBase for PetGraph<NodeData, EdgeData> {
    type NodeData = NodeData;
    type EdgeData = EdgeData;
    type NodeIndex = crate::index::NodeIndex<usize>;
    type EdgeIndex = crate::index::EdgeIndex<usize>;
}

impl<NodeData, EdgeData> ImmutableGraphContainer for PetGraph<NodeData, EdgeData> {
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex> {
        GraphIndices::from((0, self.node_count()))
    }

    fn edge_indices(&self) -> GraphIndices<Self::EdgeIndex> {
        GraphIndices::from((0, self.edge_count()))
    }

    fn contains_node_index(&self, node_id: Self::NodeIndex) -> bool {
        self.node_weight(node_id.into()).is_some()
    }

    fn node_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count()
    }

    fn node_data(&self, node_id: Self::NodeIndex) -> &Self::NodeData {
        self.node_weight(node_id.into()).unwrap()
    }

    fn edge_count_between(&self, from: Self::NodeIndex, to: Self::NodeIndex) -> usize {
        self.edges_connecting(from.into(), to.into()).count()
    }

    fn edge_endpoints(&self, edge_id: Self::EdgeIndex) -> Edge<Self::NodeIndex> {
        let (from_node, to_node) = self.edge_endpoints(edge_id.into()).unwrap();
        Edge::new(from_node.index().into(), to_node.index().into())
    }
}

impl<NodeData, EdgeData> MutableGraphContainer for PetGraph<NodeData, EdgeData> {
    fn add_node(&mut self, node_data: NodeData) -> Self::NodeIndex {
        self.add_node(node_data).index().into()
    }

    fn add_edge(
        &mut self,
        from: Self::NodeIndex,
        to: Self::NodeIndex,
        edge_data: EdgeData,
    ) -> Self::EdgeIndex {
        self.add_edge(from.into(), to.into(), edge_data)
            .index()
            .into()
    }

    fn remove_last_edge(&mut self) -> Option<EdgeData> {
        // petgraph moves the last edge into the gap, so removing the last edge itself moves nothing.
        let last_edge = self.edge_count().checked_sub(1)?;
        self.remove_edge(petgraph::graph::EdgeIndex::new(last_edge))
    }
}

type PetgraphNeighborTranslator<'a, EdgeData, NodeIndex, EdgeIndex> = Map<
    Edges<'a, EdgeData, Directed, usize>,
    fn(petgraph::graph::EdgeReference<'a, EdgeData, usize>) -> Neighbor<NodeIndex, EdgeIndex>,
>;

impl<'a, NodeData, EdgeData: 'a> NavigableGraph<'a> for PetGraph<NodeData, EdgeData> {
    type OutNeighbors = PetgraphNeighborTranslator<
        'a,
        EdgeData,
        <Self as GraphBase>::NodeIndex,
        <Self as GraphBase>::EdgeIndex,
    >;
    type InNeighbors = PetgraphNeighborTranslator<
        'a,
        EdgeData,
        <Self as GraphBase>::NodeIndex,
        <Self as GraphBase>::EdgeIndex,
    >;

    fn out_neighbors(&'a self, node_id: <Self as GraphBase>::NodeIndex) -> Self::OutNeighbors {
        debug_assert!(node_id.as_usize() < self.node_count());
        self.edges_directed(node_id.into(), Direction::Outgoing)
            .map(|edge| Neighbor {
                edge_id: <Self as GraphBase>::EdgeIndex::from(edge.id().index()),
                node_id: <Self as GraphBase>::NodeIndex::from(edge.target().index()),
            })
    }

    fn in_neighbors(&'a self, node_id: <Self as GraphBase>::NodeIndex) -> Self::InNeighbors {
        debug_assert!(node_id.as_usize() < self.node_count());
        self.edges_directed(node_id.into(), Direction::Incoming)
            .map(|edge| Neighbor {
                edge_id: <Self as GraphBase>::EdgeIndex::from(edge.id().index()),
                node_id: <Self as GraphBase>::NodeIndex::from(edge.source().index()),
            })
    }
}

impl<IndexType: PrimInt + ToPrimitive + std::hash::Hash + petgraph::graph::IndexType>
    From<crate::index::NodeIndex<IndexType>> for petgraph::graph::NodeIndex<IndexType>
{
    fn from(index: crate::index::NodeIndex<IndexType>) -> Self {
        petgraph::graph::NodeIndex::new(index.as_usize())
    }
}

impl<IndexType: PrimInt + ToPrimitive + std::hash::Hash + petgraph::graph::IndexType>
    From<crate::index::EdgeIndex<IndexType>> for petgraph::graph::EdgeIndex<IndexType>
{
    fn from(index: crate::index::EdgeIndex<IndexType>) -> Self {
        petgraph::graph::EdgeIndex::new(index.as_usize())
    }
}

#[cfg(test)]
mod tests {
    use super::new;
    use crate::interface::{Edge, ImmutableGraphContainer, MutableGraphContainer, NavigableGraph};

    #[test]
    fn test_parallel_edges_and_self_loops_are_kept() {
        let mut graph = new::<(), ()>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n1, n1, ());

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_count_between(n0, n1), 2);
        assert_eq!(graph.out_degree(n0), 2);
        assert_eq!(graph.in_degree(n1), 3);
        assert_eq!(graph.out_degree(n1), 1);
    }

    #[test]
    fn test_truncate_edges_restores_previous_edges() {
        let mut graph = new::<(), usize>();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let e0 = graph.add_edge(n0, n1, 0);
        let e1 = graph.add_edge(n1, n2, 1);

        let checkpoint = graph.edge_count();
        graph.add_edge(n2, n0, 2);
        graph.add_edge(n2, n2, 3);
        assert_eq!(graph.edge_count(), 4);

        graph.truncate_edges(checkpoint);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_endpoints(e0), Edge::new(n0, n1));
        assert_eq!(graph.edge_endpoints(e1), Edge::new(n1, n2));
        assert_eq!(graph.in_degree(n0), 0);
        assert_eq!(graph.out_degree(n2), 0);
    }

    #[test]
    fn test_remove_last_edge_on_empty_graph() {
        let mut graph = new::<(), ()>();
        assert_eq!(graph.remove_last_edge(), None);
        graph.truncate_edges(0);
        assert!(graph.is_empty());
    }
}
