use crate::algo::augmentation::check_pairing_arguments;
use crate::algo::components::WeakComponents;
use crate::algo::eulerian::is_eulerian_with_buffer;
use crate::error::Result;
use crate::interface::{DynamicGraph, Edge};
use bitvector::BitVector;
use log::{debug, trace};

/// Counters describing the work done by one exhaustive search.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ExactSearchStatistics {
    /// Complete pairings whose connectivity was repaired and which were checked for being Eulerian.
    pub evaluated_pairings: usize,
    /// Evaluated pairings that resulted in an Eulerian graph.
    pub eulerian_pairings: usize,
    /// Partial pairings that were not extended because they could not improve on the best pairing found so far.
    pub pruned_pairings: usize,
}

/// Augments the graph with a minimum-size set of edges that makes it Eulerian, found by trying all pairings.
///
/// Every permutation of `missing_in` is paired positionally with `missing_out`.
/// Pairs of a node with itself are dropped, the remaining pairs become edges `missing_out[i] -> missing_in[π(i)]`,
/// and the graph is made weakly connected with `WeakComponents::connect`.
/// Among the pairings that result in an Eulerian graph, the one with the fewest added edges wins,
/// ties are broken by the order of the permutations.
///
/// If a pairing was found, its edges are added to the graph and returned in insertion order.
/// Otherwise, `None` is returned and the graph is left unchanged.
/// Dropping self-loop pairs can leave degrees unbalanced, in which case that pairing is simply not Eulerian.
///
/// Fails if the two lists differ in length or contain nodes that are not in the graph.
/// The running time is factorial in the length of the lists.
pub fn exact_augment<Graph: DynamicGraph>(
    graph: &mut Graph,
    missing_out: &[Graph::NodeIndex],
    missing_in: &[Graph::NodeIndex],
) -> Result<Option<Vec<Edge<Graph::NodeIndex>>>>
where
    Graph::EdgeData: Default,
{
    exact_augment_with_statistics(graph, missing_out, missing_in).map(|(added, _)| added)
}

/// Same as `exact_augment`, but additionally returns counters about the search.
pub fn exact_augment_with_statistics<Graph: DynamicGraph>(
    graph: &mut Graph,
    missing_out: &[Graph::NodeIndex],
    missing_in: &[Graph::NodeIndex],
) -> Result<(
    Option<Vec<Edge<Graph::NodeIndex>>>,
    ExactSearchStatistics,
)>
where
    Graph::EdgeData: Default,
{
    check_pairing_arguments(graph, missing_out, missing_in)?;

    let edge_count = graph.edge_count();
    let mut search = ExactSearch::new(graph, missing_out, missing_in);
    search.search(0);
    let ExactSearch {
        best, statistics, ..
    } = search;
    debug_assert_eq!(graph.edge_count(), edge_count);

    debug!(
        "Exact search over {} imbalanced node slots: {} pairings evaluated, {} Eulerian, {} pruned",
        missing_out.len(),
        statistics.evaluated_pairings,
        statistics.eulerian_pairings,
        statistics.pruned_pairings
    );

    if let Some(best) = &best {
        for edge in best {
            graph.add_edge(edge.from_node, edge.to_node, Default::default());
        }
    }
    Ok((best, statistics))
}

/// A backtracking enumeration of all pairings.
///
/// The edges of the current partial pairing are kept in the graph itself,
/// and taken back with `truncate_edges` when backtracking.
struct ExactSearch<'a, Graph: DynamicGraph> {
    graph: &'a mut Graph,
    missing_out: &'a [Graph::NodeIndex],
    missing_in: &'a [Graph::NodeIndex],
    used: BitVector,
    pairing: Vec<Edge<Graph::NodeIndex>>,
    best: Option<Vec<Edge<Graph::NodeIndex>>>,
    components: WeakComponents<Graph::NodeIndex>,
    statistics: ExactSearchStatistics,
}

impl<'a, Graph: DynamicGraph> ExactSearch<'a, Graph>
where
    Graph::EdgeData: Default,
{
    fn new(
        graph: &'a mut Graph,
        missing_out: &'a [Graph::NodeIndex],
        missing_in: &'a [Graph::NodeIndex],
    ) -> Self {
        Self {
            graph,
            missing_out,
            missing_in,
            used: BitVector::new(missing_in.len()),
            pairing: Vec::with_capacity(missing_out.len()),
            best: None,
            components: WeakComponents::new(),
            statistics: Default::default(),
        }
    }

    /// Extends the current pairing by assigning a head to `missing_out[position]`, in the order of `missing_in`.
    fn search(&mut self, position: usize) {
        // Every completion has at least as many edges as the partial pairing.
        if let Some(best) = &self.best {
            if self.pairing.len() >= best.len() {
                self.statistics.pruned_pairings += 1;
                return;
            }
        }

        if position == self.missing_out.len() {
            self.evaluate_pairing();
            return;
        }

        let from_node = self.missing_out[position];
        for candidate in 0..self.missing_in.len() {
            if self.used.contains(candidate) {
                continue;
            }
            // Equal heads give equal pairings, only the first unused one is tried.
            if candidate > 0
                && self.missing_in[candidate] == self.missing_in[candidate - 1]
                && !self.used.contains(candidate - 1)
            {
                continue;
            }

            let to_node = self.missing_in[candidate];
            let edge_count = self.graph.edge_count();
            let is_self_loop = from_node == to_node;
            self.used.insert(candidate);
            if !is_self_loop {
                self.graph.add_edge(from_node, to_node, Default::default());
                self.pairing.push(Edge::new(from_node, to_node));
            }

            self.search(position + 1);

            if !is_self_loop {
                self.pairing.pop();
            }
            self.graph.truncate_edges(edge_count);
            self.used.remove(candidate);
        }
    }

    /// Repairs connectivity for the complete current pairing and records it if it is the best Eulerian pairing so far.
    fn evaluate_pairing(&mut self) {
        self.statistics.evaluated_pairings += 1;
        let edge_count = self.graph.edge_count();
        let connecting_edges = self.components.connect(self.graph);

        if is_eulerian_with_buffer(&*self.graph, &mut self.components) {
            self.statistics.eulerian_pairings += 1;
            let size = self.pairing.len() + connecting_edges.len();
            let is_better = self.best.as_ref().map_or(true, |best| size < best.len());
            trace!(
                "Eulerian pairing {:?} with connecting edges {:?}",
                self.pairing,
                connecting_edges
            );

            if is_better {
                let mut candidate = self.pairing.clone();
                candidate.extend(connecting_edges);
                self.best = Some(candidate);
            }
        }

        self.graph.truncate_edges(edge_count);
    }
}
