use error_chain::error_chain;

error_chain! {
    errors {
        MismatchedImbalance(missing_out: usize, missing_in: usize) {
            description("the nodes missing outgoing edges and the nodes missing incoming edges cannot be paired up")
            display("{} node slots are missing outgoing edges, but {} node slots are missing incoming edges", missing_out, missing_in)
        }

        NodeNotInGraph(node: usize) {
            description("a node index does not belong to the graph")
            display("node index {} does not belong to the graph", node)
        }

        MalformedEdge(edge: String) {
            description("an edge is not of the form 'from->to'")
            display("malformed edge '{}', expected the form 'from->to'", edge)
        }

        EmptyNodeLabel(edge: String) {
            description("an edge has an empty node label")
            display("edge '{}' has an empty node label", edge)
        }

        ExactThresholdTooLarge(threshold: usize, maximum: usize) {
            description("the exact search threshold is too large for exhaustive search")
            display("exact search threshold {} is larger than the supported maximum {}", threshold, maximum)
        }
    }
}
