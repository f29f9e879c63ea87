/// An implementation of the graph traits for `petgraph::graph::DiGraph`.
pub mod petgraph_impl;
