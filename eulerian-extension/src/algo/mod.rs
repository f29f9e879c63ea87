/// Making a graph Eulerian by adding edges, either by exhaustive search or greedily.
pub mod augmentation;
/// Weakly connected components, and connecting them with additional edges.
pub mod components;
/// In- and outdegree imbalance of nodes.
pub mod degree;
/// Deciding if a graph is Eulerian.
pub mod eulerian;
/// Algorithms to create certain parameterisable graph classes, like stars or random multigraphs.
pub mod predefined_graphs;
