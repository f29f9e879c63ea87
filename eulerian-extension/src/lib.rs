//! Augmentation of directed multigraphs into Eulerian graphs.
//!
//! A directed graph is Eulerian if it is weakly connected and every node has equal in- and outdegree.
//! This crate computes a small set of additional edges that makes a given graph Eulerian,
//! searching exhaustively for a minimal set when the imbalance is small and falling back to a greedy pairing otherwise.
//!
//! ```
//! use eulerian_extension::algo::augmentation::make_eulerian;
//! use eulerian_extension::algo::eulerian::is_eulerian;
//! use eulerian_extension::io::graph_from_labelled_edges;
//!
//! let mut graph = graph_from_labelled_edges([("A", "B"), ("B", "C"), ("C", "D")]);
//! let added_edges = make_eulerian(&mut graph).unwrap();
//! assert_eq!(added_edges.len(), 1);
//! assert!(is_eulerian(&graph));
//! ```

#![recursion_limit = "1024"]

/// The algorithms of this crate.
pub mod algo;
/// Configuration of the augmentation algorithms.
pub mod config;
/// The error type of this crate.
pub mod error;
/// Implementations of the graph traits.
pub mod implementation;
/// Strongly typed node and edge indices.
pub mod index;
/// The graph traits.
pub mod interface;
/// Construction of graphs from labelled edge lists.
pub mod io;
