//! Topological sorting of directed graphs by depth-first search.
//!
//! Build a [`Graph`] by inserting edges, then call [`topological_sort`]. An
//! acyclic graph yields a [`TopologicalOrder`]; a graph with a cycle yields
//! [`CycleDetected`] describing the cycle that was found.

pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod models;
pub mod sorter;

pub use error::{GraphError, Result};
pub use graph::Graph;
pub use models::{SortReport, VertexTimes};
pub use sorter::{CycleDetected, TopologicalOrder, is_acyclic, topological_sort};
