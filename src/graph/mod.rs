//! Location graph.
//!
//! A directed, weighted adjacency structure over named locations, plus a
//! serializable definition for batch-loading it from configuration.

mod adjacency;
mod definition;

pub use adjacency::{Edge, Graph};
pub use definition::{EdgeDefinition, GraphDefinition};
