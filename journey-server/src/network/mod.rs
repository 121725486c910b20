//! The transit network: graph model, definitions and the built-in data.
//!
//! The graph is built once at startup from a [`NetworkDefinition`] and is
//! immutable afterwards.

mod definition;
mod graph;
mod mumbai;

pub use definition::{JunctionDefinition, LineDefinition, NetworkDefinition, NetworkError};
pub use graph::{TransitGraph, TransitGraphBuilder};
pub use mumbai::mumbai_network;
