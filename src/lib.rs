//! Random unique node generation for Steiner tree test inputs.

pub mod error;
pub mod generate;
pub mod node;
pub mod node_file;
pub mod prompt;

pub use error::{Error, Result};
pub use generate::{generate_nodes, NodeSet};
pub use node::{Boundary, Node};
