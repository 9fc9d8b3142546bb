//! Foundation types for the paraphrase graph.
//!
//! This module provides the leaf entities every other layer builds on:
//! - [`NodeId`] - Stable, cheaply clonable node identifiers
//! - [`Token`] - One word occurrence at a fixed sentence/position
//!
//! This module has NO dependencies on other paraphrase modules besides the
//! crate error type.

mod node_id;
mod token;

pub use node_id::NodeId;
pub use token::Token;
