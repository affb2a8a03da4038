//! # dom
//!
//! The document surface the widget layer enhances: an owned node tree with
//! opaque per-node ids, plus the traversal, query, and mutation helpers the
//! widgets need to locate targets and splice in their own markup.
//!
//! This crate knows nothing about widgets, events, or rendering. It holds
//! structure only; all behavior lives above it.

pub mod build;
pub mod mutate;
pub mod query;
pub mod traverse;

mod types;

pub use build::IdAllocator;
pub use types::{Id, Node, NodeId};
