//! Programmatic construction of node subtrees.
//!
//! Nodes are built with `Id(0)` (unassigned) and receive real ids when the
//! subtree is adopted into a document via an [`IdAllocator`]. Keeping id
//! assignment separate from construction lets builders stay plain functions.

use crate::traverse::max_assigned_id;
use crate::{Id, Node};

pub fn element(name: &str, attributes: Vec<(String, Option<String>)>) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes,
        style: Vec::new(),
        children: Vec::new(),
    }
}

pub fn element_with_children(
    name: &str,
    attributes: Vec<(String, Option<String>)>,
    children: Vec<Node>,
) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes,
        style: Vec::new(),
        children,
    }
}

pub fn text(s: &str) -> Node {
    Node::Text {
        id: Id(0),
        text: s.to_string(),
    }
}

/// Convenience for the ubiquitous `(name, Some(value))` attribute pair.
pub fn attr_pair(name: &str, value: &str) -> (String, Option<String>) {
    (name.to_string(), Some(value.to_string()))
}

/// Hands out fresh node ids for subtrees injected after the document was
/// first id-assigned.
#[derive(Clone, Copy, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Seed the allocator past every id already present in `root`.
    pub fn seeded_from(root: &Node) -> Self {
        Self {
            next: max_assigned_id(root).wrapping_add(1).max(1),
        }
    }

    pub fn alloc(&mut self) -> Id {
        let id = Id(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Assign fresh ids to `node` and every descendant still carrying `Id(0)`.
    pub fn adopt(&mut self, node: &mut Node) {
        if node.id() == Id(0) {
            let id = self.alloc();
            node.set_id(id);
        }
        if let Some(children) = node.children_mut() {
            for c in children {
                self.adopt(c);
            }
        }
    }
}
