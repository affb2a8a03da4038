//! Document-scoped state the widgets operate against.

use dom::query;
use dom::traverse::{assign_node_ids, find_node_by_id, find_node_by_id_mut};
use dom::{Id, IdAllocator, Node, mutate};

/// A document plus the id allocator for markup injected into it.
///
/// Lifecycle policy: one `Page` per loaded document. Widgets hold `Id`s into
/// the tree and die with it; there is no explicit teardown.
#[derive(Debug)]
pub struct Page {
    pub dom: Node,
    pub ids: IdAllocator,
}

impl Page {
    /// Take ownership of a document root, assigning ids to any node that
    /// still lacks one.
    pub fn new(mut root: Node) -> Self {
        assign_node_ids(&mut root);
        let ids = IdAllocator::seeded_from(&root);
        Self { dom: root, ids }
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.dom, id)
    }

    pub fn node_mut(&mut self, id: Id) -> Option<&mut Node> {
        find_node_by_id_mut(&mut self.dom, id)
    }

    pub fn attr(&self, id: Id, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| query::attr(n, name))
    }

    pub fn set_attr(&mut self, id: Id, name: &str, value: Option<&str>) {
        if let Some(node) = self.node_mut(id) {
            mutate::set_attr(node, name, value);
        }
    }

    /// The field's `value` attribute, or empty when absent.
    pub fn value_of(&self, id: Id) -> &str {
        self.attr(id, "value").unwrap_or("")
    }

    pub fn set_value(&mut self, id: Id, value: &str) {
        self.set_attr(id, "value", Some(value));
    }

    pub fn set_style_prop(&mut self, id: Id, prop: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            mutate::set_style_prop(node, prop, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::build;

    #[test]
    fn new_page_assigns_ids_and_seeds_the_allocator() {
        let root = Node::Document {
            id: Id(0),
            doctype: None,
            children: vec![build::element("body", Vec::new())],
        };

        let mut page = Page::new(root);
        assert_ne!(page.dom.id(), Id(0));

        let fresh = page.ids.alloc();
        assert!(find_node_by_id(&page.dom, fresh).is_none());
    }

    #[test]
    fn value_round_trips_through_the_attribute() {
        let root = Node::Document {
            id: Id(0),
            doctype: None,
            children: vec![build::element("input", Vec::new())],
        };
        let mut page = Page::new(root);
        let input = page.dom.children().unwrap()[0].id();

        assert_eq!(page.value_of(input), "");
        page.set_value(input, "+79123456789");
        assert_eq!(page.value_of(input), "+79123456789");
    }
}
