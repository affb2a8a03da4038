//! In-place edits on element nodes.
//!
//! These helpers operate on a node the caller has already located (via
//! [`crate::traverse::find_node_by_id_mut`] or similar). They are no-ops on
//! non-element nodes; the widget layer treats "target is not an element" the
//! same as "target is missing".

use crate::{Id, Node};

/// Set or replace an attribute. Attribute names match ASCII-case-insensitively.
pub fn set_attr(node: &mut Node, name: &str, value: Option<&str>) {
    let Node::Element { attributes, .. } = node else {
        return;
    };

    if let Some(slot) = attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        slot.1 = value.map(str::to_string);
        return;
    }
    attributes.push((name.to_string(), value.map(str::to_string)));
}

pub fn remove_attr(node: &mut Node, name: &str) {
    if let Node::Element { attributes, .. } = node {
        attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    }
}

/// Add a class token if not already present. Other tokens are preserved.
pub fn add_class(node: &mut Node, class: &str) {
    let current = crate::query::attr(node, "class").unwrap_or("");
    if current.split_ascii_whitespace().any(|t| t == class) {
        return;
    }

    let merged = if current.trim().is_empty() {
        class.to_string()
    } else {
        format!("{} {class}", current.trim())
    };
    set_attr(node, "class", Some(&merged));
}

/// Remove a class token. Other tokens are preserved in order.
pub fn remove_class(node: &mut Node, class: &str) {
    let Some(current) = crate::query::attr(node, "class") else {
        return;
    };
    if !current.split_ascii_whitespace().any(|t| t == class) {
        return;
    }

    let remaining = current
        .split_ascii_whitespace()
        .filter(|t| *t != class)
        .collect::<Vec<_>>()
        .join(" ");
    set_attr(node, "class", Some(&remaining));
}

/// Set or replace one inline style property. Property names match exactly.
pub fn set_style_prop(node: &mut Node, prop: &str, value: &str) {
    let Node::Element { style, .. } = node else {
        return;
    };

    if let Some(slot) = style.iter_mut().find(|(k, _)| k == prop) {
        slot.1 = value.to_string();
        return;
    }
    style.push((prop.to_string(), value.to_string()));
}

pub fn style_prop<'a>(node: &'a Node, prop: &str) -> Option<&'a str> {
    match node {
        Node::Element { style, .. } => style
            .iter()
            .find(|(k, _)| k == prop)
            .map(|(_, v)| v.as_str()),
        _ => None,
    }
}

/// Drop all existing children and install `children` in their place.
pub fn replace_children(node: &mut Node, children: Vec<Node>) {
    if let Some(slot) = node.children_mut() {
        *slot = children;
    }
}

pub fn append_child(node: &mut Node, child: Node) {
    if let Some(children) = node.children_mut() {
        children.push(child);
    }
}

/// Replace the child identified by `target` with `wrapper`, which adopts the
/// child as its last child. The wrapper must already carry an assigned id.
///
/// Returns `true` if the target was found and spliced.
pub fn wrap_node(root: &mut Node, target: Id, wrapper: Node) -> bool {
    fn walk(node: &mut Node, target: Id, wrapper: &mut Option<Node>) -> bool {
        let Some(children) = node.children_mut() else {
            return false;
        };

        if let Some(pos) = children.iter().position(|c| c.id() == target) {
            // The walk stops at the first splice, so the wrapper is still here.
            let Some(mut wrapper) = wrapper.take() else {
                return false;
            };
            let adopted = std::mem::replace(&mut children[pos], wrapper_placeholder());
            if let Some(slot) = wrapper.children_mut() {
                slot.push(adopted);
            }
            children[pos] = wrapper;
            return true;
        }

        for c in children {
            if walk(c, target, wrapper) {
                return true;
            }
        }
        false
    }

    fn wrapper_placeholder() -> Node {
        Node::Comment {
            id: Id(0),
            text: String::new(),
        }
    }

    let mut wrapper = Some(wrapper);
    walk(root, target, &mut wrapper)
}
