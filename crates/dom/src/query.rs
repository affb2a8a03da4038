//! Read-only lookups over the node tree.
//!
//! Tag and attribute *names* compare ASCII-case-insensitively; attribute
//! *values* and class tokens compare exactly.

use crate::{Id, Node};

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// The element's `id="…"` attribute (the author-visible identifier, distinct
/// from the internal [`Id`]).
pub fn html_id(node: &Node) -> Option<&str> {
    attr(node, "id").map(str::trim).filter(|s| !s.is_empty())
}

pub fn has_class(node: &Node, class: &str) -> bool {
    attr(node, "class")
        .is_some_and(|v| v.split_ascii_whitespace().any(|token| token == class))
}

pub fn find_by_html_id<'a>(node: &'a Node, wanted: &str) -> Option<&'a Node> {
    if html_id(node) == Some(wanted) {
        return Some(node);
    }
    if let Some(children) = node.children() {
        for c in children {
            if let Some(found) = find_by_html_id(c, wanted) {
                return Some(found);
            }
        }
    }
    None
}

/// First element with the given tag name, in document order.
pub fn find_element_named<'a>(node: &'a Node, tag: &str) -> Option<&'a Node> {
    if node.is_element_named(tag) {
        return Some(node);
    }
    if let Some(children) = node.children() {
        for c in children {
            if let Some(found) = find_element_named(c, tag) {
                return Some(found);
            }
        }
    }
    None
}

/// Collect the ids of every element carrying `class` as a class token.
pub fn collect_elements_with_class(node: &Node, class: &str, out: &mut Vec<Id>) {
    if has_class(node, class) {
        out.push(node.id());
    }
    if let Some(children) = node.children() {
        for c in children {
            collect_elements_with_class(c, class, out);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    Password,
    Tel,
    Hidden,
    Other,
}

pub fn input_type(node: &Node) -> InputType {
    if !node.is_element_named("input") {
        return InputType::Other;
    }

    let ty = attr(node, "type").map(str::trim).filter(|s| !s.is_empty());

    match ty {
        None => InputType::Text, // missing type defaults to text
        Some(t) if t.eq_ignore_ascii_case("text") => InputType::Text,
        Some(t) if t.eq_ignore_ascii_case("password") => InputType::Password,
        Some(t) if t.eq_ignore_ascii_case("tel") => InputType::Tel,
        Some(t) if t.eq_ignore_ascii_case("hidden") => InputType::Hidden,
        _ => InputType::Other,
    }
}

/// Collect the ids of every `<input>` whose type classifies as `wanted`.
pub fn collect_inputs_of_type(node: &Node, wanted: InputType, out: &mut Vec<Id>) {
    if input_type(node) == wanted {
        out.push(node.id());
    }
    if let Some(children) = node.children() {
        for c in children {
            collect_inputs_of_type(c, wanted, out);
        }
    }
}
