//! Visual validity marking shared by both phone widgets.

use crate::page::Page;
use dom::Id;
use dom::mutate::{add_class, remove_class};
use widget_core::PhoneValidity;

/// Reflect validity as exactly one of `is-valid`/`is-invalid`/neither on the
/// field's class list. No message text is produced anywhere.
pub(crate) fn apply_validity_marks(page: &mut Page, field: Id, validity: PhoneValidity) {
    let Some(node) = page.node_mut(field) else {
        return;
    };

    match validity {
        PhoneValidity::Valid => {
            add_class(node, "is-valid");
            remove_class(node, "is-invalid");
        }
        PhoneValidity::Invalid => {
            add_class(node, "is-invalid");
            remove_class(node, "is-valid");
        }
        PhoneValidity::Empty => {
            remove_class(node, "is-valid");
            remove_class(node, "is-invalid");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::build::{self, attr_pair};
    use dom::query::has_class;
    use dom::{Id, Node};

    fn page_with_field() -> (Page, Id) {
        let root = Node::Document {
            id: Id(0),
            doctype: None,
            children: vec![build::element(
                "input",
                vec![attr_pair("class", "form-control")],
            )],
        };
        let page = Page::new(root);
        let field = page.dom.children().unwrap()[0].id();
        (page, field)
    }

    #[test]
    fn marks_are_mutually_exclusive() {
        let (mut page, field) = page_with_field();

        apply_validity_marks(&mut page, field, PhoneValidity::Invalid);
        assert!(has_class(page.node(field).unwrap(), "is-invalid"));
        assert!(!has_class(page.node(field).unwrap(), "is-valid"));

        apply_validity_marks(&mut page, field, PhoneValidity::Valid);
        assert!(has_class(page.node(field).unwrap(), "is-valid"));
        assert!(!has_class(page.node(field).unwrap(), "is-invalid"));

        apply_validity_marks(&mut page, field, PhoneValidity::Empty);
        assert!(!has_class(page.node(field).unwrap(), "is-valid"));
        assert!(!has_class(page.node(field).unwrap(), "is-invalid"));
        // Unrelated classes survive.
        assert!(has_class(page.node(field).unwrap(), "form-control"));
    }
}
