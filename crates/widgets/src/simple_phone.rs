//! Freeform phone input: a permissive character mask, a length cap, and a
//! carrier mirroring the displayed text verbatim.

use crate::event::{Key, PageAction, UiEvent};
use crate::marks::apply_validity_marks;
use crate::page::Page;
use dom::build::{self, attr_pair};
use dom::{Id, mutate, query};
use widget_core::mask::{is_phone_char, phone_charset, truncate_chars};
use widget_core::validate::freeform_validity;

#[derive(Clone, Debug)]
pub struct SimplePhoneOptions {
    pub placeholder: String,
    /// Cap on the displayed text length, in characters.
    pub max_length: usize,
}

impl Default for SimplePhoneOptions {
    fn default() -> Self {
        Self {
            placeholder: "Enter phone number".to_string(),
            max_length: 15,
        }
    }
}

/// The freeform phone widget.
///
/// Unlike [`crate::PhoneInput`] there is no dial-code state and no composite
/// transformation: the carrier always holds exactly what the field shows.
#[derive(Debug)]
pub struct SimplePhoneInput {
    container_name: String,
    field: Id,
    carrier: Id,
    max_length: usize,
}

impl SimplePhoneInput {
    /// Build the widget inside the container with the given HTML id, or
    /// `None` when the page has no such container.
    pub fn attach(page: &mut Page, container: &str, options: SimplePhoneOptions) -> Option<Self> {
        let Some(node) = query::find_by_html_id(&page.dom, container) else {
            log::debug!(
                target: "widgets.simple_phone",
                "container {container:?} not found; skipping"
            );
            return None;
        };
        let container_id = node.id();

        let mut field = build::element(
            "input",
            vec![
                attr_pair("type", "tel"),
                attr_pair("class", "form-control"),
                attr_pair("id", &format!("{container}_number")),
                attr_pair("placeholder", &options.placeholder),
                attr_pair("maxlength", &options.max_length.to_string()),
            ],
        );
        page.ids.adopt(&mut field);
        let field_id = field.id();

        let mut carrier = build::element(
            "input",
            vec![
                attr_pair("type", "hidden"),
                attr_pair("id", &format!("{container}_full")),
                attr_pair("name", "phone"),
            ],
        );
        page.ids.adopt(&mut carrier);
        let carrier_id = carrier.id();

        let mut wrapper = build::element_with_children(
            "div",
            vec![attr_pair("class", "simple-phone-container")],
            vec![field, carrier],
        );
        page.ids.adopt(&mut wrapper);

        if let Some(target) = page.node_mut(container_id) {
            mutate::replace_children(target, vec![wrapper]);
        }

        Some(Self {
            container_name: container.to_string(),
            field: field_id,
            carrier: carrier_id,
            max_length: options.max_length,
        })
    }

    pub fn container(&self) -> &str {
        &self.container_name
    }

    pub fn handle(&mut self, page: &mut Page, event: &UiEvent) -> Option<PageAction> {
        match event {
            UiEvent::Input { target, text } if *target == self.field => {
                let masked = phone_charset(text);
                let capped = truncate_chars(&masked, self.max_length).to_string();
                page.set_value(self.field, &capped);
                // The carrier mirrors the displayed text exactly.
                page.set_value(self.carrier, &capped);
                None
            }
            UiEvent::KeyPress { target, key } if *target == self.field => {
                match key {
                    Key::Char(c) if !is_phone_char(*c) => Some(PageAction::RejectKey),
                    // Editing/navigation keys and allowed characters pass.
                    _ => None,
                }
            }
            UiEvent::Blur { target } if *target == self.field => {
                self.validate(page);
                None
            }
            _ => None,
        }
    }

    /// Re-run validation against the displayed text and update the marker.
    pub fn validate(&mut self, page: &mut Page) -> bool {
        let validity = freeform_validity(page.value_of(self.field));
        apply_validity_marks(page, self.field, validity);
        validity.is_acceptable()
    }

    /// Import a value verbatim; no masking and no parsing on this path.
    pub fn set_value(&mut self, page: &mut Page, phone: &str) {
        if phone.is_empty() {
            return;
        }
        page.set_value(self.field, phone);
        page.set_value(self.carrier, phone);
    }

    pub fn value(&self, page: &Page) -> String {
        page.value_of(self.carrier).to_string()
    }
}
