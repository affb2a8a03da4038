//! Password visibility toggle: wraps a password field in a positioning
//! container and injects a reveal/obscure button over its trailing edge.

use crate::event::{PageAction, UiEvent};
use crate::page::Page;
use dom::build::{self, attr_pair};
use dom::{Id, mutate, query};

#[derive(Clone, Debug)]
pub struct PasswordToggleOptions {
    pub show_icon: String,
    pub hide_icon: String,
    pub toggle_class: String,
}

impl Default for PasswordToggleOptions {
    fn default() -> Self {
        Self {
            show_icon: "fas fa-eye".to_string(),
            hide_icon: "fas fa-eye-slash".to_string(),
            toggle_class: "password-toggle".to_string(),
        }
    }
}

/// A strict two-state toggle over one password field: obscured (initial) or
/// revealed. Nothing is validated and nothing survives the page.
#[derive(Debug)]
pub struct PasswordToggle {
    input_name: String,
    input: Id,
    button: Id,
    icon: Id,
    revealed: bool,
    show_icon: String,
    hide_icon: String,
}

impl PasswordToggle {
    /// Wrap the input with the given HTML id, or `None` when it is missing.
    pub fn attach(page: &mut Page, input_id: &str, options: PasswordToggleOptions) -> Option<Self> {
        let Some(node) = query::find_by_html_id(&page.dom, input_id) else {
            log::debug!(
                target: "widgets.password",
                "input {input_id:?} not found; skipping"
            );
            return None;
        };
        let input = node.id();

        // Wrapper first: the input moves inside it, keeping its position
        // among its siblings.
        let mut wrapper = build::element(
            "div",
            vec![attr_pair(
                "class",
                "password-toggle-container position-relative",
            )],
        );
        page.ids.adopt(&mut wrapper);
        let wrapper_id = wrapper.id();
        if !mutate::wrap_node(&mut page.dom, input, wrapper) {
            return None;
        }

        let mut icon = build::element("i", vec![attr_pair("class", &options.show_icon)]);
        page.ids.adopt(&mut icon);
        let icon_id = icon.id();

        let mut button = build::element_with_children(
            "button",
            vec![
                attr_pair("type", "button"),
                attr_pair("class", &format!("btn btn-link {}", options.toggle_class)),
            ],
            vec![icon],
        );
        for (prop, value) in [
            ("position", "absolute"),
            ("right", "10px"),
            ("top", "50%"),
            ("transform", "translateY(-50%)"),
            ("border", "none"),
            ("background", "none"),
            ("color", "#6c757d"),
            ("padding", "0"),
            ("z-index", "10"),
        ] {
            mutate::set_style_prop(&mut button, prop, value);
        }
        page.ids.adopt(&mut button);
        let button_id = button.id();

        if let Some(wrapper) = page.node_mut(wrapper_id) {
            mutate::append_child(wrapper, button);
        }

        // Keep typed text clear of the overlapping button.
        page.set_style_prop(input, "padding-right", "40px");

        Some(Self {
            input_name: input_id.to_string(),
            input,
            button: button_id,
            icon: icon_id,
            revealed: false,
            show_icon: options.show_icon,
            hide_icon: options.hide_icon,
        })
    }

    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn handle(&mut self, page: &mut Page, event: &UiEvent) -> Option<PageAction> {
        if let UiEvent::Click { target } = event
            && *target == self.button
        {
            self.toggle(page);
        }
        None
    }

    fn toggle(&mut self, page: &mut Page) {
        self.revealed = !self.revealed;

        let (input_type, icon, title) = if self.revealed {
            ("text", self.hide_icon.as_str(), "Hide password")
        } else {
            ("password", self.show_icon.as_str(), "Show password")
        };

        page.set_attr(self.input, "type", Some(input_type));
        page.set_attr(self.icon, "class", Some(icon));
        page.set_attr(self.button, "title", Some(title));
    }
}
