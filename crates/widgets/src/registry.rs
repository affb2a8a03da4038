//! One-pass bootstrap over a loaded page plus event routing.
//!
//! The host calls [`WidgetRegistry::bootstrap`] once after the element tree
//! is available, then feeds every UI event through
//! [`WidgetRegistry::dispatch`]. Auto-instantiation scans the same fixed
//! conventions the markup uses: the `phone-input` and `simple-phone-input`
//! container classes, every `input[type=password]`, and a body marked
//! `home-page` for the back-to-top control. Each widget stays individually
//! attachable for callers that opt out of scanning.

use crate::back_to_top::{BackToTop, BackToTopOptions};
use crate::event::{PageAction, UiEvent};
use crate::page::Page;
use crate::password_toggle::{PasswordToggle, PasswordToggleOptions};
use crate::phone_input::{PhoneInput, PhoneInputOptions};
use crate::simple_phone::{SimplePhoneInput, SimplePhoneOptions};
use dom::{Id, mutate, query};

#[derive(Debug, Default)]
pub struct WidgetRegistry {
    phones: Vec<PhoneInput>,
    simple_phones: Vec<SimplePhoneInput>,
    password_toggles: Vec<PasswordToggle>,
    back_to_top: Option<BackToTop>,
}

impl WidgetRegistry {
    /// Scan the page once and construct every applicable widget.
    pub fn bootstrap(page: &mut Page) -> Self {
        let mut registry = Self::default();

        for name in container_names(page, "phone-input") {
            if let Some(widget) = PhoneInput::attach(page, &name, PhoneInputOptions::default()) {
                registry.phones.push(widget);
            }
        }

        for name in container_names(page, "simple-phone-input") {
            if let Some(widget) =
                SimplePhoneInput::attach(page, &name, SimplePhoneOptions::default())
            {
                registry.simple_phones.push(widget);
            }
        }

        for name in password_input_names(page) {
            if let Some(widget) =
                PasswordToggle::attach(page, &name, PasswordToggleOptions::default())
            {
                registry.password_toggles.push(widget);
            }
        }

        let home_page = query::find_element_named(&page.dom, "body")
            .is_some_and(|body| query::has_class(body, "home-page"));
        if home_page {
            registry.back_to_top = BackToTop::attach(page, BackToTopOptions::default());
        }

        log::debug!(
            target: "widgets.bootstrap",
            "attached {} phone, {} simple phone, {} password, back-to-top: {}",
            registry.phones.len(),
            registry.simple_phones.len(),
            registry.password_toggles.len(),
            registry.back_to_top.is_some(),
        );

        registry
    }

    /// Route one event through every widget.
    ///
    /// Widget targets are disjoint, so at most one widget produces an
    /// action; the first one wins.
    pub fn dispatch(&mut self, page: &mut Page, event: &UiEvent) -> Option<PageAction> {
        for widget in &mut self.phones {
            if let Some(action) = widget.handle(page, event) {
                return Some(action);
            }
        }
        for widget in &mut self.simple_phones {
            if let Some(action) = widget.handle(page, event) {
                return Some(action);
            }
        }
        for widget in &mut self.password_toggles {
            if let Some(action) = widget.handle(page, event) {
                return Some(action);
            }
        }
        if let Some(widget) = self.back_to_top.as_mut()
            && let Some(action) = widget.handle(page, event)
        {
            return Some(action);
        }
        None
    }

    pub fn phone(&self, container: &str) -> Option<&PhoneInput> {
        self.phones.iter().find(|w| w.container() == container)
    }

    pub fn phone_mut(&mut self, container: &str) -> Option<&mut PhoneInput> {
        self.phones.iter_mut().find(|w| w.container() == container)
    }

    pub fn simple_phone(&self, container: &str) -> Option<&SimplePhoneInput> {
        self.simple_phones
            .iter()
            .find(|w| w.container() == container)
    }

    pub fn simple_phone_mut(&mut self, container: &str) -> Option<&mut SimplePhoneInput> {
        self.simple_phones
            .iter_mut()
            .find(|w| w.container() == container)
    }

    pub fn password_toggle(&self, input_name: &str) -> Option<&PasswordToggle> {
        self.password_toggles
            .iter()
            .find(|w| w.input_name() == input_name)
    }

    pub fn back_to_top(&self) -> Option<&BackToTop> {
        self.back_to_top.as_ref()
    }

    /// The composite value of the phone widget in `container`, or empty when
    /// no such widget initialized (an uninitialized widget reads as empty).
    pub fn phone_value(&self, page: &Page, container: &str) -> String {
        self.phone(container)
            .map(|w| w.value(page))
            .unwrap_or_default()
    }

    pub fn simple_phone_value(&self, page: &Page, container: &str) -> String {
        self.simple_phone(container)
            .map(|w| w.value(page))
            .unwrap_or_default()
    }
}

/// HTML ids of the elements carrying `class`, in document order. Containers
/// without an id cannot host a widget and are skipped.
fn container_names(page: &Page, class: &str) -> Vec<String> {
    let mut ids = Vec::new();
    query::collect_elements_with_class(&page.dom, class, &mut ids);

    let mut names = Vec::new();
    for id in ids {
        match page.node(id).and_then(query::html_id) {
            Some(name) => names.push(name.to_string()),
            None => {
                log::warn!(
                    target: "widgets.bootstrap",
                    "element with class {class:?} has no id attribute; skipping"
                );
            }
        }
    }
    names
}

/// HTML ids of every password input, generating `password_{index}` ids for
/// inputs that lack one.
fn password_input_names(page: &mut Page) -> Vec<String> {
    let mut ids: Vec<Id> = Vec::new();
    query::collect_inputs_of_type(&page.dom, query::InputType::Password, &mut ids);

    let mut names = Vec::new();
    for (index, id) in ids.into_iter().enumerate() {
        let existing = page.node(id).and_then(query::html_id).map(str::to_string);
        let name = match existing {
            Some(name) => name,
            None => {
                let generated = format!("password_{index}");
                if let Some(node) = page.node_mut(id) {
                    mutate::set_attr(node, "id", Some(&generated));
                }
                generated
            }
        };
        names.push(name);
    }
    names
}
