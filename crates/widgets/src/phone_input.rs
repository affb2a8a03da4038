//! Country-aware phone input: a dial-code selector, a digits-only number
//! field, and a hidden carrier holding the combined value for submission.

use crate::event::{PageAction, UiEvent};
use crate::marks::apply_validity_marks;
use crate::page::Page;
use dom::build::{self, attr_pair};
use dom::{Id, mutate, query};
use widget_core::countries::{CountryEntry, builtin_countries};
use widget_core::dial::{compose, split_composite};
use widget_core::mask::digits_only;
use widget_core::validate::country_number_validity;

#[derive(Clone, Debug)]
pub struct PhoneInputOptions {
    /// Dial code preselected in the country list.
    pub default_country: String,
    pub countries: Vec<CountryEntry>,
}

impl Default for PhoneInputOptions {
    fn default() -> Self {
        Self {
            default_country: "+7".to_string(),
            countries: builtin_countries(),
        }
    }
}

/// The country-aware phone widget.
///
/// State is the selected dial code plus the masked local digits; the
/// composite value in the hidden carrier is always re-derivable from those
/// two and is rewritten unconditionally after every change (last write
/// wins).
#[derive(Debug)]
pub struct PhoneInput {
    container_name: String,
    select: Id,
    number: Id,
    carrier: Id,
    dial_code: String,
    digits: String,
}

impl PhoneInput {
    /// Build the widget inside the container with the given HTML id.
    ///
    /// Returns `None` when no such container exists: the page simply does
    /// not use this widget, which is not an error.
    pub fn attach(page: &mut Page, container: &str, options: PhoneInputOptions) -> Option<Self> {
        let Some(node) = query::find_by_html_id(&page.dom, container) else {
            log::debug!(target: "widgets.phone", "container {container:?} not found; skipping");
            return None;
        };
        let container_id = node.id();

        let mut select = build::element(
            "select",
            vec![
                attr_pair("class", "form-select"),
                attr_pair("id", &format!("{container}_country")),
            ],
        );
        mutate::set_style_prop(&mut select, "max-width", "120px");
        for country in &options.countries {
            let mut attrs = vec![attr_pair("value", &country.dial_code)];
            if country.dial_code == options.default_country {
                attrs.push(("selected".to_string(), None));
            }
            let option =
                build::element_with_children("option", attrs, vec![build::text(&country.option_label())]);
            mutate::append_child(&mut select, option);
        }
        page.ids.adopt(&mut select);
        let select_id = select.id();

        let mut number = build::element(
            "input",
            vec![
                attr_pair("type", "tel"),
                attr_pair("class", "form-control"),
                attr_pair("id", &format!("{container}_number")),
                attr_pair("placeholder", "999 123 45 67"),
                attr_pair("maxlength", "15"),
            ],
        );
        page.ids.adopt(&mut number);
        let number_id = number.id();

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

        let group = build::element_with_children(
            "div",
            vec![attr_pair("class", "input-group")],
            vec![select, number],
        );
        let mut wrapper = build::element_with_children(
            "div",
            vec![attr_pair("class", "phone-input-container")],
            vec![group, carrier],
        );
        page.ids.adopt(&mut wrapper);

        if let Some(target) = page.node_mut(container_id) {
            mutate::replace_children(target, vec![wrapper]);
        }

        let mut widget = Self {
            container_name: container.to_string(),
            select: select_id,
            number: number_id,
            carrier: carrier_id,
            dial_code: options.default_country,
            digits: String::new(),
        };
        widget.sync_carrier(page);
        Some(widget)
    }

    /// The HTML id of the container this widget was attached to.
    pub fn container(&self) -> &str {
        &self.container_name
    }

    pub fn handle(&mut self, page: &mut Page, event: &UiEvent) -> Option<PageAction> {
        match event {
            UiEvent::Change { target, value } if *target == self.select => {
                // The select's value is trusted verbatim; validation only
                // re-runs on the next number-field blur.
                self.dial_code = value.clone();
                self.sync_carrier(page);
            }
            UiEvent::Input { target, text } if *target == self.number => {
                self.digits = digits_only(text).into_owned();
                page.set_value(self.number, &self.digits);
                self.sync_carrier(page);
            }
            UiEvent::Blur { target } if *target == self.number => {
                self.validate(page);
            }
            _ => {}
        }
        None
    }

    /// Re-run validation and update the field's visual marker.
    ///
    /// Returns `true` when the current digits are acceptable (empty counts
    /// as acceptable; required-ness belongs to the surrounding form).
    pub fn validate(&mut self, page: &mut Page) -> bool {
        let validity = country_number_validity(&self.dial_code, &self.digits);
        apply_validity_marks(page, self.number, validity);
        validity.is_acceptable()
    }

    /// Import a previously exported composite value.
    ///
    /// Values that do not parse as `+`, one-to-four code digits, then number
    /// digits are ignored and the prior state is kept.
    pub fn set_value(&mut self, page: &mut Page, composite: &str) {
        let Some((code, digits)) = split_composite(composite) else {
            log::trace!(target: "widgets.phone", "ignoring unparseable value {composite:?}");
            return;
        };

        self.dial_code = code.to_string();
        self.digits = digits.to_string();
        self.mark_selected_option(page);
        page.set_value(self.number, &self.digits);
        self.sync_carrier(page);
    }

    /// The composite value currently mirrored into the hidden carrier.
    pub fn value(&self, page: &Page) -> String {
        page.value_of(self.carrier).to_string()
    }

    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    fn sync_carrier(&mut self, page: &mut Page) {
        let composite = compose(&self.dial_code, &self.digits);
        page.set_value(self.carrier, &composite);
    }

    /// Move the `selected` attribute to the first option matching the
    /// current dial code; a code with no matching option leaves every
    /// option unselected.
    fn mark_selected_option(&self, page: &mut Page) {
        let Some(select) = page.node_mut(self.select) else {
            return;
        };
        let Some(options) = select.children_mut() else {
            return;
        };

        let mut marked = false;
        for option in options.iter_mut() {
            mutate::remove_attr(option, "selected");
            if !marked && query::attr(option, "value") == Some(self.dial_code.as_str()) {
                mutate::set_attr(option, "selected", None);
                marked = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Node;
    use dom::query::has_class;

    fn page_with_container(container: &str) -> Page {
        let root = Node::Document {
            id: Id(0),
            doctype: None,
            children: vec![build::element_with_children(
                "body",
                Vec::new(),
                vec![build::element(
                    "div",
                    vec![attr_pair("class", "phone-input"), attr_pair("id", container)],
                )],
            )],
        };
        Page::new(root)
    }

    fn attach(page: &mut Page) -> PhoneInput {
        PhoneInput::attach(page, "phone_main", PhoneInputOptions::default()).unwrap()
    }

    #[test]
    fn attach_fails_soft_on_missing_container() {
        let mut page = page_with_container("phone_main");
        assert!(PhoneInput::attach(&mut page, "nope", PhoneInputOptions::default()).is_none());
    }

    #[test]
    fn attach_builds_select_number_and_carrier() {
        let mut page = page_with_container("phone_main");
        let widget = attach(&mut page);

        let select = page.node(widget.select).unwrap();
        assert!(select.is_element_named("select"));
        assert_eq!(select.children().unwrap().len(), 20);

        let number = page.node(widget.number).unwrap();
        assert_eq!(query::attr(number, "type"), Some("tel"));
        assert_eq!(query::attr(number, "placeholder"), Some("999 123 45 67"));

        let carrier = page.node(widget.carrier).unwrap();
        assert_eq!(query::attr(carrier, "type"), Some("hidden"));
        assert_eq!(query::attr(carrier, "name"), Some("phone"));
        // Empty digits mean an empty composite from the start.
        assert_eq!(widget.value(&page), "");
    }

    #[test]
    fn default_country_options_are_preselected() {
        let mut page = page_with_container("phone_main");
        let widget = attach(&mut page);

        let select = page.node(widget.select).unwrap();
        let selected: Vec<&str> = select
            .children()
            .unwrap()
            .iter()
            .filter(|o| query::has_attr(o, "selected"))
            .filter_map(|o| query::attr(o, "value"))
            .collect();
        // Both +7 entries match the default, as in the generated markup.
        assert_eq!(selected, vec!["+7", "+7"]);
    }

    #[test]
    fn input_masks_to_digits_and_rewrites_the_field() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);

        widget.handle(
            &mut page,
            &UiEvent::Input {
                target: widget.number,
                text: "9a1-2 (3)".to_string(),
            },
        );

        assert_eq!(widget.digits(), "9123");
        assert_eq!(page.value_of(widget.number), "9123");
        assert_eq!(widget.value(&page), "+79123");
    }

    #[test]
    fn masking_is_idempotent_at_the_widget_level() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);

        for _ in 0..2 {
            let text = page.value_of(widget.number).to_string();
            widget.handle(
                &mut page,
                &UiEvent::Input {
                    target: widget.number,
                    text: format!("{text}91234"),
                },
            );
        }
        // Second pass re-masked already-clean text plus new digits.
        assert_eq!(widget.digits(), "9123491234");

        let before = (widget.digits().to_string(), widget.value(&page));
        let text = page.value_of(widget.number).to_string();
        widget.handle(
            &mut page,
            &UiEvent::Input {
                target: widget.number,
                text,
            },
        );
        assert_eq!((widget.digits().to_string(), widget.value(&page)), before);
    }

    #[test]
    fn dial_code_change_rewrites_the_carrier_without_revalidating() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);

        widget.handle(
            &mut page,
            &UiEvent::Input {
                target: widget.number,
                text: "912345".to_string(),
            },
        );
        widget.handle(
            &mut page,
            &UiEvent::Blur {
                target: widget.number,
            },
        );
        // Six digits are short for +7.
        assert!(has_class(page.node(widget.number).unwrap(), "is-invalid"));

        widget.handle(
            &mut page,
            &UiEvent::Change {
                target: widget.select,
                value: "+999".to_string(),
            },
        );
        assert_eq!(widget.value(&page), "+999912345");
        // The marker is untouched until the next blur.
        assert!(has_class(page.node(widget.number).unwrap(), "is-invalid"));

        widget.handle(
            &mut page,
            &UiEvent::Blur {
                target: widget.number,
            },
        );
        // Six digits still miss the unknown-code floor of seven.
        assert!(has_class(page.node(widget.number).unwrap(), "is-invalid"));
    }

    #[test]
    fn blur_validation_covers_all_three_marker_states() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);
        let blur = UiEvent::Blur {
            target: widget.number,
        };

        // Empty: neither marker.
        widget.handle(&mut page, &blur);
        assert!(!has_class(page.node(widget.number).unwrap(), "is-valid"));
        assert!(!has_class(page.node(widget.number).unwrap(), "is-invalid"));

        widget.handle(
            &mut page,
            &UiEvent::Input {
                target: widget.number,
                text: "9123456789".to_string(),
            },
        );
        widget.handle(&mut page, &blur);
        assert!(has_class(page.node(widget.number).unwrap(), "is-valid"));

        // Back to empty clears the marker again.
        widget.handle(
            &mut page,
            &UiEvent::Input {
                target: widget.number,
                text: String::new(),
            },
        );
        widget.handle(&mut page, &blur);
        assert!(!has_class(page.node(widget.number).unwrap(), "is-valid"));
        assert!(!has_class(page.node(widget.number).unwrap(), "is-invalid"));
    }

    #[test]
    fn set_value_round_trips_the_composite() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);

        widget.set_value(&mut page, "+9991234567");
        // Greedy split takes four code digits, but the composite survives.
        assert_eq!(widget.dial_code(), "+9991");
        assert_eq!(widget.digits(), "234567");
        assert_eq!(page.value_of(widget.number), "234567");
        assert_eq!(widget.value(&page), "+9991234567");
    }

    #[test]
    fn set_value_prefers_four_code_digits() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);

        // A +7 export with a ten-digit number re-splits at four code digits,
        // but the composite survives unchanged.
        widget.set_value(&mut page, "+79123456789");
        assert_eq!(widget.dial_code(), "+7912");
        assert_eq!(widget.digits(), "3456789");
        assert_eq!(widget.value(&page), "+79123456789");
    }

    #[test]
    fn set_value_ignores_malformed_input() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);

        widget.set_value(&mut page, "+79123456789");
        let before = (
            widget.dial_code().to_string(),
            widget.digits().to_string(),
            widget.value(&page),
        );

        for junk in ["", "+7", "79123456789", "+7 912", "phone"] {
            widget.set_value(&mut page, junk);
            assert_eq!(
                (
                    widget.dial_code().to_string(),
                    widget.digits().to_string(),
                    widget.value(&page),
                ),
                before,
                "state changed for {junk:?}"
            );
        }
    }

    #[test]
    fn set_value_with_unknown_code_clears_the_selection() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);

        widget.set_value(&mut page, "+9991234567");
        assert_eq!(widget.dial_code(), "+9991");

        // +9991 is not in the list, so no option stays selected.
        let select = page.node(widget.select).unwrap();
        assert!(
            select
                .children()
                .unwrap()
                .iter()
                .all(|o| !query::has_attr(o, "selected"))
        );
    }

    #[test]
    fn set_value_with_known_short_code_selects_it() {
        let mut page = page_with_container("phone_main");
        let mut widget = attach(&mut page);

        // Three digits after the plus: code takes two, number gets one.
        widget.set_value(&mut page, "+861");
        assert_eq!(widget.dial_code(), "+86");
        assert_eq!(widget.digits(), "1");

        let select = page.node(widget.select).unwrap();
        let selected: Vec<&str> = select
            .children()
            .unwrap()
            .iter()
            .filter(|o| query::has_attr(o, "selected"))
            .filter_map(|o| query::attr(o, "value"))
            .collect();
        assert_eq!(selected, vec!["+86"]);
    }
}
