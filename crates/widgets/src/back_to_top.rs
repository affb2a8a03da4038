//! Back-to-top control: a fixed button that appears past a scroll threshold
//! and animates the page back to offset zero when clicked.

use crate::event::{PageAction, UiEvent};
use crate::page::Page;
use dom::build::{self, attr_pair};
use dom::{Id, mutate, query};
use widget_core::scroll::{ScrollAnimation, Visibility, visibility_for};

#[derive(Clone, Debug)]
pub struct BackToTopOptions {
    /// Page offset above which the button becomes visible.
    pub show_after: f64,
    pub animation_duration_ms: f64,
    pub button_class: String,
    pub icon: String,
}

impl Default for BackToTopOptions {
    fn default() -> Self {
        Self {
            show_after: 300.0,
            animation_duration_ms: 500.0,
            button_class: "back-to-top-btn".to_string(),
            icon: "fas fa-arrow-up".to_string(),
        }
    }
}

/// The back-to-top widget.
///
/// At most one scroll animation is live per instance; a new activation
/// replaces any in-flight one, so rapid repeated clicks restart the glide
/// instead of racing it. Manual scrolling during the glide does not re-seed
/// the captured start offset.
#[derive(Debug)]
pub struct BackToTop {
    button: Id,
    show_after: f64,
    duration_ms: f64,
    visibility: Visibility,
    last_offset: f64,
    animation: Option<ScrollAnimation>,
}

impl BackToTop {
    /// Inject the button into the document body, or `None` when the
    /// document has no body element.
    pub fn attach(page: &mut Page, options: BackToTopOptions) -> Option<Self> {
        let Some(body) = query::find_element_named(&page.dom, "body") else {
            log::debug!(target: "widgets.back_to_top", "document has no body; skipping");
            return None;
        };
        let body_id = body.id();

        let mut icon = build::element("i", vec![attr_pair("class", &options.icon)]);
        page.ids.adopt(&mut icon);

        let mut button = build::element_with_children(
            "button",
            vec![
                attr_pair("type", "button"),
                attr_pair("class", &options.button_class),
                attr_pair("aria-label", "Back to top"),
                attr_pair("title", "Back to top"),
            ],
            vec![icon],
        );
        for (prop, value) in [
            ("position", "fixed"),
            ("bottom", "30px"),
            ("right", "30px"),
            ("width", "50px"),
            ("height", "50px"),
            ("border-radius", "50%"),
            (
                "background",
                "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            ),
            ("color", "white"),
            ("border", "none"),
            ("cursor", "pointer"),
            ("z-index", "1000"),
            ("opacity", "0"),
            ("visibility", "hidden"),
            ("transition", "all 0.3s ease"),
            ("box-shadow", "0 4px 12px rgba(102, 126, 234, 0.3)"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("font-size", "18px"),
        ] {
            mutate::set_style_prop(&mut button, prop, value);
        }
        page.ids.adopt(&mut button);
        let button_id = button.id();

        if let Some(body) = page.node_mut(body_id) {
            mutate::append_child(body, button);
        }

        Some(Self {
            button: button_id,
            show_after: options.show_after,
            duration_ms: options.animation_duration_ms,
            visibility: Visibility::Hidden,
            last_offset: 0.0,
            animation: None,
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn handle(&mut self, page: &mut Page, event: &UiEvent) -> Option<PageAction> {
        match event {
            UiEvent::Scroll { offset } => {
                self.last_offset = *offset;
                let next = visibility_for(*offset, self.show_after);
                if next != self.visibility {
                    self.visibility = next;
                    self.apply_visibility(page);
                }
                None
            }
            UiEvent::Click { target } if *target == self.button => {
                // Replaces any in-flight glide; the clock pins on the next
                // frame sample.
                self.animation = Some(ScrollAnimation::new(self.last_offset, self.duration_ms));
                None
            }
            UiEvent::PointerEnter { target } if *target == self.button => {
                page.set_style_prop(self.button, "transform", "scale(1.1)");
                page.set_style_prop(
                    self.button,
                    "box-shadow",
                    "0 6px 20px rgba(102, 126, 234, 0.4)",
                );
                None
            }
            UiEvent::PointerLeave { target } if *target == self.button => {
                page.set_style_prop(self.button, "transform", "scale(1)");
                page.set_style_prop(
                    self.button,
                    "box-shadow",
                    "0 4px 12px rgba(102, 126, 234, 0.3)",
                );
                None
            }
            UiEvent::Frame { now_ms } => {
                let anim = self.animation.as_mut()?;
                let sample = anim.sample(*now_ms);
                if sample.done {
                    self.animation = None;
                }
                Some(PageAction::ScrollTo(sample.offset))
            }
            _ => None,
        }
    }

    fn apply_visibility(&self, page: &mut Page) {
        let (opacity, visibility) = match self.visibility {
            Visibility::Visible => ("1", "visible"),
            Visibility::Hidden => ("0", "hidden"),
        };
        page.set_style_prop(self.button, "opacity", opacity);
        page.set_style_prop(self.button, "visibility", visibility);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Node;
    use dom::mutate::style_prop;

    fn page_with_body() -> Page {
        let root = Node::Document {
            id: Id(0),
            doctype: None,
            children: vec![build::element(
                "body",
                vec![attr_pair("class", "home-page")],
            )],
        };
        Page::new(root)
    }

    fn attach(page: &mut Page) -> BackToTop {
        BackToTop::attach(page, BackToTopOptions::default()).unwrap()
    }

    fn scroll(widget: &mut BackToTop, page: &mut Page, offset: f64) {
        widget.handle(page, &UiEvent::Scroll { offset });
    }

    #[test]
    fn attach_fails_soft_without_a_body() {
        let root = Node::Document {
            id: Id(0),
            doctype: None,
            children: vec![build::element("div", Vec::new())],
        };
        let mut page = Page::new(root);
        assert!(BackToTop::attach(&mut page, BackToTopOptions::default()).is_none());
    }

    #[test]
    fn button_starts_hidden_and_labeled() {
        let mut page = page_with_body();
        let widget = attach(&mut page);

        let button = page.node(widget.button).unwrap();
        assert_eq!(style_prop(button, "opacity"), Some("0"));
        assert_eq!(style_prop(button, "visibility"), Some("hidden"));
        assert_eq!(query::attr(button, "aria-label"), Some("Back to top"));
        assert!(!widget.is_visible());
    }

    #[test]
    fn visibility_follows_the_threshold_in_both_directions() {
        let mut page = page_with_body();
        let mut widget = attach(&mut page);

        scroll(&mut widget, &mut page, 0.0);
        assert!(!widget.is_visible());

        scroll(&mut widget, &mut page, 301.0);
        assert!(widget.is_visible());
        let button = page.node(widget.button).unwrap();
        assert_eq!(style_prop(button, "opacity"), Some("1"));
        assert_eq!(style_prop(button, "visibility"), Some("visible"));

        scroll(&mut widget, &mut page, 299.0);
        assert!(!widget.is_visible());
        let button = page.node(widget.button).unwrap();
        assert_eq!(style_prop(button, "opacity"), Some("0"));
    }

    #[test]
    fn click_then_frames_glide_to_zero_and_stop() {
        let mut page = page_with_body();
        let mut widget = attach(&mut page);

        scroll(&mut widget, &mut page, 1000.0);
        let button = widget.button;
        widget.handle(&mut page, &UiEvent::Click { target: button });
        assert!(widget.is_animating());

        // First frame pins the clock at the captured offset.
        let first = widget.handle(&mut page, &UiEvent::Frame { now_ms: 2000.0 });
        assert_eq!(first, Some(PageAction::ScrollTo(1000.0)));

        // Halfway through the default 500 ms the ease curve sits at 0.5.
        let mid = widget.handle(&mut page, &UiEvent::Frame { now_ms: 2250.0 });
        let Some(PageAction::ScrollTo(offset)) = mid else {
            panic!("expected a scroll action, got {mid:?}");
        };
        assert!((offset - 500.0).abs() < 1e-9);

        let last = widget.handle(&mut page, &UiEvent::Frame { now_ms: 2500.0 });
        assert_eq!(last, Some(PageAction::ScrollTo(0.0)));
        assert!(!widget.is_animating());

        // Once done, further frames produce nothing.
        let after = widget.handle(&mut page, &UiEvent::Frame { now_ms: 2516.0 });
        assert_eq!(after, None);
    }

    #[test]
    fn a_second_click_replaces_the_inflight_animation() {
        let mut page = page_with_body();
        let mut widget = attach(&mut page);
        let button = widget.button;

        scroll(&mut widget, &mut page, 1000.0);
        widget.handle(&mut page, &UiEvent::Click { target: button });
        let _ = widget.handle(&mut page, &UiEvent::Frame { now_ms: 0.0 });
        let _ = widget.handle(&mut page, &UiEvent::Frame { now_ms: 250.0 });

        // The page scrolled partway; a new click captures the new offset.
        scroll(&mut widget, &mut page, 500.0);
        widget.handle(&mut page, &UiEvent::Click { target: button });

        let restarted = widget.handle(&mut page, &UiEvent::Frame { now_ms: 260.0 });
        assert_eq!(restarted, Some(PageAction::ScrollTo(500.0)));
    }

    #[test]
    fn manual_scrolling_does_not_reseed_a_running_animation() {
        let mut page = page_with_body();
        let mut widget = attach(&mut page);
        let button = widget.button;

        scroll(&mut widget, &mut page, 800.0);
        widget.handle(&mut page, &UiEvent::Click { target: button });
        let _ = widget.handle(&mut page, &UiEvent::Frame { now_ms: 0.0 });

        // The user drags the page while the glide runs; the trajectory
        // keeps computing from the captured 800.
        scroll(&mut widget, &mut page, 10_000.0);
        let mid = widget.handle(&mut page, &UiEvent::Frame { now_ms: 250.0 });
        let Some(PageAction::ScrollTo(offset)) = mid else {
            panic!("expected a scroll action, got {mid:?}");
        };
        assert!((offset - 400.0).abs() < 1e-9);
    }

    #[test]
    fn hover_styles_apply_and_revert() {
        let mut page = page_with_body();
        let mut widget = attach(&mut page);
        let button = widget.button;

        widget.handle(&mut page, &UiEvent::PointerEnter { target: button });
        assert_eq!(
            style_prop(page.node(button).unwrap(), "transform"),
            Some("scale(1.1)")
        );

        widget.handle(&mut page, &UiEvent::PointerLeave { target: button });
        assert_eq!(
            style_prop(page.node(button).unwrap(), "transform"),
            Some("scale(1)")
        );
    }
}
