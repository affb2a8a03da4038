//! The event vocabulary between the host page and the widgets.
//!
//! The host feeds one [`UiEvent`] at a time into
//! [`WidgetRegistry::dispatch`](crate::WidgetRegistry::dispatch); handlers
//! run to completion before the next event. Dispatch may hand back a
//! [`PageAction`] the host must apply; the widgets never touch the page
//! scroll position or the platform's key delivery themselves.

use dom::Id;

/// A single key about to be delivered to a focused field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Tab,
    Enter,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// The fixed editing/navigation keys that always pass input filters.
    pub fn is_editing_key(self) -> bool {
        !matches!(self, Key::Char(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// A text field's content after a user edit (typing or paste).
    Input { target: Id, text: String },
    /// A key about to be inserted into a field; may be rejected.
    KeyPress { target: Id, key: Key },
    /// A select control's newly chosen value.
    Change { target: Id, value: String },
    Blur { target: Id },
    Click { target: Id },
    PointerEnter { target: Id },
    PointerLeave { target: Id },
    /// Current page vertical scroll offset, sampled on every scroll.
    Scroll { offset: f64 },
    /// A display-frame tick carrying a monotonic timestamp.
    Frame { now_ms: f64 },
}

/// An effect the host must apply after dispatching an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageAction {
    /// Set the page's vertical scroll offset.
    ScrollTo(f64),
    /// The dispatched key press must not reach the field.
    RejectKey,
}
