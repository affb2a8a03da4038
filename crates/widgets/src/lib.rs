//! # widgets
//!
//! The enhancement widgets themselves: a country-aware phone input, a
//! freeform phone input, a password visibility toggle, and a back-to-top
//! control, plus the [`WidgetRegistry`] that bootstraps them against a page.
//!
//! Each widget follows the same shape: locate its target in the document,
//! splice in its own markup, then react to [`UiEvent`]s by running the pure
//! transitions from `widget_core` and applying the results to the tree.
//! Missing targets make a widget an inert no-op (attach returns `None`);
//! nothing here panics or returns errors across the public surface.

mod back_to_top;
mod event;
mod marks;
mod page;
mod password_toggle;
mod phone_input;
mod registry;
mod simple_phone;

pub use back_to_top::{BackToTop, BackToTopOptions};
pub use event::{Key, PageAction, UiEvent};
pub use page::Page;
pub use password_toggle::{PasswordToggle, PasswordToggleOptions};
pub use phone_input::{PhoneInput, PhoneInputOptions};
pub use registry::WidgetRegistry;
pub use simple_phone::{SimplePhoneInput, SimplePhoneOptions};
