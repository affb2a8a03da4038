//! # widget_core
//!
//! Document-free logic layer for the page widgets.
//!
//! Everything a widget computes (input masking, phone-number validation,
//! composite form values, dial-code parsing, the scroll easing curve and the
//! visibility threshold) lives here as pure functions and small value types.
//!
//! ## Design Principles
//!
//! This crate is intentionally document-agnostic and does not depend on:
//! - The `dom` crate or any node-tree representation
//! - Any event or scheduling machinery
//! - Platform APIs or clocks (time arrives as plain `f64` milliseconds)
//!
//! It depends only on `std`, so every state transition can be unit-tested
//! without building a document. The `widgets` crate applies these results to
//! the node tree.

pub mod countries;
pub mod dial;
pub mod mask;
pub mod scroll;
pub mod validate;

pub use countries::{CountryEntry, builtin_countries};
pub use dial::{compose, split_composite};
pub use mask::{digits_only, is_phone_char, phone_charset, truncate_chars};
pub use scroll::{ScrollAnimation, ScrollSample, Visibility, ease_in_out_cubic, visibility_for};
pub use validate::{PhoneValidity, country_number_validity, freeform_validity, min_digits_for};
