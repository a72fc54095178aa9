//! Form widgets for the **matcha** TUI toolkit.
//!
//! Every widget in this crate implements [`matcha_core::Component`], so it can
//! be embedded inside any [`matcha_core::Model`] and composed freely within
//! [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`input_field`] | Labeled single-line input with helper/error text, clear action, password toggle |
//! | [`spinner`] | Frame sets and cycler for indeterminate loading indicators |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`theme`] | [`Theme`](theme::Theme), [`Variant`](theme::Variant), and [`FieldSize`](theme::FieldSize) style lookup tables |

pub mod input_field;
pub mod spinner;
pub mod theme;
