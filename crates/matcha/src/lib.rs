//! **matcha** -- an Elm-architecture form-field toolkit for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! matcha = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`matcha_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`matcha_widgets`]
//!   (the input field, spinner frames, and theme tables).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use matcha::widgets::input_field::{InputField, Message as FieldMsg};
//! use matcha::{Command, Component, Model, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct SignIn {
//!     email: InputField,
//! }
//!
//! enum Msg {
//!     Email(FieldMsg),
//! }
//!
//! impl Model for SignIn {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut email = InputField::new("you@example.com").with_label("Email");
//!         email.focus();
//!         (SignIn { email }, Command::none())
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Email(m) => self.email.update(m).map(Msg::Email),
//!         }
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         self.email.view(frame, frame.area());
//!     }
//!     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
//!         match event {
//!             TerminalEvent::Key(key) => Some(Msg::Email(FieldMsg::KeyPress(key))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     matcha::run::<SignIn>(()).await.unwrap();
//! }
//! ```

pub use matcha_core::*;
pub mod widgets {
    pub use matcha_widgets::*;
}

// Re-export dependencies for use in examples and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
