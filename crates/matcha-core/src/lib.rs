//! Core runtime for the **matcha** TUI form toolkit.
//!
//! `matcha-core` provides the traits, types, and runtime that power every
//! matcha application. The design follows the [Elm Architecture]: your
//! program is expressed as a pure **init -> update -> view** cycle, with side
//! effects pushed to the edges through [`Command`]s and terminal events
//! mapped into messages by [`Model::on_event`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view / on_event) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect to be executed by the runtime |
//! | [`TerminalEvent`] | Keyboard/paste/resize events plus the animation tick |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] without a terminal |
//!
//! # Architecture
//!
//! 1. **init** -- [`Model::init`] creates the initial state and may return a
//!    [`Command`] to kick off early work.
//! 2. **view** -- The runtime calls [`Model::view`] to render the current
//!    state to a [`ratatui::Frame`].
//! 3. **event** -- Terminal events (key presses, pastes, the animation tick)
//!    are mapped into the model's `Message` type by [`Model::on_event`].
//! 4. **update** -- [`Model::update`] receives a message, mutates state, and
//!    optionally returns a [`Command`].
//! 5. **repeat** -- Steps 2-4 repeat until the program exits.
//!
//! Everything is single-threaded and event-driven: all state mutation happens
//! synchronously inside `update`, and rendering is a pure function of state.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, OutputTarget, Program, ProgramError, ProgramOptions};

/// Run a matcha application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
