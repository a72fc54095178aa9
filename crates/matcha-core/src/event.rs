use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal events delivered by the runtime's event loop.
///
/// The runtime reads crossterm's event stream and hands each event to
/// [`Model::on_event`](crate::Model::on_event), which maps it into the
/// application's `Message` type (or discards it by returning `None`).
///
/// Most variants wrap the corresponding [`crossterm::event::Event`] payload,
/// so you can pattern-match on key codes and modifiers using the full
/// crossterm API. [`Tick`](TerminalEvent::Tick) is the exception: it is
/// synthesized by the runtime at a fixed interval (see
/// [`ProgramOptions::tick_rate`](crate::runtime::ProgramOptions::tick_rate))
/// so that animations such as loading spinners can advance without any
/// widget owning a timer.
///
/// # Example
///
/// ```rust,ignore
/// fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
///     match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         TerminalEvent::Tick => Some(Msg::Animate),
///         _ => None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
    /// Animation pulse emitted at the program's tick rate.
    Tick,
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}
