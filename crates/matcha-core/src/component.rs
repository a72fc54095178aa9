use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) with one key difference: its
/// [`view`](Component::view) method receives an `area: Rect`, making
/// components composable within layouts. A parent model decides *where* each
/// child renders by passing it a sub-region of the frame.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// use [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// use matcha_core::{Command, Component, Model};
/// use matcha_widgets::input_field::{self, InputField};
///
/// struct SignIn {
///     email: InputField,
/// }
///
/// #[derive(Debug)]
/// enum Msg {
///     Email(input_field::Message),
/// }
///
/// impl Model for SignIn {
///     type Message = Msg;
///     type Flags = ();
///
///     // ...
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Email(m) => self.email.update(m).map(Msg::Email),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side
    /// effects. The returned command uses the component's own `Message` type;
    /// the parent should call [`.map()`](Command::map) to lift it into the
    /// parent message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// This is a hint for input routing. A parent can query `focused()` to
    /// decide which child should receive keyboard events. The default
    /// implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
