use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// Every matcha application implements `Model`. The runtime drives a
/// continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`] for early work.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Terminal events are mapped into messages by
///    [`on_event`](Model::on_event).
/// 4. [`update`](Model::update) processes each message, mutates state, and
///    optionally returns a [`Command`].
/// 5. Steps 2--4 repeat until the program exits.
///
/// `view` and `on_event` both take `&self`: rendering and event mapping are
/// pure functions of the current state, and all mutation happens in `update`.
///
/// # Example
///
/// ```rust,ignore
/// use matcha_core::{Command, Model, TerminalEvent};
/// use crossterm::event::KeyCode;
/// use ratatui::widgets::Paragraph;
///
/// struct Greeter {
///     name: String,
/// }
///
/// #[derive(Debug)]
/// enum Msg {
///     Typed(char),
///     Quit,
/// }
///
/// impl Model for Greeter {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Greeter { name: String::new() }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Typed(c) => {
///                 self.name.push(c);
///                 Command::none()
///             }
///             Msg::Quit => Command::quit(),
///         }
///     }
///
///     fn view(&self, frame: &mut ratatui::Frame) {
///         frame.render_widget(Paragraph::new(format!("Hi {}", self.name)), frame.area());
///     }
///
///     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
///         match event {
///             TerminalEvent::Key(key) => match key.code {
///                 KeyCode::Esc => Some(Msg::Quit),
///                 KeyCode::Char(c) => Some(Msg::Typed(c)),
///                 _ => None,
///             },
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    ///
    /// Every event that can affect the application state is represented as a
    /// variant of this type. Messages arrive from [`on_event`](Model::on_event)
    /// or from [`Command::message`].
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// The runtime calls `view` after every update and on the initial render.
    fn view(&self, frame: &mut Frame);

    /// Map a terminal event into a message, or discard it with `None`.
    ///
    /// Called for every event the runtime reads from the terminal, and for
    /// every [`TerminalEvent::Tick`] pulse. This is where focus-aware key
    /// routing lives: inspect the current state, and wrap the event in the
    /// message variant of whichever component should receive it.
    fn on_event(&self, event: TerminalEvent) -> Option<Self::Message>;
}
