/// A side effect returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// Commands describe what the runtime should do after an update: dispatch a
/// follow-up message, quit the program, or run several commands at once.
/// Everything in this crate's domain is synchronous, so there are no async
/// command variants; long-running work has no place in a form toolkit.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Feed a message back into the update loop:
/// let cmd = Command::message(Msg::Refresh);
///
/// // Quit the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Action(Action<Msg>),
    Batch(Vec<Command<Msg>>),
}

/// Action variants handled synchronously by the runtime.
pub enum Action<Msg> {
    /// Send a message immediately.
    Message(Msg),
    /// Quit the program.
    Quit,
}

impl<Msg: Send + 'static> Command<Msg> {
    /// A command that does nothing.
    pub fn none() -> Self {
        Self {
            inner: CommandInner::None,
        }
    }

    /// Dispatch a message on the next iteration of the event loop.
    ///
    /// Components use this to notify their parent: the returned command is
    /// lifted into the parent's message type with [`map`](Command::map).
    pub fn message(msg: Msg) -> Self {
        Self {
            inner: CommandInner::Action(Action::Message(msg)),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Self {
            inner: CommandInner::Action(Action::Quit),
        }
    }

    /// Run several commands together. Order is not guaranteed.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        Self {
            inner: CommandInner::Batch(cmds.into_iter().collect()),
        }
    }

    /// Transform the message type of this command.
    ///
    /// This is how a parent lifts a child component's command into its own
    /// message space:
    ///
    /// ```rust,ignore
    /// Msg::Field(m) => self.field.update(m).map(Msg::Field),
    /// ```
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg, F>(self, f: &F) -> Command<NewMsg>
    where
        NewMsg: Send + 'static,
        F: Fn(Msg) -> NewMsg + Send + Sync,
    {
        let inner = match self.inner {
            CommandInner::None => CommandInner::None,
            CommandInner::Action(Action::Message(msg)) => {
                CommandInner::Action(Action::Message(f(msg)))
            }
            CommandInner::Action(Action::Quit) => CommandInner::Action(Action::Quit),
            CommandInner::Batch(cmds) => {
                CommandInner::Batch(cmds.into_iter().map(|cmd| cmd.map_with(f)).collect())
            }
        };
        Command { inner }
    }

    /// Whether this is [`Command::none`].
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Extract the message from a [`Command::message`], if that is what this is.
    ///
    /// Mainly useful in tests, to assert on what a component reported.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Action(Action::Message(msg)) => Some(msg),
            _ => None,
        }
    }

    /// Extract the sub-commands from a [`Command::batch`], if that is what this is.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Inner {
        Ping,
    }

    #[derive(Debug, PartialEq)]
    enum Outer {
        Wrapped(Inner),
    }

    #[test]
    fn none_is_none() {
        assert!(Command::<Inner>::none().is_none());
        assert!(!Command::message(Inner::Ping).is_none());
    }

    #[test]
    fn into_message_round_trip() {
        let cmd = Command::message(Inner::Ping);
        assert_eq!(cmd.into_message(), Some(Inner::Ping));
        assert_eq!(Command::<Inner>::none().into_message(), None);
        assert_eq!(Command::<Inner>::quit().into_message(), None);
    }

    #[test]
    fn map_lifts_message() {
        let cmd = Command::message(Inner::Ping).map(Outer::Wrapped);
        assert_eq!(cmd.into_message(), Some(Outer::Wrapped(Inner::Ping)));
    }

    #[test]
    fn map_preserves_quit() {
        let cmd = Command::<Inner>::quit().map(Outer::Wrapped);
        assert!(matches!(cmd.inner, CommandInner::Action(Action::Quit)));
    }

    #[test]
    fn map_recurses_into_batch() {
        let cmd = Command::batch([
            Command::message(Inner::Ping),
            Command::none(),
        ])
        .map(Outer::Wrapped);
        let cmds = cmd.into_batch().unwrap();
        assert_eq!(cmds.len(), 2);
        let mut messages = cmds.into_iter().filter_map(Command::into_message);
        assert_eq!(messages.next(), Some(Outer::Wrapped(Inner::Ping)));
        assert_eq!(messages.next(), None);
    }
}
