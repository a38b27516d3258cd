//! Typed error types for winctl.
//!
//! Window and process operations never fail from the dispatcher's point of
//! view; these errors cover setup, the inbound channel and shortcut tables.

use crate::command::WindowCommand;
use thiserror::Error;
use winctl_keybindings::KeybindingError;

/// Errors raised while registering or dispatching window commands.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An inbound message named a command that does not exist.
    #[error("unknown window command '{0}'")]
    UnknownCommand(String),

    /// A handler for this command is already registered on the channel.
    #[error("a handler for '{0}' is already registered")]
    DuplicateHandler(WindowCommand),

    /// A command was emitted before any handler was registered for it.
    #[error("no handler registered for '{0}'")]
    NoHandler(WindowCommand),

    /// Startup validation found commands with no handler.
    #[error("window commands without handlers: {}", join_names(.0))]
    MissingHandlers(Vec<WindowCommand>),

    /// Window events were already set up on this channel.
    #[error("window events are already registered on this channel")]
    AlreadyRegistered,

    /// The configured shortcut table could not be built.
    #[error(transparent)]
    Shortcut(#[from] KeybindingError),
}

fn join_names(commands: &[WindowCommand]) -> String {
    commands
        .iter()
        .map(|command| command.name())
        .collect::<Vec<_>>()
        .join(", ")
}
