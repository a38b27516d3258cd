//! Inbound command channel.
//!
//! `IpcMain` is the main-thread end of the channel a renderer uses to ask for
//! window operations. Handlers are keyed by `WindowCommand`, not by free-form
//! strings, so a message name is either a known command or an error.

use crate::command::WindowCommand;
use crate::error::DispatchError;
use std::collections::BTreeMap;
use std::fmt;

type CommandHandler = Box<dyn Fn()>;

/// Handler table for inbound window commands.
#[derive(Default)]
pub struct IpcMain {
    handlers: BTreeMap<WindowCommand, CommandHandler>,
}

impl fmt::Debug for IpcMain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IpcMain")
            .field("commands", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl IpcMain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `command`.
    ///
    /// Each command has at most one handler; registering a second one fails
    /// instead of stacking duplicates that would all fire per message.
    pub fn on(
        &mut self,
        command: WindowCommand,
        handler: impl Fn() + 'static,
    ) -> Result<(), DispatchError> {
        if self.handlers.contains_key(&command) {
            return Err(DispatchError::DuplicateHandler(command));
        }
        log::debug!("Registered handler for '{}'", command);
        self.handlers.insert(command, Box::new(handler));
        Ok(())
    }

    pub fn is_registered(&self, command: WindowCommand) -> bool {
        self.handlers.contains_key(&command)
    }

    /// True if any window command has a handler.
    pub fn has_handlers(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Run the handler for `command`.
    pub fn emit(&self, command: WindowCommand) -> Result<(), DispatchError> {
        let handler = self
            .handlers
            .get(&command)
            .ok_or(DispatchError::NoHandler(command))?;
        log::debug!("Dispatching '{}'", command);
        handler();
        Ok(())
    }

    /// Run the handler for a message received by name.
    pub fn emit_message(&self, name: &str) -> Result<(), DispatchError> {
        let command = name.parse::<WindowCommand>().inspect_err(|_| {
            log::warn!("Ignoring unknown window command '{}'", name);
        })?;
        self.emit(command)
    }

    /// Check that every command has a handler.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let missing: Vec<WindowCommand> = WindowCommand::ALL
            .into_iter()
            .filter(|command| !self.is_registered(*command))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::MissingHandlers(missing))
        }
    }

    /// Drop every handler, releasing whatever they captured.
    pub fn clear(&mut self) {
        if !self.handlers.is_empty() {
            log::debug!("Removing {} window command handler(s)", self.handlers.len());
        }
        self.handlers.clear();
    }
}
