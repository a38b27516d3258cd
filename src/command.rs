//! Window command definitions.
//!
//! `WindowCommand` is the closed set of messages a renderer may send over the
//! inbound channel. Wire names are fixed here; anything else is rejected.

use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Commands that can be sent to a window over the inbound channel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WindowCommand {
    /// Maximize the window
    Maximize,
    /// Leave the maximized state
    Unmaximize,
    /// Minimize the window
    Minimize,
    /// Restore the window from the minimized state
    Restore,
    /// Close the window
    Close,
    /// Exit this instance and start a fresh one
    Reset,
    /// Show or hide the developer tools panel
    ToggleDevtools,
}

impl WindowCommand {
    /// Every command, in wire order.
    pub const ALL: [WindowCommand; 7] = [
        WindowCommand::Maximize,
        WindowCommand::Unmaximize,
        WindowCommand::Minimize,
        WindowCommand::Restore,
        WindowCommand::Close,
        WindowCommand::Reset,
        WindowCommand::ToggleDevtools,
    ];

    /// Name used on the inbound channel.
    pub const fn name(self) -> &'static str {
        match self {
            WindowCommand::Maximize => "maximize",
            WindowCommand::Unmaximize => "unmaximize",
            WindowCommand::Minimize => "minimize",
            WindowCommand::Restore => "restore",
            WindowCommand::Close => "close",
            WindowCommand::Reset => "reset",
            WindowCommand::ToggleDevtools => "toggle-devtools",
        }
    }
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowCommand {
    type Err = DispatchError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowCommand::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| DispatchError::UnknownCommand(s.to_string()))
    }
}
