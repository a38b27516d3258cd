// Library exports for testing and embedding.
//
// The dispatcher core (`command`, `ipc`, `window`, `dispatcher`) is host
// agnostic and single-threaded: handlers capture `Rc` handles and run on the
// thread that owns the event loop. `app` is the winit host used by the binary.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod command;
pub mod debug;
pub mod dispatcher;
pub mod error;
pub mod ipc;
pub mod lifecycle;
pub mod window;

pub use command::WindowCommand;
pub use dispatcher::{ShortcutMap, default_shortcuts, execute, setup_window_events};
pub use error::DispatchError;
pub use ipc::IpcMain;
pub use window::{AppLifecycle, BeforeInputEvent, ContentView, InputListener, WindowHandle};

// Re-export the keybinding input type so hosts need not depend on the sub-crate
pub use winctl_keybindings::KeyInput;
