//! Window-command dispatcher.
//!
//! Binds every `WindowCommand` on an inbound channel to the matching
//! operation on a caller-supplied window, and installs a before-input filter
//! on the window's content view that turns configured shortcuts (by default
//! Ctrl+Shift+I and F12) into commands.

use crate::command::WindowCommand;
use crate::error::DispatchError;
use crate::ipc::IpcMain;
use crate::window::{AppLifecycle, BeforeInputEvent, ContentView, WindowHandle};
use std::rc::Rc;
use winctl_config::Config;
use winctl_keybindings::KeybindingRegistry;

/// Resolved keyboard shortcuts.
pub type ShortcutMap = KeybindingRegistry<WindowCommand>;

/// Build the shortcut table from config keybindings.
///
/// Every action must name a window command; a typo fails here rather than
/// leaving a dead shortcut.
pub fn shortcuts_from_config(config: &Config) -> Result<ShortcutMap, DispatchError> {
    let shortcuts = ShortcutMap::from_config(&config.keybindings)?
        .with_physical_keys(config.use_physical_keys);
    Ok(shortcuts)
}

/// The built-in shortcuts: Ctrl+Shift+I and F12 toggle developer tools.
pub fn default_shortcuts() -> Result<ShortcutMap, DispatchError> {
    Ok(ShortcutMap::from_config(
        &winctl_config::defaults::keybindings(),
    )?)
}

/// Perform `command` against a window and the application.
pub fn execute<W, A>(window: &W, app: &A, command: WindowCommand)
where
    W: WindowHandle,
    A: AppLifecycle,
{
    log::info!("Window command: {}", command);
    match command {
        WindowCommand::Maximize => window.maximize(),
        WindowCommand::Unmaximize => window.unmaximize(),
        WindowCommand::Minimize => window.minimize(),
        WindowCommand::Restore => window.restore(),
        WindowCommand::Close => window.close(),
        WindowCommand::Reset => {
            app.exit();
            app.relaunch();
        }
        WindowCommand::ToggleDevtools => window.content_view().toggle_dev_tools(),
    }
}

/// Register window command handlers on `ipc` and the shortcut filter on the
/// window's content view.
///
/// Fails with `AlreadyRegistered` if `ipc` already carries window command
/// handlers or the window's content view was already set up through any
/// channel. In either case nothing new is registered, including the keyboard
/// filter.
pub fn setup_window_events<W, A>(
    ipc: &mut IpcMain,
    window: Rc<W>,
    app: Rc<A>,
    shortcuts: ShortcutMap,
) -> Result<(), DispatchError>
where
    W: WindowHandle + 'static,
    A: AppLifecycle + 'static,
{
    if ipc.has_handlers() {
        log::warn!("Window events already set up on this channel; refusing to register twice");
        return Err(DispatchError::AlreadyRegistered);
    }
    if !window.content_view().claim_window_events() {
        log::warn!("Window events already set up for this window; refusing to register twice");
        return Err(DispatchError::AlreadyRegistered);
    }

    for command in WindowCommand::ALL {
        let window = Rc::clone(&window);
        let app = Rc::clone(&app);
        ipc.on(command, move || execute(&*window, &*app, command))?;
    }
    ipc.validate()?;

    // The content view is owned by the window, so the filter holds it weakly.
    let filter_window = Rc::downgrade(&window);
    let shortcut_count = shortcuts.len();
    window
        .content_view()
        .on_before_input(Box::new(move |event: &mut BeforeInputEvent| {
            let Some(&command) = shortcuts.lookup(event.input()) else {
                return;
            };
            let Some(window) = filter_window.upgrade() else {
                return;
            };
            log::debug!("Shortcut {:?} -> {}", event.input().key, command);
            event.prevent_default();
            execute(&*window, &*app, command);
        }));

    log::info!(
        "Window events registered: {} commands, {} shortcuts",
        WindowCommand::ALL.len(),
        shortcut_count
    );
    Ok(())
}
