//! Capabilities the dispatcher needs from its host.
//!
//! The dispatcher owns none of these. A caller hands in a window handle and
//! an application lifecycle object, and the dispatcher only ever calls their
//! methods. Native implementations live in `app`; tests substitute mocks.

use winctl_keybindings::KeyInput;

/// Listener subscribed to a content view's before-input stream.
pub type InputListener = Box<dyn Fn(&mut BeforeInputEvent)>;

/// A key press delivered to listeners before the content view handles it.
#[derive(Debug, Clone)]
pub struct BeforeInputEvent {
    input: KeyInput,
    default_prevented: bool,
}

impl BeforeInputEvent {
    pub fn new(input: KeyInput) -> Self {
        Self {
            input,
            default_prevented: false,
        }
    }

    pub fn input(&self) -> &KeyInput {
        &self.input
    }

    /// Stop the content view from handling this key itself.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The part of a window that renders content and emits input events.
pub trait ContentView {
    /// Show the developer tools panel if hidden, hide it if shown.
    fn toggle_dev_tools(&self);

    /// Subscribe to key presses before default handling.
    fn on_before_input(&self, listener: InputListener);

    /// Mark this view as wired to window commands.
    ///
    /// Returns `false` if it already was, whichever channel did the wiring.
    fn claim_window_events(&self) -> bool;
}

/// A native window whose lifecycle belongs to the host.
pub trait WindowHandle {
    type Content: ContentView;

    fn maximize(&self);
    fn unmaximize(&self);
    fn minimize(&self);
    fn restore(&self);
    fn close(&self);

    fn content_view(&self) -> &Self::Content;
}

/// Process-level lifecycle operations of the running application.
pub trait AppLifecycle {
    /// Terminate the current instance.
    fn exit(&self);

    /// Start a replacement instance of the same application.
    fn relaunch(&self);
}
