//! winit-backed window handle.
//!
//! `NativeWindow` maps the dispatcher's window operations onto a winit
//! window. winit has no close call (a window closes when dropped), so
//! `close` marks the window and the event loop drops it at `about_to_wait`.

use crate::window::{BeforeInputEvent, ContentView, InputListener, WindowHandle};
use std::cell::{Cell, RefCell};
use std::sync::Arc;
use winit::window::{Window, WindowId};

const DEV_TOOLS_TITLE_SUFFIX: &str = " [DevTools]";

/// A native window plus its content view.
pub struct NativeWindow {
    window: Arc<Window>,
    content: NativeContentView,
    close_requested: Cell<bool>,
}

impl NativeWindow {
    pub fn new(window: Window, title: impl Into<String>) -> Self {
        let window = Arc::new(window);
        Self {
            content: NativeContentView {
                window: Arc::clone(&window),
                base_title: title.into(),
                dev_tools_open: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
                events_claimed: Cell::new(false),
            },
            window,
            close_requested: Cell::new(false),
        }
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// Whether `close` has been called.
    pub fn close_requested(&self) -> bool {
        self.close_requested.get()
    }
}

impl WindowHandle for NativeWindow {
    type Content = NativeContentView;

    fn maximize(&self) {
        self.window.set_maximized(true);
    }

    fn unmaximize(&self) {
        self.window.set_maximized(false);
    }

    fn minimize(&self) {
        self.window.set_minimized(true);
    }

    fn restore(&self) {
        self.window.set_minimized(false);
        self.window.focus_window();
    }

    fn close(&self) {
        log::info!("Close requested for window {:?}", self.window.id());
        self.close_requested.set(true);
    }

    fn content_view(&self) -> &NativeContentView {
        &self.content
    }
}

/// Content view of a `NativeWindow`.
///
/// There is no embedded inspector; the dev tools panel state is reflected in
/// the window title.
pub struct NativeContentView {
    window: Arc<Window>,
    base_title: String,
    dev_tools_open: Cell<bool>,
    listeners: RefCell<Vec<InputListener>>,
    events_claimed: Cell<bool>,
}

impl NativeContentView {
    pub fn is_dev_tools_open(&self) -> bool {
        self.dev_tools_open.get()
    }

    /// Deliver a key press to every before-input listener, in subscription order.
    pub fn emit_before_input(&self, event: &mut BeforeInputEvent) {
        for listener in self.listeners.borrow().iter() {
            listener(event);
        }
    }
}

impl ContentView for NativeContentView {
    fn toggle_dev_tools(&self) {
        let open = !self.dev_tools_open.get();
        self.dev_tools_open.set(open);

        if open {
            self.window
                .set_title(&format!("{}{}", self.base_title, DEV_TOOLS_TITLE_SUFFIX));
        } else {
            self.window.set_title(&self.base_title);
        }
        log::info!(
            "Developer tools {}",
            if open { "opened" } else { "closed" }
        );
    }

    fn on_before_input(&self, listener: InputListener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn claim_window_events(&self) -> bool {
        !self.events_claimed.replace(true)
    }
}
