//! `ApplicationHandler` impl for `WindowManager`.
//!
//! Implements the winit `ApplicationHandler` trait: `resumed` creates the
//! window and registers window events, `window_event` feeds key presses to the
//! content view's before-input listeners, `user_event` dispatches inbound
//! channel messages, and `about_to_wait` carries out close and exit requests.

use super::UserEvent;
use super::native_window::NativeWindow;
use crate::dispatcher::{ShortcutMap, setup_window_events};
use crate::ipc::IpcMain;
use crate::lifecycle::ProcessLifecycle;
use crate::window::{BeforeInputEvent, WindowHandle};
use anyhow::Result;
use std::rc::Rc;
use winctl_config::Config;
use winctl_keybindings::KeyInput;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Modifiers, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// Owns the window, the inbound channel and the process lifecycle.
pub struct WindowManager {
    config: Config,
    shortcuts: ShortcutMap,
    ipc: IpcMain,
    lifecycle: Rc<ProcessLifecycle>,
    window: Option<Rc<NativeWindow>>,
    modifiers: Modifiers,
    window_created: bool,
}

impl WindowManager {
    pub fn new(config: Config, shortcuts: ShortcutMap) -> Self {
        let lifecycle = Rc::new(ProcessLifecycle::new(config.relaunch.clone()));
        Self {
            config,
            shortcuts,
            ipc: IpcMain::new(),
            lifecycle,
            window: None,
            modifiers: Modifiers::default(),
            window_created: false,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));
        let window = event_loop.create_window(attributes)?;
        log::info!("Created window {:?}", window.id());

        let window = Rc::new(NativeWindow::new(window, self.config.window_title.clone()));
        setup_window_events(
            &mut self.ipc,
            Rc::clone(&window),
            Rc::clone(&self.lifecycle),
            self.shortcuts.clone(),
        )?;
        self.window = Some(window);
        Ok(())
    }

    fn handle_key_press(&self, window: &NativeWindow, input: KeyInput) {
        let mut event = BeforeInputEvent::new(input);
        window.content_view().emit_before_input(&mut event);

        if event.default_prevented() {
            log::debug!("Key {:?} consumed by before-input listener", event.input().key);
        } else {
            log::trace!("Key {:?} passed through", event.input().key);
        }
    }

    fn close_window(&mut self) {
        if let Some(window) = self.window.take() {
            log::info!("Closing window {:?}", window.id());
            // Handlers hold the window; drop them so the winit window is released
            self.ipc.clear();
            drop(window);
        }
    }
}

impl ApplicationHandler<UserEvent> for WindowManager {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_created {
            return;
        }
        self.window_created = true;

        if let Err(e) = self.create_window(event_loop) {
            log::error!("Failed to create window: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => window.close(),
            WindowEvent::ModifiersChanged(modifiers) => self.modifiers = modifiers,
            WindowEvent::KeyboardInput {
                event,
                is_synthetic: false,
                ..
            } if event.state == ElementState::Pressed && !event.repeat => {
                let input = KeyInput::from_winit(&event, &self.modifiers);
                self.handle_key_press(&window, input);
            }
            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Command(name) => {
                if let Err(e) = self.ipc.emit_message(&name) {
                    log::warn!("Rejected inbound message '{}': {}", name, e);
                }
            }
            UserEvent::ChannelClosed => log::info!("Inbound channel closed"),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.lifecycle.exit_requested() {
            log::info!("Exiting event loop");
            self.close_window();
            event_loop.exit();
            return;
        }

        if self.window.as_ref().is_some_and(|w| w.close_requested()) {
            self.close_window();
            // Single-window app: closing the window ends the process
            event_loop.exit();
        }
    }
}
