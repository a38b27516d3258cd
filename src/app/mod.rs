//! Native host: a winit event loop driving one window.

mod handler;
pub mod native_window;
pub mod stdin_channel;

pub use handler::WindowManager;
pub use native_window::{NativeContentView, NativeWindow};

use crate::cli::RuntimeOptions;
use crate::dispatcher::shortcuts_from_config;
use anyhow::Result;
use winctl_config::Config;
use winit::event_loop::{ControlFlow, EventLoop};

/// Events delivered to the event loop from outside the main thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// A message received on the inbound channel
    Command(String),
    /// The inbound channel reached end of input
    ChannelClosed,
}

/// Main application
pub struct App {
    config: Config,
    runtime_options: RuntimeOptions,
}

impl App {
    /// Create a new application, loading configuration
    pub fn new(runtime_options: RuntimeOptions) -> Result<Self> {
        let config = match &runtime_options.config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        crate::debug::apply_config_level(config.log_level.to_level_filter());

        Ok(Self {
            config,
            runtime_options,
        })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        // Resolve shortcuts before opening anything so a bad binding fails fast
        let shortcuts = shortcuts_from_config(&self.config)?;

        let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.runtime_options.stdin_channel {
            stdin_channel::spawn(event_loop.create_proxy())?;
        } else {
            log::info!("stdin channel disabled");
        }

        let mut window_manager = WindowManager::new(self.config, shortcuts);
        event_loop.run_app(&mut window_manager)?;

        Ok(())
    }
}
