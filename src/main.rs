// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use winctl::app::App;
use winctl::cli;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    // CLI --log-level takes highest precedence, then RUST_LOG, then config (applied in App::new).
    winctl::debug::init_log_bridge(runtime_options.log_level.map(|level| level.to_level_filter()));

    log::info!("Starting winctl v{}", winctl::VERSION);

    let app = App::new(runtime_options)?;
    let result = app.run();

    log::info!("Event loop exited");
    log::logger().flush();

    if let Err(ref e) = result {
        eprintln!("winctl: error: {e:#}");
    }
    result
}
