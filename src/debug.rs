//! Log bridge for winctl.
//!
//! Routes every `log::info!()` etc. to a per-session log file so nothing is
//! written to the stdio streams a renderer may be using as its channel:
//! - Unix/macOS: /tmp/winctl_debug.log
//! - Windows: %TEMP%\winctl_debug.log
//!
//! When RUST_LOG is set, records are also mirrored to stderr.
//!
//! Level precedence: `--log-level` on the command line, then RUST_LOG, then
//! the config file's `log_level` (applied later via `apply_config_level`).

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{LevelFilter, Log, Metadata, Record};

struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_to_stderr: bool,
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Set when the level came from the CLI or RUST_LOG and must not be
/// overridden by config.
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

/// Path of the session log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/winctl_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("winctl_debug.log")
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );

        if let Some(file) = self.file.lock().as_mut() {
            // Logging must never take the app down
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_to_stderr {
            eprint!("{}", line);
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

/// Install the log bridge. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_level = rust_log
        .as_deref()
        .and_then(|value| LevelFilter::from_str(value.trim()).ok());

    let level = match (cli_level, env_level) {
        (Some(level), _) | (None, Some(level)) => {
            LEVEL_PINNED.store(true, Ordering::Relaxed);
            level
        }
        (None, None) => LevelFilter::Info,
    };

    let bridge = BRIDGE.get_or_init(|| {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok();
        LogBridge {
            file: Mutex::new(file),
            mirror_to_stderr: rust_log.is_some(),
        }
    });

    if let Some(file) = bridge.file.lock().as_mut() {
        let rule = "=".repeat(80);
        let _ = writeln!(
            file,
            "{rule}\nwinctl {} session started at {} (level={})\n{rule}",
            crate::VERSION,
            timestamp(),
            level
        );
    }

    // Fails only if a logger is already installed, which is fine
    let _ = log::set_logger(bridge);
    log::set_max_level(level);
}

/// Apply the level from the config file unless the CLI or RUST_LOG chose one.
pub fn apply_config_level(level: LevelFilter) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        log::debug!(
            "Keeping pinned log level {}, ignoring config level {}",
            log::max_level(),
            level
        );
        return;
    }
    log::set_max_level(level);
    log::info!("Log level set to {} from config", level);
}
