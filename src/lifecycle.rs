//! Process lifecycle for the native host.
//!
//! `exit` only requests shutdown; the event loop honours it at the next
//! `about_to_wait`. `relaunch` spawns the replacement right away, so a
//! `reset` leaves the old instance winding down while the new one starts.
//!
//! The replacement does not inherit stdin. The old instance's stdin reader
//! is still running, and two readers on one pipe would split commands
//! between them.

use crate::window::AppLifecycle;
use std::cell::Cell;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use winctl_config::RelaunchConfig;

/// `AppLifecycle` backed by the running process.
#[derive(Debug)]
pub struct ProcessLifecycle {
    relaunch: RelaunchConfig,
    exit_requested: Cell<bool>,
}

impl ProcessLifecycle {
    pub fn new(relaunch: RelaunchConfig) -> Self {
        Self {
            relaunch,
            exit_requested: Cell::new(false),
        }
    }

    /// Whether `exit` has been called.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested.get()
    }

    /// The command `relaunch` would run.
    ///
    /// Defaults to the current executable with the arguments this instance
    /// was started with. Stdin is always null.
    pub fn relaunch_command(&self) -> std::io::Result<Command> {
        let program: PathBuf = match &self.relaunch.exec_path {
            Some(path) => path.clone(),
            None => std::env::current_exe()?,
        };
        let args: Vec<String> = match &self.relaunch.args {
            Some(args) => args.clone(),
            None => std::env::args().skip(1).collect(),
        };

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null());
        Ok(command)
    }
}

impl AppLifecycle for ProcessLifecycle {
    fn exit(&self) {
        log::info!("Exit requested");
        self.exit_requested.set(true);
    }

    fn relaunch(&self) {
        match self.relaunch_command().and_then(|mut command| command.spawn()) {
            Ok(child) => log::info!("Relaunched as pid {}", child.id()),
            Err(e) => log::error!("Failed to relaunch: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_exit_only_sets_flag() {
        let lifecycle = ProcessLifecycle::new(RelaunchConfig::default());
        assert!(!lifecycle.exit_requested());
        lifecycle.exit();
        assert!(lifecycle.exit_requested());
    }

    #[test]
    fn test_relaunch_command_uses_configured_program_and_args() {
        let lifecycle = ProcessLifecycle::new(RelaunchConfig {
            exec_path: Some(PathBuf::from("/opt/app/bin/app")),
            args: Some(vec!["--profile".to_string(), "work".to_string()]),
        });
        let command = lifecycle.relaunch_command().unwrap();
        assert_eq!(command.get_program(), OsStr::new("/opt/app/bin/app"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("--profile"), OsStr::new("work")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_relaunched_process_gets_null_stdin() {
        let lifecycle = ProcessLifecycle::new(RelaunchConfig {
            exec_path: Some(PathBuf::from("/bin/sh")),
            args: Some(vec![
                "-c".to_string(),
                "readlink /proc/self/fd/0".to_string(),
            ]),
        });
        let child = lifecycle
            .relaunch_command()
            .unwrap()
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();
        let output = child.wait_with_output().unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/dev/null");
    }

    #[test]
    fn test_relaunch_command_defaults_to_current_exe() {
        let lifecycle = ProcessLifecycle::new(RelaunchConfig {
            exec_path: None,
            args: Some(Vec::new()),
        });
        let command = lifecycle.relaunch_command().unwrap();
        let current = std::env::current_exe().unwrap();
        assert_eq!(command.get_program(), current.as_os_str());
        assert_eq!(command.get_args().count(), 0);
    }
}
