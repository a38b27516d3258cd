//! Line-oriented inbound channel on stdin.
//!
//! A renderer (or any parent process) writes one command name per line. The
//! reader thread never touches windows; it forwards each line to the event
//! loop, where the main thread dispatches it.

use super::UserEvent;
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};
use winit::event_loop::EventLoopProxy;

/// Start the reader thread.
pub fn spawn(proxy: EventLoopProxy<UserEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("winctl-stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            forward_lines(stdin.lock(), |event| proxy.send_event(event).is_ok());
        })
}

/// Forward every non-blank line as a `UserEvent::Command`, then a final
/// `ChannelClosed`. Stops early once `send` reports the loop is gone.
pub(crate) fn forward_lines<R, F>(reader: R, mut send: F)
where
    R: BufRead,
    F: FnMut(UserEvent) -> bool,
{
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Inbound channel read failed: {}", e);
                break;
            }
        };

        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        log::trace!("Inbound message '{}'", name);
        if !send(UserEvent::Command(name.to_string())) {
            log::debug!("Event loop closed, stopping inbound channel");
            return;
        }
    }

    send(UserEvent::ChannelClosed);
}
