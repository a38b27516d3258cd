//! Inbound channel registration and validation tests.

use std::cell::Cell;
use std::rc::Rc;
use winctl::{DispatchError, IpcMain, WindowCommand};

fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = Rc::clone(&count);
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn emit_runs_the_registered_handler_once() {
    let mut ipc = IpcMain::new();
    let (count, handler) = counter();
    ipc.on(WindowCommand::Maximize, handler).unwrap();

    ipc.emit(WindowCommand::Maximize).unwrap();
    assert_eq!(count.get(), 1);

    ipc.emit_message("maximize").unwrap();
    assert_eq!(count.get(), 2);
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut ipc = IpcMain::new();
    let (first, first_handler) = counter();
    let (second, second_handler) = counter();

    ipc.on(WindowCommand::Close, first_handler).unwrap();
    let err = ipc.on(WindowCommand::Close, second_handler).unwrap_err();
    assert!(matches!(err, DispatchError::DuplicateHandler(WindowCommand::Close)));

    ipc.emit(WindowCommand::Close).unwrap();
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
}

#[test]
fn emit_without_handler_is_an_error() {
    let ipc = IpcMain::new();
    assert!(matches!(
        ipc.emit(WindowCommand::Restore),
        Err(DispatchError::NoHandler(WindowCommand::Restore))
    ));
    assert!(matches!(
        ipc.emit_message("restore"),
        Err(DispatchError::NoHandler(WindowCommand::Restore))
    ));
}

#[test]
fn unknown_message_name_is_an_error() {
    let ipc = IpcMain::new();
    assert!(matches!(
        ipc.emit_message("fullscreen"),
        Err(DispatchError::UnknownCommand(ref name)) if name == "fullscreen"
    ));
}

#[test]
fn validate_lists_missing_commands() {
    let mut ipc = IpcMain::new();
    for command in WindowCommand::ALL {
        if command != WindowCommand::Reset && command != WindowCommand::ToggleDevtools {
            ipc.on(command, || {}).unwrap();
        }
    }

    match ipc.validate() {
        Err(DispatchError::MissingHandlers(missing)) => {
            assert_eq!(
                missing,
                vec![WindowCommand::Reset, WindowCommand::ToggleDevtools]
            );
        }
        other => panic!("expected MissingHandlers, got {:?}", other),
    }

    let err = ipc.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "window commands without handlers: reset, toggle-devtools"
    );
}

#[test]
fn clear_releases_handlers() {
    let mut ipc = IpcMain::new();
    let (count, handler) = counter();
    ipc.on(WindowCommand::Minimize, handler).unwrap();
    assert_eq!(Rc::strong_count(&count), 2);

    ipc.clear();
    assert!(!ipc.has_handlers());
    assert_eq!(Rc::strong_count(&count), 1);
}
