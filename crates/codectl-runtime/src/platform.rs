//! Platform-specific process flags.

use std::process::Command;

/// Keep short-lived probe processes from flashing a console window.
#[cfg(windows)]
pub fn suppress_console(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

/// No console windows to suppress outside Windows.
#[cfg(not(windows))]
pub fn suppress_console(_cmd: &mut Command) {}
