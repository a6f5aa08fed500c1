use serde::Serialize;

use crate::platform::Platform;

/// Program and arguments that would run a command line through a shell.
///
/// This is a description only; nothing in this crate spawns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellInvocation {
    /// `start` is a `cmd` builtin, so Windows commands go through `cmd /C`.
    /// Everything else uses the POSIX shell.
    #[must_use]
    pub fn for_platform(platform: &Platform, command: &str) -> Self {
        if platform.is_windows() {
            Self {
                program: "cmd".to_string(),
                args: vec!["/C".to_string(), command.to_string()],
            }
        } else {
            Self {
                program: "/bin/sh".to_string(),
                args: vec!["-c".to_string(), command.to_string()],
            }
        }
    }
}
