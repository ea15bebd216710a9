//! Thin wrappers around `std::process::Command` for the external tools
//!
//! Children inherit stderr so their own diagnostics reach the user as-is.

use std::process::{Command, ExitStatus, Stdio};

use crate::error::AppError;
use crate::utils::{debug_log, shell_join};

fn spawn_error(tool: &str, e: std::io::Error) -> AppError {
    if e.kind() == std::io::ErrorKind::NotFound {
        AppError::ToolNotFound {
            tool: tool.to_string(),
        }
    } else {
        AppError::Spawn {
            tool: tool.to_string(),
            source: e,
        }
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

fn check_status(tool: &str, args: &[&str], status: ExitStatus) -> Result<(), AppError> {
    if status.success() {
        return Ok(());
    }
    Err(AppError::ToolFailed {
        tool: tool.to_string(),
        command: args.join(" "),
        code: status.code(),
        signal: exit_signal(&status),
    })
}

/// Run `program args...` and return its trimmed stdout
///
/// `tool` names the collaborator in errors (e.g. "git"), `program` is the
/// binary actually executed.
pub(crate) fn capture(tool: &str, program: &str, args: &[&str]) -> Result<String, AppError> {
    debug_log(format!("running {}", shell_join(program, args)));
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| spawn_error(tool, e))?;

    check_status(tool, args, output.status)?;

    let stdout = String::from_utf8(output.stdout).map_err(|source| AppError::Utf8 {
        tool: tool.to_string(),
        source,
    })?;
    let value = stdout.trim();
    if value.is_empty() {
        return Err(AppError::EmptyOutput {
            tool: tool.to_string(),
            command: args.join(" "),
        });
    }
    Ok(value.to_string())
}

/// Run `program args...` with inherited stdio and wait for it
pub(crate) fn run(tool: &str, program: &str, args: &[&str]) -> Result<(), AppError> {
    debug_log(format!("running {}", shell_join(program, args)));
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| spawn_error(tool, e))?;
    check_status(tool, args, status)
}
