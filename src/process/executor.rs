use std::process::{Command, Stdio};

use super::{signal, ProcessError};
use crate::flags::Flags;

/// Launches external programs, either inheriting the shell's stdio or
/// capturing the child's standard output for the caller.
#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Self {
        ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        }
    }

    /// Spawns `args[0]` with the remaining tokens passed verbatim as its
    /// argument vector and blocks until the child reaches a terminal state.
    ///
    /// A program that cannot be found is reported on stderr and is not an
    /// error: a failing launch never terminates the shell.
    pub fn spawn_process(&self, args: &[&str]) -> Result<(), ProcessError> {
        let mut command = Command::new(args[0]);
        command
            .args(&args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    eprintln!("tsh: command not found: {}", args[0]);
                    return Ok(());
                }
                return Err(e.into());
            }
        };

        signal::setup_signal_handlers()?;

        // wait() only returns once the child has exited or been killed by a
        // signal; a stopped child keeps the shell blocked.
        let status = child.wait()?;
        if !status.success() && !self.quiet_mode {
            eprintln!("tsh: process exited with status: {}", status);
        }
        Ok(())
    }

    /// Runs `args[0]` to completion with its standard output captured,
    /// returning that output. Standard error stays attached to the terminal.
    pub fn capture_output(&self, args: &[&str]) -> Result<String, ProcessError> {
        let mut command = Command::new(args[0]);
        command
            .args(&args[1..])
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        let output = match command.output() {
            Ok(output) => output,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    return Err(ProcessError::CommandNotFound(args[0].to_string()));
                }
                return Err(e.into());
            }
        };

        if !output.status.success() && !self.quiet_mode {
            eprintln!("tsh: process exited with status: {}", output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
