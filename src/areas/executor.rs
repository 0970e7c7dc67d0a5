use crate::artifacts::command::error::ExecutionError;
use crate::artifacts::command::git_command::GitCommand;
use crate::artifacts::command::outcome::{Outcome, RawOutput};
use crate::artifacts::console::{Message, MessageKind};
use log::{debug, warn};
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

pub const DEFAULT_PROGRAM: &str = "git";

/// Spawns child processes. The seam between the executor and the OS.
pub trait ProcessRunner {
    /// Runs `program` with `args` in `cwd` and waits for it to exit.
    ///
    /// With `capture_output` the child's stdout and stderr are collected;
    /// otherwise all three standard streams are inherited so the child can
    /// talk to the user directly.
    fn run(
        &self,
        program: &OsStr,
        args: &[OsString],
        cwd: &Path,
        capture_output: bool,
    ) -> io::Result<RawOutput>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(
        &self,
        program: &OsStr,
        args: &[OsString],
        cwd: &Path,
        capture_output: bool,
    ) -> io::Result<RawOutput> {
        let mut command = Command::new(program);
        command.args(args).current_dir(cwd);

        if capture_output {
            let output = command.output()?;

            Ok(RawOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        } else {
            let status = command.status()?;

            Ok(RawOutput {
                code: status.code(),
                ..RawOutput::default()
            })
        }
    }
}

pub struct Executor {
    program: OsString,
    runner: Box<dyn ProcessRunner>,
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new(program: impl Into<OsString>, runner: Box<dyn ProcessRunner>) -> Self {
        Executor {
            program: program.into(),
            runner,
        }
    }

    pub fn system(program: impl Into<OsString>) -> Self {
        Self::new(program, Box::new(SystemRunner))
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Runs a single git invocation and interprets its result.
    ///
    /// Returns `None` when the child could not be started, or when it exited
    /// unsuccessfully and `fail_on_error` is set. In the latter case a
    /// formatted error line is written to `console` first. Without
    /// `fail_on_error` a failed child still yields its raw outcome:
    /// `Exited(false)` or whatever (possibly empty) text it printed.
    pub fn execute(
        &self,
        cwd: &Path,
        command: &GitCommand,
        capture_output: bool,
        fail_on_error: bool,
        console: &mut dyn Write,
    ) -> Option<Outcome> {
        let command_line = command.command_line(self.program());
        debug!("running `{}` in {}", command_line, cwd.display());

        let raw = match self
            .runner
            .run(&self.program, &command.args(), cwd, capture_output)
        {
            Ok(raw) => raw,
            Err(source) => {
                let error = ExecutionError::Spawn {
                    command: command_line,
                    source,
                };
                if fail_on_error {
                    Self::report(console, &error);
                } else {
                    debug!("{}", error);
                }
                return None;
            }
        };

        if !raw.stderr.trim().is_empty() {
            debug!("`{}` stderr: {}", command_line, raw.stderr.trim());
        }

        if fail_on_error && !raw.success() {
            let error = match raw.code {
                Some(code) => ExecutionError::NonZeroExit {
                    command: command_line,
                    code,
                },
                None => ExecutionError::Terminated {
                    command: command_line,
                },
            };
            Self::report(console, &error);
            return None;
        }

        if capture_output {
            Some(Outcome::Captured(raw.stdout.trim().to_string()))
        } else {
            Some(Outcome::Exited(raw.success()))
        }
    }

    fn report(console: &mut dyn Write, error: &ExecutionError) {
        let text = format!("Command execution error: {}", error);
        if let Err(e) = writeln!(console, "{}", Message::new(MessageKind::Error, &text)) {
            warn!("failed to report execution error ({}): {}", text, e);
        }
    }
}
