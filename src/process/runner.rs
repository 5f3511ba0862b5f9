/// Run an external executable and capture its standard output.
///
/// Standard input, when supplied, is written from a dedicated thread that owns
/// the pipe. The parent meanwhile drains stdout/stderr and waits for exit, so a
/// child that fills its stdout pipe before consuming all of its input cannot
/// deadlock against us. The writer thread drops (closes) the pipe as soon as it
/// finishes, whether the write succeeded or not, and is always joined before
/// `run` returns.
///
/// There is no timeout: a child that never exits blocks the caller.
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use super::errors::ProcessError;

/// Seam for everything that shells out. Production code uses [`SystemRunner`];
/// tests substitute a recording fake.
pub trait CommandRunner {
    /// Run `program` with `args`, feeding `stdin` when non-empty.
    ///
    /// Returns the complete standard output on a zero exit status.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError` if the program cannot be started, if writing
    /// standard input fails, or if the program exits non-zero.
    fn run(&self, program: &str, stdin: &[u8], args: &[&str]) -> Result<Vec<u8>, ProcessError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, stdin: &[u8], args: &[&str]) -> Result<Vec<u8>, ProcessError> {
        (**self).run(program, stdin, args)
    }
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, stdin: &[u8], args: &[&str]) -> Result<Vec<u8>, ProcessError> {
        debug!(program, ?args, stdin_bytes = stdin.len(), "spawning external command");

        let stdin_cfg = if stdin.is_empty() {
            Stdio::null()
        } else {
            Stdio::piped()
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(stdin_cfg)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| {
                if source.kind() == ErrorKind::NotFound {
                    ProcessError::ProgramNotFound {
                        program: program.to_owned(),
                    }
                } else {
                    ProcessError::Spawn {
                        program: program.to_owned(),
                        source,
                    }
                }
            })?;

        let writer = child.stdin.take().map(|mut pipe| {
            let input = stdin.to_vec();
            // `pipe` is moved in and dropped when the closure returns.
            thread::spawn(move || pipe.write_all(&input))
        });

        let output = child.wait_with_output();

        let write_result = match writer {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked"))),
            None => Ok(()),
        };

        let output = output.map_err(|source| ProcessError::Wait {
            program: program.to_owned(),
            source,
        })?;

        if !output.stderr.is_empty() {
            debug!(
                program,
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "external command diagnostics"
            );
        }

        if !output.status.success() {
            return Err(ProcessError::NonZeroExit {
                program: program.to_owned(),
                status: output.status,
            });
        }

        write_result.map_err(|source| ProcessError::StdinWrite {
            program: program.to_owned(),
            source,
        })?;

        debug!(program, stdout_bytes = output.stdout.len(), "external command finished");
        Ok(output.stdout)
    }
}
