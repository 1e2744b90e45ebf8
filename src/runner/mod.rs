mod error;
#[cfg(test)]
pub mod fake;

use std::fmt;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

pub use error::RunnerError;

/// An external command as a program plus a discrete argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Program followed by its arguments
    #[allow(dead_code)]
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Shell-like rendering, for logs and error messages only
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('\'') {
                write!(f, " '{}'", arg.replace('\'', "'\\''"))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Outcome of a readiness check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    /// Not ready yet, with whatever the command printed about why
    NotReady(String),
}

/// Launches external commands and turns exit status into a result
pub trait CommandRunner {
    /// Run with inherited stdio
    fn run(&self, command: &CommandSpec) -> Result<(), RunnerError>;

    /// Run and return stdout
    fn capture(&self, command: &CommandSpec) -> Result<String, RunnerError>;

    /// Run quietly; a non-zero exit means not ready rather than an error
    fn probe(&self, command: &CommandSpec) -> Result<Readiness, RunnerError>;
}

/// Runs commands as real child processes, blocking until they exit
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<(), RunnerError> {
        debug!(command = %command, "running");
        let status = command
            .to_command()
            .status()
            .map_err(|source| spawn_error(command, source))?;
        check_status(command, status, String::new())
    }

    fn capture(&self, command: &CommandSpec) -> Result<String, RunnerError> {
        debug!(command = %command, "capturing");
        let output = command
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| spawn_error(command, source))?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        check_status(command, output.status, stderr)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn probe(&self, command: &CommandSpec) -> Result<Readiness, RunnerError> {
        debug!(command = %command, "probing");
        let output = command
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| spawn_error(command, source))?;
        if output.status.success() {
            return Ok(Readiness::Ready);
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        Ok(Readiness::NotReady(reason))
    }
}

fn spawn_error(command: &CommandSpec, source: std::io::Error) -> RunnerError {
    RunnerError::Spawn {
        program: command.program.clone(),
        source,
    }
}

fn check_status(
    command: &CommandSpec,
    status: ExitStatus,
    stderr: String,
) -> Result<(), RunnerError> {
    if status.success() {
        Ok(())
    } else {
        Err(RunnerError::Failed {
            command: command.to_string(),
            code: status.code(),
            stderr,
        })
    }
}
