use super::{CommandRunner, CommandSpec, Readiness, RunnerError};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

/// How a recorded command was launched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Run,
    Capture,
    Probe,
}

/// In-memory runner that records every command instead of launching it
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<(Mode, CommandSpec)>>,
    failures: BTreeMap<Vec<String>, i32>,
    outputs: BTreeMap<Vec<String>, String>,
    probes: RefCell<VecDeque<Readiness>>,
}

fn key(command: &CommandSpec) -> Vec<String> {
    command.argv().into_iter().map(str::to_string).collect()
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code`
    pub fn with_failure(mut self, command: &CommandSpec, code: i32) -> Self {
        self.failures.insert(key(command), code);
        self
    }

    /// Make `command` print `stdout` when captured
    pub fn with_output(mut self, command: &CommandSpec, stdout: impl Into<String>) -> Self {
        self.outputs.insert(key(command), stdout.into());
        self
    }

    /// Answer successive probes from `results`; probes succeed once it runs out
    pub fn with_probes(self, results: impl IntoIterator<Item = bool>) -> Self {
        self.probes.borrow_mut().extend(results.into_iter().map(|ready| {
            if ready {
                Readiness::Ready
            } else {
                Readiness::NotReady(String::new())
            }
        }));
        self
    }

    /// Queue a not-ready answer carrying `reason`
    pub fn with_not_ready(self, reason: impl Into<String>) -> Self {
        self.probes
            .borrow_mut()
            .push_back(Readiness::NotReady(reason.into()));
        self
    }

    pub fn calls(&self) -> Vec<(Mode, CommandSpec)> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.calls.borrow().iter().map(|(_, c)| c.clone()).collect()
    }

    fn record(&self, mode: Mode, command: &CommandSpec) -> Result<(), RunnerError> {
        self.calls.borrow_mut().push((mode, command.clone()));
        match self.failures.get(&key(command)) {
            Some(code) => Err(RunnerError::Failed {
                command: command.to_string(),
                code: Some(*code),
                stderr: String::new(),
            }),
            None => Ok(()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<(), RunnerError> {
        self.record(Mode::Run, command)
    }

    fn capture(&self, command: &CommandSpec) -> Result<String, RunnerError> {
        self.record(Mode::Capture, command)?;
        Ok(self.outputs.get(&key(command)).cloned().unwrap_or_default())
    }

    fn probe(&self, command: &CommandSpec) -> Result<Readiness, RunnerError> {
        self.record(Mode::Probe, command)?;
        Ok(self
            .probes
            .borrow_mut()
            .pop_front()
            .unwrap_or(Readiness::Ready))
    }
}
