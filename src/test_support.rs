use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{CleanError, Result};
use crate::shell::{command_line, Shell, ToolAvailability};

/// A shell that records every command instead of running it.
#[derive(Default)]
pub(crate) struct FakeShell {
    tools: Vec<String>,
    outputs: RefCell<HashMap<String, VecDeque<String>>>,
    failing: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeShell {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_tool(mut self, tool: &str) -> Self {
        self.tools.push(tool.to_string());
        self
    }

    /// Queue stdout for `command`. The last queued output repeats.
    pub(crate) fn with_output(self, command: &str, stdout: &str) -> Self {
        self.outputs
            .borrow_mut()
            .entry(command.to_string())
            .or_default()
            .push_back(stdout.to_string());
        self
    }

    pub(crate) fn failing(mut self, command: &str) -> Self {
        self.failing.push(command.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn ran(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|call| call == command)
    }
}

impl Shell for FakeShell {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = command_line(program, args);
        self.calls.borrow_mut().push(command.clone());

        if !self.tools.iter().any(|tool| tool == program) {
            return Err(CleanError::CommandSpawn {
                command,
                source: std::io::Error::from(ErrorKind::NotFound),
            });
        }

        if self.failing.contains(&command) {
            return Err(CleanError::CommandFailed {
                command,
                status: "exit status: 1".to_string(),
            });
        }

        let mut outputs = self.outputs.borrow_mut();
        let stdout = match outputs.get_mut(&command) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
            Some(queue) => queue.front().cloned().unwrap_or_default(),
            None => String::new(),
        };
        Ok(stdout)
    }

    fn availability(&self, tool: &str) -> ToolAvailability {
        if self.tools.iter().any(|t| t == tool) {
            ToolAvailability::Available(PathBuf::from("/usr/local/bin").join(tool))
        } else {
            ToolAvailability::Missing
        }
    }
}
