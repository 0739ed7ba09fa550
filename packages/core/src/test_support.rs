//! Test doubles for prompts and external commands

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};

use tracing::Subscriber;

use crate::error::LauncherError;
use crate::selector::Prompter;
use crate::session::{CommandRunner, SessionStep};

/// Scripted answer for the next prompt
#[derive(Debug, Clone)]
pub enum Reply {
    Select(usize),
    Input(String),
    Password(String),
    Abort,
}

/// Prompter that replays a fixed script and records what it was shown
pub struct ScriptedPrompter {
    replies: RefCell<VecDeque<Reply>>,
    selections: RefCell<Vec<Vec<String>>>,
    password_prompts: RefCell<usize>,
    errors: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            selections: RefCell::new(Vec::new()),
            password_prompts: RefCell::new(0),
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Item lists passed to each `select` call
    pub fn selections(&self) -> Vec<Vec<String>> {
        self.selections.borrow().clone()
    }

    pub fn password_prompts(&self) -> usize {
        *self.password_prompts.borrow()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }

    fn next(&self, prompt: &str) -> Reply {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for prompt '{prompt}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, LauncherError> {
        self.selections.borrow_mut().push(items.to_vec());
        match self.next(prompt) {
            Reply::Select(index) => Ok(index),
            Reply::Abort => Err(LauncherError::PromptAborted("input closed".into())),
            other => panic!("expected select reply for '{prompt}', got {other:?}"),
        }
    }

    fn input(&self, prompt: &str, _allow_empty: bool) -> Result<String, LauncherError> {
        match self.next(prompt) {
            Reply::Input(text) => Ok(text),
            Reply::Abort => Err(LauncherError::PromptAborted("input closed".into())),
            other => panic!("expected input reply for '{prompt}', got {other:?}"),
        }
    }

    fn password(&self, prompt: &str) -> Result<String, LauncherError> {
        *self.password_prompts.borrow_mut() += 1;
        match self.next(prompt) {
            Reply::Password(text) => Ok(text),
            Reply::Abort => Err(LauncherError::PromptAborted("input closed".into())),
            other => panic!("expected password reply for '{prompt}', got {other:?}"),
        }
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// Command runner that records command lines instead of executing them
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<(SessionStep, String)>>,
    failing: HashSet<SessionStep>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `step` report a non-zero exit
    pub fn failing(mut self, step: SessionStep) -> Self {
        self.failing.insert(step);
        self
    }

    pub fn calls(&self) -> Vec<(SessionStep, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn steps(&self) -> Vec<SessionStep> {
        self.calls().into_iter().map(|(step, _)| step).collect()
    }

    fn record(&self, step: SessionStep, command_line: &str) -> Result<(), LauncherError> {
        self.calls
            .lock()
            .unwrap()
            .push((step, command_line.to_string()));
        if self.failing.contains(&step) {
            return Err(LauncherError::ExternalCommand {
                step,
                message: "exit status: 1".into(),
            });
        }
        Ok(())
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, step: SessionStep, command_line: &str) -> Result<(), LauncherError> {
        self.record(step, command_line)
    }

    fn spawn_detached(&self, step: SessionStep, command_line: &str) -> Result<(), LauncherError> {
        self.record(step, command_line)
    }
}

/// In-memory sink for formatted log records
#[derive(Debug, Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text subscriber writing every record at debug and above here
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        let sink = self.clone();
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .without_time()
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
