//! Session orchestration
//!
//! Runs the three external steps in a fixed order:
//! register credential, launch the remote session, delete the credential.
//! A failing step is logged and recorded, and the sequence continues so the
//! credential is always deleted again.
//!
//! The settle delays are wall-clock waits, not completion signals. A slow
//! credential store or session client can still race them.

mod command;

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{CommandTemplates, Settings};
use crate::credential::Credential;
use crate::error::LauncherError;

pub use command::{CommandRunner, ShellRunner};

/// One of the three external steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStep {
    Register,
    Launch,
    Cleanup,
}

impl SessionStep {
    pub const ORDER: [SessionStep; 3] = [
        SessionStep::Register,
        SessionStep::Launch,
        SessionStep::Cleanup,
    ];
}

impl fmt::Display for SessionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionStep::Register => "register",
            SessionStep::Launch => "launch",
            SessionStep::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}

/// Delays between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    /// Wait after register so the credential store commits
    pub register_settle: Duration,
    /// Wait after launch so the client reads the credential before it is deleted
    pub launch_settle: Duration,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            register_settle: Duration::from_secs(2),
            launch_settle: Duration::from_secs(3),
        }
    }
}

impl SessionTimings {
    pub fn none() -> Self {
        Self {
            register_settle: Duration::ZERO,
            launch_settle: Duration::ZERO,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            register_settle: Duration::from_secs(settings.register_settle_secs),
            launch_settle: Duration::from_secs(settings.launch_settle_secs),
        }
    }
}

/// Substitute `{address}`, `{user}` and `{password}` in a command template
pub fn render_command(template: &str, address: &str, user: &str, password: &str) -> String {
    template
        .replace("{address}", address)
        .replace("{user}", user)
        .replace("{password}", password)
}

/// Result of one step
#[derive(Debug)]
pub struct StepOutcome {
    pub step: SessionStep,
    pub result: Result<(), LauncherError>,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of every step of a session, in execution order
#[derive(Debug, Default)]
pub struct SessionReport {
    pub outcomes: Vec<StepOutcome>,
}

impl SessionReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(StepOutcome::succeeded)
    }

    pub fn failed_steps(&self) -> Vec<SessionStep> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.succeeded())
            .map(|outcome| outcome.step)
            .collect()
    }
}

/// Drives the register → launch → cleanup sequence
pub struct SessionOrchestrator<R: CommandRunner> {
    runner: R,
    templates: CommandTemplates,
    timings: SessionTimings,
    reveal_secrets: bool,
}

impl<R: CommandRunner> SessionOrchestrator<R> {
    pub fn new(runner: R, templates: CommandTemplates, timings: SessionTimings) -> Self {
        Self {
            runner,
            templates,
            timings,
            reveal_secrets: false,
        }
    }

    /// Log command lines with the real password instead of a mask
    pub fn reveal_secrets(mut self, reveal: bool) -> Self {
        self.reveal_secrets = reveal;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the full sequence; never stops early
    pub async fn run_session(&self, credential: &Credential) -> SessionReport {
        let mut report = SessionReport::default();

        let register = self.step_command(SessionStep::Register, credential);
        let result = self.runner.run(SessionStep::Register, &register).await;
        report.outcomes.push(self.finish(SessionStep::Register, result));
        tokio::time::sleep(self.timings.register_settle).await;

        let launch = self.step_command(SessionStep::Launch, credential);
        let result = self.runner.spawn_detached(SessionStep::Launch, &launch);
        report.outcomes.push(self.finish(SessionStep::Launch, result));
        tokio::time::sleep(self.timings.launch_settle).await;

        let cleanup = self.step_command(SessionStep::Cleanup, credential);
        let result = self.runner.run(SessionStep::Cleanup, &cleanup).await;
        report.outcomes.push(self.finish(SessionStep::Cleanup, result));

        report
    }

    fn template(&self, step: SessionStep) -> &str {
        match step {
            SessionStep::Register => &self.templates.register,
            SessionStep::Launch => &self.templates.launch,
            SessionStep::Cleanup => &self.templates.cleanup,
        }
    }

    fn step_command(&self, step: SessionStep, credential: &Credential) -> String {
        let template = self.template(step);
        let logged = render_command(
            template,
            &credential.address,
            &credential.user,
            credential.password.for_log(self.reveal_secrets),
        );
        debug!(%step, command = %logged, "Running step");
        render_command(
            template,
            &credential.address,
            &credential.user,
            credential.password.expose(),
        )
    }

    fn finish(&self, step: SessionStep, result: Result<(), LauncherError>) -> StepOutcome {
        match &result {
            Ok(()) => info!(%step, "Step completed"),
            Err(err) => warn!(%step, "Command exec error: {err}"),
        }
        StepOutcome { step, result }
    }
}
