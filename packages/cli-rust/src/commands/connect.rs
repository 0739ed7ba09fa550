//! Connect command
//!
//! Runs the wizard, then registers the credential, launches the session and
//! deletes the credential again.

use std::time::Duration;

use anyhow::{Result, bail};
use console::style;
use rdp_launcher_core::session::StepOutcome;
use rdp_launcher_core::{
    Config, IdentityResolver, SessionOrchestrator, SessionReport, SessionStep, SessionTimings,
    ShellRunner,
};
use tracing::info;

use crate::output::{CommandSpinner, step_style};
use crate::wizard::{TerminalPrompter, run_wizard, verify_tty};

/// Select, resolve and launch
pub fn cmd_connect(
    config: &Config,
    identities: &IdentityResolver,
    quiet: bool,
    log_secrets: bool,
) -> Result<()> {
    verify_tty()?;

    let prompter = TerminalPrompter::new();
    let selection = run_wizard(&prompter, config, identities, quiet, log_secrets)?;

    let settings = &config.settings;
    let runner =
        ShellRunner::new().with_timeout(settings.command_timeout_secs.map(Duration::from_secs));
    let orchestrator = SessionOrchestrator::new(
        runner,
        settings.commands.clone(),
        SessionTimings::from_settings(settings),
    )
    .reveal_secrets(log_secrets);

    let spinner = CommandSpinner::new_maybe(
        &format!("Launching session to {}...", selection.credential.address),
        quiet,
    );
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = rt.block_on(orchestrator.run_session(&selection.credential));

    if report.is_success() {
        spinner.success(&format!("Session launched to {}", selection.host_name));
    } else {
        spinner.fail("Session finished with errors");
    }
    info!(
        host = %selection.host_name,
        failed = report.failed_steps().len(),
        "Session sequence finished"
    );

    if !quiet {
        for line in report_lines(&report) {
            eprintln!("  {line}");
        }
    }

    let failed = report.failed_steps();
    if !failed.is_empty() {
        let names: Vec<String> = failed.iter().map(SessionStep::to_string).collect();
        bail!(
            "{} of {} session steps failed: {}",
            failed.len(),
            report.outcomes.len(),
            names.join(", ")
        );
    }
    Ok(())
}

fn step_label(step: SessionStep) -> &'static str {
    match step {
        SessionStep::Register => "Register credential",
        SessionStep::Launch => "Launch session",
        SessionStep::Cleanup => "Delete credential",
    }
}

fn outcome_line(outcome: &StepOutcome) -> String {
    let marker = step_style(outcome.succeeded());
    match &outcome.result {
        Ok(()) => format!("{marker} {}", step_label(outcome.step)),
        Err(err) => format!(
            "{marker} {} {}",
            step_label(outcome.step),
            style(format!("({err})")).dim()
        ),
    }
}

/// One line per step, in execution order
fn report_lines(report: &SessionReport) -> Vec<String> {
    report.outcomes.iter().map(outcome_line).collect()
}
