//! Terminal presentation layer
//!
//! This module handles:
//! - The styled on-screen report shown after `analyze`
//! - A spinner while profile data is being fetched
//!
//! Progress goes through the [`ProgressReporter`] trait so commands can pick
//! a visible spinner or a silent reporter (for `--json` output or when
//! stdout is not a terminal).

pub mod display;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for long-running steps
pub trait ProgressReporter {
    /// Show `message` as the current step
    fn step(&mut self, message: &str);

    /// Stop reporting after success
    fn finish(&mut self);

    /// Stop reporting after failure
    fn abandon(&mut self);
}

/// Spinner shown on stderr while work is in flight
pub struct InteractiveProgressReporter {
    spinner: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn step(&mut self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    fn finish(&mut self) {
        self.spinner.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.spinner.abandon();
    }
}

/// No-op reporter
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn step(&mut self, _message: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter: a spinner only when asked for and stderr is a terminal
pub fn progress_reporter(interactive: bool) -> Box<dyn ProgressReporter> {
    if interactive && console::Term::stderr().is_term() {
        Box::new(InteractiveProgressReporter::new())
    } else {
        Box::new(SilentProgressReporter)
    }
}
