//! The simulation controller: owns the most recent result and turns user
//! actions ("generate", "save") into state transitions and notices.
//!
//! ```text
//! Idle --generate ok--> ResultsReady --save--> ResultsReady
//! Idle --generate err-> Idle (error notice)
//! ResultsReady --generate ok--> ResultsReady (result replaced)
//! ```
//!
//! Errors are caught at these two boundaries and surfaced as [`Notice`]s;
//! nothing here panics on bad input.

use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};

use chrono::{DateTime, Local};

use crate::config::Labels;
use crate::data::export::{self, default_file_name};
use crate::data::inputs::ParameterForm;
use crate::data::simulation::{simulate, SimulationResult};
use crate::error::{Result, SimError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message for the user about the outcome of the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SimState {
    #[default]
    Idle,
    ResultsReady(SimulationResult),
}

/// Drives the `Idle -> ResultsReady` lifecycle.
pub struct SimulationController {
    state: SimState,
    labels: Labels,
    last_notice: Option<Notice>,
    listeners: Vec<Sender<Notice>>,
}

impl SimulationController {
    pub fn new(labels: Labels) -> Self {
        Self {
            state: SimState::Idle,
            labels,
            last_notice: None,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// The result currently held, if any.
    pub fn result(&self) -> Option<&SimulationResult> {
        match &self.state {
            SimState::ResultsReady(r) => Some(r),
            SimState::Idle => None,
        }
    }

    /// Whether "save" is available.
    pub fn can_export(&self) -> bool {
        matches!(self.state, SimState::ResultsReady(_))
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    /// Subscribe to notices. The receiver gets every notice posted after this call.
    pub fn subscribe(&mut self) -> Receiver<Notice> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    /// Parse `form` and simulate. On success the new result replaces the
    /// previous one; on failure the previous state is kept.
    pub fn generate(&mut self, form: &ParameterForm) -> Result<&SimulationResult> {
        let outcome = form.parse().and_then(simulate);
        match outcome {
            Ok(result) => {
                log::info!(
                    "simulated {} samples (tau = {} s)",
                    result.len(),
                    result.time_constant()
                );
                self.post(Notice::info(self.labels.generated));
                self.state = SimState::ResultsReady(result);
                self.result().ok_or(SimError::NoResults)
            }
            Err(e) => {
                log::warn!("simulation rejected: {e}");
                self.post(Notice::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Default export file name for a save at `now`.
    pub fn suggested_file_name(&self, now: &DateTime<Local>) -> String {
        default_file_name(now)
    }

    /// Write the held result to `path` as CSV.
    ///
    /// Fails with [`SimError::NoResults`] while idle. A write failure leaves the
    /// result in place so it can be exported again.
    pub fn export_to(&mut self, path: &Path) -> Result<()> {
        let outcome = match &self.state {
            SimState::Idle => Err(SimError::NoResults),
            SimState::ResultsReady(result) => {
                export::write_csv_path(path, &self.labels.csv, result).map_err(SimError::from)
            }
        };
        match &outcome {
            Ok(()) => {
                log::info!("exported results to {}", path.display());
                self.post(Notice::info(self.labels.saved));
            }
            Err(e) => {
                log::error!("export to {} failed: {e}", path.display());
                self.post(Notice::error(e.to_string()));
            }
        }
        outcome
    }

    fn post(&mut self, notice: Notice) {
        self.listeners.retain(|tx| tx.send(notice.clone()).is_ok());
        self.last_notice = Some(notice);
    }
}
