//! RC transient simulator crate root.
//!
//! The numeric core (`data`) is independent of the egui front end (`app`):
//! - `data::transient`: closed-form voltage and current of an RC discharge
//! - `data::time_axis`: sampled time axis with its validation rules
//! - `data::simulation`: the immutable [`SimulationResult`]
//! - `data::inputs`: the text parameter form and its parsing
//! - `data::export`: CSV export and the default file name
//! - `controllers`: `Idle -> ResultsReady` state machine with user notices
//! - `config` / `persistence`: JSON configuration and remembered form
//! - `app`: the egui window

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_rc_app, RcApp};
pub use config::{Language, Labels, RcAppConfig};
pub use controllers::{Notice, NoticeLevel, SimState, SimulationController};
pub use data::export::{default_file_name, read_csv, write_csv, CsvHeader};
pub use data::inputs::ParameterForm;
pub use data::simulation::{simulate, SimulationInputs, SimulationResult};
pub use data::time_axis::build_time_series;
pub use data::transient::{current_at, current_series, voltage_at, voltage_series, CircuitParams};
pub use error::SimError;
