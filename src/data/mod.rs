pub mod export;
pub mod inputs;
pub mod simulation;
pub mod time_axis;
pub mod transient;
