//! The immutable result of one simulation request.

use serde::{Deserialize, Serialize};

use crate::data::time_axis::build_time_series;
use crate::data::transient::CircuitParams;
use crate::error::{Result, SimError};

/// Everything needed to run one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub circuit: CircuitParams,
    /// Simulated duration in seconds (exclusive upper bound of the time axis).
    pub t_final: f64,
    /// Time step in seconds.
    pub step: f64,
}

/// Time axis plus the voltage and current sampled on it.
///
/// Built only by [`simulate`], so `time`, `voltage` and `current` always have
/// the same length. A new request produces a new value; nothing is updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    inputs: SimulationInputs,
    time: Vec<f64>,
    voltage: Vec<f64>,
    current: Vec<f64>,
}

impl SimulationResult {
    pub fn inputs(&self) -> &SimulationInputs {
        &self.inputs
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    pub fn current(&self) -> &[f64] {
        &self.current
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time_constant(&self) -> f64 {
        self.inputs.circuit.time_constant()
    }

    /// `(t, v, i)` triples in time order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(&self.voltage)
            .zip(&self.current)
            .map(|((&t, &v), &i)| (t, v, i))
    }

    pub fn final_voltage(&self) -> Option<f64> {
        self.voltage.last().copied()
    }

    pub fn final_current(&self) -> Option<f64> {
        self.current.last().copied()
    }

    /// `[t, v]` pairs ready for a line plot.
    pub fn voltage_points(&self) -> Vec<[f64; 2]> {
        self.time.iter().zip(&self.voltage).map(|(&t, &v)| [t, v]).collect()
    }

    /// `[t, i]` pairs ready for a line plot.
    pub fn current_points(&self) -> Vec<[f64; 2]> {
        self.time.iter().zip(&self.current).map(|(&t, &i)| [t, i]).collect()
    }
}

/// Validate `inputs`, build the time axis and evaluate both series on it.
pub fn simulate(inputs: SimulationInputs) -> Result<SimulationResult> {
    let circuit = inputs.circuit;
    if !(circuit.resistance > 0.0) || !circuit.resistance.is_finite() {
        return Err(SimError::InvalidParameter(
            "resistance must be a positive number of ohms".to_string(),
        ));
    }
    if !(circuit.capacitance > 0.0) || !circuit.capacitance.is_finite() {
        return Err(SimError::InvalidParameter(
            "capacitance must be a positive number of farads".to_string(),
        ));
    }
    if !circuit.v0.is_finite() {
        return Err(SimError::InvalidParameter(
            "initial voltage must be finite".to_string(),
        ));
    }
    let time = build_time_series(inputs.t_final, inputs.step)?;
    let voltage: Vec<f64> = circuit.voltages(time.iter().copied()).collect();
    let current: Vec<f64> = circuit.currents(time.iter().copied()).collect();
    Ok(SimulationResult {
        inputs,
        time,
        voltage,
        current,
    })
}
