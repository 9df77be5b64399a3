//! Text form of the simulation parameters, as typed by the user.

use serde::{Deserialize, Serialize};

use crate::data::simulation::SimulationInputs;
use crate::data::transient::CircuitParams;
use crate::error::{Result, SimError};

/// The five text fields of the parameter form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterForm {
    pub resistance: String,
    pub capacitance: String,
    pub v0: String,
    pub t_final: String,
    pub step: String,
}

impl ParameterForm {
    /// Fill every field from numeric values.
    pub fn from_inputs(inputs: &SimulationInputs) -> Self {
        Self {
            resistance: inputs.circuit.resistance.to_string(),
            capacitance: inputs.circuit.capacitance.to_string(),
            v0: inputs.circuit.v0.to_string(),
            t_final: inputs.t_final.to_string(),
            step: inputs.step.to_string(),
        }
    }

    /// Parse all five fields. The first field that is not a real number is
    /// reported in [`SimError::Parse`].
    ///
    /// Range checks are left to [`simulate`](crate::data::simulation::simulate).
    pub fn parse(&self) -> Result<SimulationInputs> {
        let resistance = parse_field("resistance", &self.resistance)?;
        let capacitance = parse_field("capacitance", &self.capacitance)?;
        let v0 = parse_field("initial voltage", &self.v0)?;
        let t_final = parse_field("final time", &self.t_final)?;
        let step = parse_field("time step", &self.step)?;
        Ok(SimulationInputs {
            circuit: CircuitParams::new(v0, resistance, capacitance),
            t_final,
            step,
        })
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.resistance,
            &self.capacitance,
            &self.v0,
            &self.t_final,
            &self.step,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

fn parse_field(field: &'static str, input: &str) -> Result<f64> {
    input.trim().parse::<f64>().map_err(|_| SimError::Parse {
        field,
        input: input.to_string(),
    })
}
