//! Closed-form transient response of a first-order RC discharge.
//!
//! Every sample is a pure function of `t`; there is no recurrence between
//! samples, so the series helpers are plain mapped transforms over the time axis.

use serde::{Deserialize, Serialize};

/// Voltage across the capacitor at time `t`: `v0 * exp(-t / (r * c))`.
///
/// Callers guarantee `r > 0` and `c > 0`.
pub fn voltage_at(v0: f64, r: f64, c: f64, t: f64) -> f64 {
    v0 * (-t / (r * c)).exp()
}

/// Current through the resistor at time `t`: `(v0 / r) * exp(-t / (r * c))`.
///
/// Callers guarantee `r > 0` and `c > 0`.
pub fn current_at(v0: f64, r: f64, c: f64, t: f64) -> f64 {
    (v0 / r) * (-t / (r * c)).exp()
}

/// [`voltage_at`] applied element-wise; the output has the same length as `times`.
pub fn voltage_series(v0: f64, r: f64, c: f64, times: &[f64]) -> Vec<f64> {
    times.iter().map(|&t| voltage_at(v0, r, c, t)).collect()
}

/// [`current_at`] applied element-wise; the output has the same length as `times`.
pub fn current_series(v0: f64, r: f64, c: f64, times: &[f64]) -> Vec<f64> {
    times.iter().map(|&t| current_at(v0, r, c, t)).collect()
}

/// Initial voltage, resistance and capacitance of the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitParams {
    /// Initial voltage in volts.
    pub v0: f64,
    /// Resistance in ohms.
    pub resistance: f64,
    /// Capacitance in farads.
    pub capacitance: f64,
}

impl CircuitParams {
    pub fn new(v0: f64, resistance: f64, capacitance: f64) -> Self {
        Self {
            v0,
            resistance,
            capacitance,
        }
    }

    /// τ = R·C in seconds.
    pub fn time_constant(&self) -> f64 {
        self.resistance * self.capacitance
    }

    /// Current at `t = 0`, i.e. `v0 / R`.
    pub fn initial_current(&self) -> f64 {
        self.v0 / self.resistance
    }

    pub fn voltage_at(&self, t: f64) -> f64 {
        voltage_at(self.v0, self.resistance, self.capacitance, t)
    }

    pub fn current_at(&self, t: f64) -> f64 {
        current_at(self.v0, self.resistance, self.capacitance, t)
    }

    /// Lazily evaluate the voltage over an ordered sequence of times.
    pub fn voltages<'a, I>(&'a self, times: I) -> impl Iterator<Item = f64> + 'a
    where
        I: IntoIterator<Item = f64> + 'a,
        I::IntoIter: 'a,
    {
        times.into_iter().map(move |t| self.voltage_at(t))
    }

    /// Lazily evaluate the current over an ordered sequence of times.
    pub fn currents<'a, I>(&'a self, times: I) -> impl Iterator<Item = f64> + 'a
    where
        I: IntoIterator<Item = f64> + 'a,
        I::IntoIter: 'a,
    {
        times.into_iter().map(move |t| self.current_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_time_constant_decays_to_one_over_e() {
        let p = CircuitParams::new(10.0, 1_000.0, 1e-3);
        assert_relative_eq!(p.time_constant(), 1.0);
        assert_relative_eq!(p.voltage_at(1.0), 10.0 / std::f64::consts::E, max_relative = 1e-12);
        assert_relative_eq!(p.current_at(1.0), 0.01 / std::f64::consts::E, max_relative = 1e-12);
    }

    #[test]
    fn lazy_and_eager_series_agree() {
        let p = CircuitParams::new(3.0, 2.0, 0.5);
        let times = [0.0, 0.25, 0.5, 2.0];
        let eager = voltage_series(3.0, 2.0, 0.5, &times);
        let lazy: Vec<f64> = p.voltages(times.iter().copied()).collect();
        assert_eq!(eager, lazy);
        let eager_i = current_series(3.0, 2.0, 0.5, &times);
        let lazy_i: Vec<f64> = p.currents(times).collect();
        assert_eq!(eager_i, lazy_i);
    }
}
