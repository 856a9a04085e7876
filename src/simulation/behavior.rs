//! Charge/discharge voltage traces.

use tracing::{debug, warn};

use crate::capacitor::Capacitor;
use crate::error::{CapsimError, Result};
use crate::physics::{
    charge_voltage, discharge_voltage, leakage_decay, temperature_effect, time_constant,
};

use super::config::SimulationConfig;
use super::validate::{is_ascending, require_finite, require_finite_times, require_nonzero};

/// Which formula produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Charge,
    Discharge,
}

impl Phase {
    /// Phase of sample `t` for a given boundary. The boundary sample itself
    /// belongs to the charge phase.
    pub fn at(t: f64, boundary: f64) -> Self {
        if t <= boundary {
            Phase::Charge
        } else {
            Phase::Discharge
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Charge => "charge",
            Phase::Discharge => "discharge",
        }
    }
}

/// A single sample of a simulated trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub time: f64,
    pub voltage: f64,
    pub phase: Phase,
}

/// Capacitance of `capacitor` at `temperature`, relative to the configured
/// reference temperature.
pub fn effective_capacitance(
    capacitor: &Capacitor,
    temperature: f64,
    config: &SimulationConfig,
) -> f64 {
    temperature_effect(
        capacitor.capacitance(),
        capacitor.temp_coeff(),
        temperature,
        config.reference_temperature,
    )
}

/// Simulate one charge/discharge cycle with the default configuration.
///
/// Samples at or before `time_sequence[last] / 2` follow the charge curve
/// with `t` as given; later samples follow the discharge curve with `t`
/// shifted back by that midpoint. The output has one voltage per input
/// sample, in the same order.
///
/// # Arguments
/// * `capacitor` - Capacitor parameters
/// * `resistance` - Series charging/discharging resistance (Ω)
/// * `v0` - Supply voltage (V)
/// * `temperature` - Operating temperature (°C)
/// * `time_sequence` - Ascending sample times (s)
pub fn simulate_behavior(
    capacitor: &Capacitor,
    resistance: f64,
    v0: f64,
    temperature: f64,
    time_sequence: &[f64],
) -> Result<Vec<f64>> {
    simulate_behavior_with_config(
        capacitor,
        resistance,
        v0,
        temperature,
        time_sequence,
        &SimulationConfig::default(),
    )
}

/// Simulate one charge/discharge cycle with a custom configuration.
pub fn simulate_behavior_with_config(
    capacitor: &Capacitor,
    resistance: f64,
    v0: f64,
    temperature: f64,
    time_sequence: &[f64],
    config: &SimulationConfig,
) -> Result<Vec<f64>> {
    Ok(simulate_trace(capacitor, resistance, v0, temperature, time_sequence, config)?
        .into_iter()
        .map(|p| p.voltage)
        .collect())
}

/// Simulate one charge/discharge cycle, keeping the time and phase of every
/// sample alongside its voltage.
pub fn simulate_trace(
    capacitor: &Capacitor,
    resistance: f64,
    v0: f64,
    temperature: f64,
    time_sequence: &[f64],
    config: &SimulationConfig,
) -> Result<Vec<TracePoint>> {
    let boundary = match config.phase_boundary.resolve(time_sequence) {
        Some(b) if !time_sequence.is_empty() => b,
        _ => return Ok(Vec::new()),
    };

    require_nonzero("resistance", resistance)?;
    require_finite("v0", v0)?;
    require_finite("temperature", temperature)?;
    require_finite("phase_boundary", boundary)?;
    require_finite_times(time_sequence)?;

    let c_eff = effective_capacitance(capacitor, temperature, config);
    require_nonzero("effective_capacitance", c_eff)?;
    let tau = time_constant(resistance, c_eff);
    if tau == 0.0 || !tau.is_finite() {
        return Err(CapsimError::invalid_parameter(
            "time_constant",
            format!("R·C must be finite and non-zero (got {tau})"),
        ));
    }

    check_time_sequence(time_sequence, boundary);

    debug!(
        capacitor = capacitor.name().as_str(),
        resistance,
        v0,
        temperature,
        c_eff,
        tau,
        boundary,
        samples = time_sequence.len(),
        "simulating charge/discharge cycle"
    );

    Ok(time_sequence
        .iter()
        .map(|&t| {
            let phase = Phase::at(t, boundary);
            let voltage = match phase {
                Phase::Charge => charge_voltage(v0, resistance, c_eff, t),
                Phase::Discharge => discharge_voltage(v0, resistance, c_eff, t - boundary),
            };
            TracePoint { time: t, voltage, phase }
        })
        .collect())
}

/// Open-circuit voltage of a capacitor left charged to `v0`, decaying
/// through its leakage conductance.
///
/// Uses the simplified [`leakage_decay`] model, so the capacitance does not
/// enter the result.
pub fn simulate_hold(capacitor: &Capacitor, v0: f64, time_sequence: &[f64]) -> Vec<f64> {
    time_sequence
        .iter()
        .map(|&t| leakage_decay(v0, capacitor.leakage(), t))
        .collect()
}

/// Warn about time sequences that break the one-ascending-cycle convention.
fn check_time_sequence(time_sequence: &[f64], boundary: f64) {
    if !is_ascending(time_sequence) {
        warn!("time sequence is not ascending; phase assignment follows sample values, not order");
    }
    if let (Some(&first), Some(&last)) = (time_sequence.first(), time_sequence.last()) {
        if boundary < first || boundary > last {
            warn!(
                boundary,
                first, last, "phase boundary lies outside the sampled time range"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::PhaseBoundary;
    use approx::assert_relative_eq;

    fn cap(temp_coeff: f64) -> Capacitor {
        // τ = 1000Ω * 1mF = 1s
        Capacitor::new("Test", 0.001, 0.1, 1e-6, temp_coeff)
    }

    #[test]
    fn test_midpoint_sample_is_charge() {
        let volts = simulate_behavior(&cap(0.0), 1000.0, 5.0, 25.0, &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(volts.len(), 3);
        assert_eq!(volts[0], 0.0);
        // t=1 is the midpoint and still charges
        assert_relative_eq!(volts[1], 5.0 * (1.0 - (-1.0f64).exp()), epsilon = 1e-12);
        // t=2 discharges for 2 - 1 = 1s
        assert_relative_eq!(volts[2], 5.0 * (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_trace_phases() {
        let trace = simulate_trace(
            &cap(0.0),
            1000.0,
            5.0,
            25.0,
            &[0.0, 0.5, 1.0, 1.5, 2.0],
            &SimulationConfig::default(),
        )
        .unwrap();
        let phases: Vec<Phase> = trace.iter().map(|p| p.phase).collect();
        assert_eq!(
            phases,
            vec![
                Phase::Charge,
                Phase::Charge,
                Phase::Charge,
                Phase::Discharge,
                Phase::Discharge
            ]
        );
        assert_eq!(trace[3].time, 1.5);
    }

    #[test]
    fn test_temperature_changes_time_constant() {
        // +1%/°C at 35°C => C_eff = 1.1mF, τ = 1.1s
        let volts = simulate_behavior(&cap(0.01), 1000.0, 5.0, 35.0, &[0.0, 1.1, 2.2]).unwrap();
        assert_relative_eq!(volts[1], 5.0 * (1.0 - (-1.0f64).exp()), epsilon = 1e-9);
    }

    #[test]
    fn test_explicit_boundary() {
        let config = SimulationConfig::new().with_phase_boundary(PhaseBoundary::At(0.5));
        let volts = simulate_behavior_with_config(
            &cap(0.0),
            1000.0,
            5.0,
            25.0,
            &[0.0, 0.5, 1.5],
            &config,
        )
        .unwrap();
        assert_relative_eq!(volts[1], 5.0 * (1.0 - (-0.5f64).exp()), epsilon = 1e-12);
        assert_relative_eq!(volts[2], 5.0 * (-1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_reference_temperature_config() {
        let config = SimulationConfig::new().with_reference_temperature(20.0);
        let c = effective_capacitance(&cap(0.01), 20.0, &config);
        assert_eq!(c, 0.001);
    }

    #[test]
    fn test_empty_sequence() {
        let volts = simulate_behavior(&cap(0.0), 1000.0, 5.0, 25.0, &[]).unwrap();
        assert!(volts.is_empty());
    }

    #[test]
    fn test_zero_resistance_rejected() {
        let err = simulate_behavior(&cap(0.0), 0.0, 5.0, 25.0, &[0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            CapsimError::InvalidParameter { ref param, .. } if param == "resistance"
        ));
    }

    #[test]
    fn test_zero_capacitance_rejected() {
        let zero = Capacitor::new("Zero", 0.0, 0.1, 0.0, 0.0);
        let err = simulate_behavior(&zero, 1000.0, 5.0, 25.0, &[0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            CapsimError::InvalidParameter { ref param, .. } if param == "effective_capacitance"
        ));

        // -100%/°C at 26°C also collapses the capacitance to zero
        let collapsing = Capacitor::new("Collapsing", 0.001, 0.1, 0.0, -1.0);
        assert!(simulate_behavior(&collapsing, 1000.0, 5.0, 26.0, &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_non_finite_time_rejected() {
        assert!(simulate_behavior(&cap(0.0), 1000.0, 5.0, 25.0, &[0.0, f64::NAN, 2.0]).is_err());
    }

    #[test]
    fn test_negative_resistance_accepted() {
        let volts = simulate_behavior(&cap(0.0), -1000.0, 5.0, 25.0, &[0.0, 1.0, 2.0]).unwrap();
        assert!(volts.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_hold_decays_with_leakage() {
        let leaky = Capacitor::new("Leaky", 0.001, 0.1, 0.5, 0.0);
        let volts = simulate_hold(&leaky, 10.0, &[0.0, 2.0]);
        assert_eq!(volts[0], 10.0);
        assert_relative_eq!(volts[1], 10.0 * (-1.0f64).exp(), epsilon = 1e-12);

        let sealed = Capacitor::new("Sealed", 0.001, 0.1, 0.0, 0.0);
        assert_eq!(simulate_hold(&sealed, 10.0, &[0.0, 100.0]), vec![10.0, 10.0]);
    }

    #[test]
    fn test_non_ascending_sequence_still_evaluated() {
        // Midpoint is taken from the last sample (1.0 / 2), not the maximum
        let volts = simulate_behavior(&cap(0.0), 1000.0, 5.0, 25.0, &[0.0, 2.0, 1.0]).unwrap();
        assert_relative_eq!(volts[1], 5.0 * (-1.5f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(volts[2], 5.0 * (-0.5f64).exp(), epsilon = 1e-12);
    }
}
