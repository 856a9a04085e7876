//! Simulation driver.
//!
//! Strings the [`physics`](crate::physics) kernel together over a time
//! sequence and aggregates energy terms into an efficiency figure.
//!
//! ## Two-phase protocol
//!
//! A run charges the capacitor from 0 V toward `V0` up to the phase
//! boundary, then discharges it from `V0`:
//!
//! ```text
//! t <= boundary : V = V0 * (1 - e^(-t / RC_eff))
//! t >  boundary : V = V0 * e^(-(t - boundary) / RC_eff)
//! ```
//!
//! By default the boundary is half of the last time sample, which assumes
//! the sequence is ascending and covers one full cycle from zero. Use
//! [`PhaseBoundary::At`] when that does not hold.
//!
//! The effective capacitance `C_eff` is the nominal capacitance corrected
//! for temperature once per run.

mod behavior;
mod config;
mod efficiency;
mod sweep;
mod validate;

pub use behavior::{
    effective_capacitance, simulate_behavior, simulate_behavior_with_config, simulate_hold,
    simulate_trace,
    Phase, TracePoint,
};
pub use config::{LossFractions, PhaseBoundary, SimulationConfig, REFERENCE_TEMPERATURE};
pub use efficiency::{
    energy_breakdown, energy_breakdown_with_config, energy_efficiency, EnergyBreakdown,
};
pub use sweep::{
    efficiency_landscape, linspace, temperature_sweep, voltage_surface, EfficiencyGrid,
    TemperaturePoint,
};
