//! # Capsim Core
//!
//! Capacitor charge/discharge simulation with temperature-dependent
//! capacitance, ESR loss and leakage.
//!
//! This library provides:
//! - Closed-form RC physics (charge/discharge curves, stored energy, ESR
//!   power loss, temperature drift, leakage decay)
//! - A driver that evaluates those formulas across a time sequence
//! - An energy efficiency estimate with a per-term loss breakdown
//! - Temperature, resistance and voltage sweeps
//!
//! ## Architecture
//!
//! - [`physics`] - Pure scalar formulas, no validation
//! - [`capacitor`] - The immutable [`Capacitor`] parameter record
//! - [`simulation`] - Voltage traces, efficiency and sweeps
//! - [`error`] - Error type for rejected simulation parameters
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use capsim_core::{simulation, Capacitor};
//!
//! let cap = Capacitor::new("Electrolytic", 1e-3, 0.1, 1e-6, 0.002);
//! let times = simulation::linspace(0.0, 2.0, 200);
//! let volts = simulation::simulate_behavior(&cap, 1000.0, 5.0, 25.0, &times).unwrap();
//! assert_eq!(volts.len(), times.len());
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! capsim --capacitance 1e-3 --esr 0.1 --resistance 1000 --voltage 5 simulate --duration 2 > trace.csv
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCapacitorSim } from 'capsim_core';
//!
//! const sim = new WasmCapacitorSim("Electrolytic", 1e-3, 0.1, 1e-6, 0.002);
//! const volts = sim.simulate(1000, 5, 25, times);
//! ```

pub mod capacitor;
pub mod error;
pub mod physics;
pub mod simulation;

// Re-export main types for convenience
pub use capacitor::{describe_capacitor, Capacitor, Label};
pub use error::{CapsimError, Result};
pub use simulation::{energy_efficiency, simulate_behavior, SimulationConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCapacitorSim;

/// Default number of samples in a simulated trace
pub const DEFAULT_POINTS: usize = 200;
