//! Closed-form physics kernel.
//!
//! Every function here is a direct evaluation of a textbook equation on
//! plain `f64` values:
//!
//! | Function | Formula |
//! |---|---|
//! | [`charge_voltage`] | `V0 * (1 - e^(-t / RC))` |
//! | [`discharge_voltage`] | `V0 * e^(-t / RC)` |
//! | [`energy_stored`] | `C * V^2 / 2` |
//! | [`esr_power_loss`] | `I^2 * ESR` |
//! | [`temperature_effect`] | `C0 * (1 + alpha * (T - T0))` |
//! | [`leakage_decay`] | `V0 * e^(-leakage * t)` |
//!
//! None of them validate their inputs. A zero time constant divides by zero
//! and the resulting infinity or NaN is returned as-is; negative times and
//! negative component values produce numerically defined results.

mod energy;
mod rc;
mod thermal;

pub use energy::{energy_stored, esr_power_loss};
pub use rc::{charge_voltage, discharge_voltage, leakage_decay, time_constant};
pub use thermal::temperature_effect;
