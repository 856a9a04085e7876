//! Energy storage efficiency estimate.
//!
//! The estimate charges the capacitor for one time constant τ = R·C_eff and
//! compares the energy left in the capacitor with the energy lost along the
//! way:
//!
//! - ESR loss: average charging current `V0 / 2R` dissipated in the ESR for τ
//! - Leakage loss: leakage current at the average voltage `V0 / 2`, times
//!   `V0`, for τ (a conservative bound rather than an integral)
//! - Dielectric, plate/terminal and self-discharge losses as fixed fractions
//!   of the stored energy

use tracing::debug;

use crate::capacitor::Capacitor;
use crate::error::Result;
use crate::physics::{energy_stored, esr_power_loss, time_constant};

use super::behavior::effective_capacitance;
use super::config::SimulationConfig;
use super::validate::{require_finite, require_nonzero};

/// Energy budget of one charge cycle, in joules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyBreakdown {
    pub stored: f64,
    pub esr_loss: f64,
    pub leakage_loss: f64,
    pub dielectric_loss: f64,
    pub plate_loss: f64,
    pub self_discharge_loss: f64,
}

impl EnergyBreakdown {
    /// Sum of every loss term.
    pub fn total_losses(&self) -> f64 {
        self.esr_loss
            + self.leakage_loss
            + self.dielectric_loss
            + self.plate_loss
            + self.self_discharge_loss
    }

    /// Stored energy as a percentage of stored plus lost energy.
    ///
    /// Returns 0 when that sum is not positive.
    pub fn efficiency(&self) -> f64 {
        let total = self.stored + self.total_losses();
        if total > 0.0 {
            self.stored / total * 100.0
        } else {
            0.0
        }
    }
}

/// Efficiency percentage with the default configuration.
pub fn energy_efficiency(
    capacitor: &Capacitor,
    resistance: f64,
    v0: f64,
    temperature: f64,
) -> Result<f64> {
    Ok(energy_breakdown(capacitor, resistance, v0, temperature)?.efficiency())
}

/// Energy budget with the default configuration.
pub fn energy_breakdown(
    capacitor: &Capacitor,
    resistance: f64,
    v0: f64,
    temperature: f64,
) -> Result<EnergyBreakdown> {
    energy_breakdown_with_config(
        capacitor,
        resistance,
        v0,
        temperature,
        &SimulationConfig::default(),
    )
}

/// Energy budget with a custom configuration.
pub fn energy_breakdown_with_config(
    capacitor: &Capacitor,
    resistance: f64,
    v0: f64,
    temperature: f64,
    config: &SimulationConfig,
) -> Result<EnergyBreakdown> {
    // Average charging current divides by R
    require_nonzero("resistance", resistance)?;
    require_finite("v0", v0)?;
    require_finite("temperature", temperature)?;

    let c_eff = effective_capacitance(capacitor, temperature, config);
    let stored = energy_stored(c_eff, v0);
    let tau = time_constant(resistance, c_eff);

    let avg_current = v0 / (2.0 * resistance);
    let esr_loss = esr_power_loss(capacitor.esr(), avg_current) * tau;

    let avg_voltage = v0 / 2.0;
    let leakage_current = capacitor.leakage() * avg_voltage;
    let leakage_loss = leakage_current * v0 * tau;

    let fractions = &config.loss_fractions;
    let breakdown = EnergyBreakdown {
        stored,
        esr_loss,
        leakage_loss,
        dielectric_loss: stored * fractions.dielectric,
        plate_loss: stored * fractions.plate,
        self_discharge_loss: stored * fractions.self_discharge,
    };

    debug!(
        capacitor = capacitor.name().as_str(),
        c_eff,
        tau,
        stored,
        losses = breakdown.total_losses(),
        "computed energy breakdown"
    );

    Ok(breakdown)
}
