//! Stored energy and resistive loss.

/// Energy in joules stored at voltage `v`.
#[inline]
pub fn energy_stored(capacitance: f64, v: f64) -> f64 {
    0.5 * capacitance * v * v
}

/// Instantaneous power in watts dissipated in the series resistance.
#[inline]
pub fn esr_power_loss(esr: f64, current: f64) -> f64 {
    current * current * esr
}
