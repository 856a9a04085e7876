//! RC charge/discharge curves and leakage decay.

/// Time constant τ = R·C in seconds.
#[inline]
pub fn time_constant(resistance: f64, capacitance: f64) -> f64 {
    resistance * capacitance
}

/// Capacitor voltage while charging through `resistance` from 0 V toward `v0`.
///
/// `t` is measured from the start of the charge phase.
#[inline]
pub fn charge_voltage(v0: f64, resistance: f64, capacitance: f64, t: f64) -> f64 {
    let tau = time_constant(resistance, capacitance);
    v0 * (1.0 - (-t / tau).exp())
}

/// Capacitor voltage while discharging through `resistance` from `v0`.
///
/// `t` is measured from the start of the discharge phase.
#[inline]
pub fn discharge_voltage(v0: f64, resistance: f64, capacitance: f64, t: f64) -> f64 {
    let tau = time_constant(resistance, capacitance);
    v0 * (-t / tau).exp()
}

/// Open-circuit voltage decay caused by dielectric leakage.
///
/// This is a simplified model: the leakage coefficient is used directly as
/// the decay rate. The physical solution of `dV/dt = -V / (R_leak * C)`
/// would also divide by the capacitance.
#[inline]
pub fn leakage_decay(v0: f64, leakage: f64, t: f64) -> f64 {
    v0 * (-leakage * t).exp()
}
