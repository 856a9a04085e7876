//! Simulation configuration.

/// Reference temperature for nominal capacitance, in °C.
pub const REFERENCE_TEMPERATURE: f64 = 25.0;

/// Where a run switches from charging to discharging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PhaseBoundary {
    /// Half of the last time sample.
    ///
    /// Assumes the time sequence is ascending and spans exactly one full
    /// charge + discharge cycle starting at zero.
    #[default]
    Midpoint,
    /// An explicit switch-over time in seconds.
    At(f64),
}

impl PhaseBoundary {
    /// Resolve the boundary time for a time sequence.
    ///
    /// Returns `None` for an empty sequence when the boundary is implicit.
    pub fn resolve(&self, time_sequence: &[f64]) -> Option<f64> {
        match *self {
            PhaseBoundary::Midpoint => time_sequence.last().map(|&last| last / 2.0),
            PhaseBoundary::At(t) => Some(t),
        }
    }
}

/// Fixed losses expressed as fractions of stored energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossFractions {
    /// Dielectric absorption/heating (default 3%)
    pub dielectric: f64,
    /// Plate and terminal resistance (default 5%)
    pub plate: f64,
    /// Self-discharge over the charge period (default 2%)
    pub self_discharge: f64,
}

impl Default for LossFractions {
    fn default() -> Self {
        Self {
            dielectric: 0.03,
            plate: 0.05,
            self_discharge: 0.02,
        }
    }
}

impl LossFractions {
    /// Sum of all fractions.
    pub fn total(&self) -> f64 {
        self.dielectric + self.plate + self.self_discharge
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Temperature at which the nominal capacitance is specified (°C).
    pub reference_temperature: f64,
    /// Charge/discharge switch-over rule.
    pub phase_boundary: PhaseBoundary,
    /// Fixed fractional losses used by the efficiency estimate.
    pub loss_fractions: LossFractions,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            reference_temperature: REFERENCE_TEMPERATURE,
            phase_boundary: PhaseBoundary::default(),
            loss_fractions: LossFractions::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference temperature (in °C).
    pub fn with_reference_temperature(mut self, reference_temperature: f64) -> Self {
        self.reference_temperature = reference_temperature;
        self
    }

    /// Set the phase boundary rule.
    pub fn with_phase_boundary(mut self, phase_boundary: PhaseBoundary) -> Self {
        self.phase_boundary = phase_boundary;
        self
    }

    /// Set the fixed loss fractions.
    pub fn with_loss_fractions(mut self, loss_fractions: LossFractions) -> Self {
        self.loss_fractions = loss_fractions;
        self
    }
}
