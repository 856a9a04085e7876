//! Capacitor parameter record.
//!
//! A [`Capacitor`] holds the static, nominal parameters of a part. It is
//! never mutated after construction: the simulation functions read it and
//! return fresh values.

mod label;

pub use label::{Label, LABEL_CAPACITY};

use std::fmt;
use std::io::Write;

use crate::error::Result;

/// Static description of a capacitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Capacitor {
    name: Label,
    capacitance: f64,
    esr: f64,
    leakage: f64,
    temp_coeff: f64,
}

impl Capacitor {
    /// Create a capacitor.
    ///
    /// # Arguments
    /// * `name` - Identifying label, truncated to [`LABEL_CAPACITY`] bytes
    /// * `capacitance` - Nominal capacitance at 25°C, in farads
    /// * `esr` - Equivalent series resistance, in ohms
    /// * `leakage` - Leakage conductance, in amps per volt
    /// * `temp_coeff` - Fractional capacitance change per °C
    ///
    /// Numeric values are stored verbatim; no range checks are made.
    pub fn new(name: &str, capacitance: f64, esr: f64, leakage: f64, temp_coeff: f64) -> Self {
        if Label::would_truncate(name) {
            tracing::debug!(name, "capacitor name truncated to {} bytes", LABEL_CAPACITY);
        }
        Self {
            name: Label::new(name),
            capacitance,
            esr,
            leakage,
            temp_coeff,
        }
    }

    pub fn name(&self) -> &Label {
        &self.name
    }

    /// Nominal capacitance in farads.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Equivalent series resistance in ohms.
    pub fn esr(&self) -> f64 {
        self.esr
    }

    /// Leakage conductance in A/V.
    pub fn leakage(&self) -> f64 {
        self.leakage
    }

    /// Fractional capacitance change per °C.
    pub fn temp_coeff(&self) -> f64 {
        self.temp_coeff
    }
}

/// Human-readable parameter listing, one field per line.
impl fmt::Display for Capacitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Capacitor: {}", self.name)?;
        writeln!(f, "Capacitance: {} F", scientific(self.capacitance))?;
        writeln!(f, "ESR: {:.3} Ω", self.esr)?;
        writeln!(f, "Leakage: {} A/V", scientific(self.leakage))?;
        writeln!(f, "Temperature Coefficient: {:.3} %/°C", self.temp_coeff)
    }
}

/// Write the description of `capacitor` to `out`.
pub fn describe_capacitor<W: Write>(capacitor: &Capacitor, out: &mut W) -> Result<()> {
    write!(out, "{capacitor}")?;
    Ok(())
}

/// Format with two mantissa decimals and a signed, two-digit exponent
/// (`4.70e-06`), matching C's `%.2e`.
pub(crate) fn scientific(value: f64) -> String {
    let formatted = format!("{value:.2e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => formatted,
        },
        // NaN and infinities have no exponent
        None => formatted,
    }
}
