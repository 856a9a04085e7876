//! Linear temperature model for capacitance.

/// Capacitance at `temperature`, given `nominal` capacitance at `reference`.
///
/// `temp_coeff` is the fractional change per degree (0.001 = 0.1 %/°C).
#[inline]
pub fn temperature_effect(nominal: f64, temp_coeff: f64, temperature: f64, reference: f64) -> f64 {
    nominal * (1.0 + temp_coeff * (temperature - reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_at_reference() {
        for &coeff in &[-0.015, 0.0, 0.0003, 0.2] {
            assert_eq!(temperature_effect(1e-6, coeff, 25.0, 25.0), 1e-6);
        }
    }

    #[test]
    fn test_linear_drift() {
        // +0.1%/°C, 50°C above reference => +5%
        let c = temperature_effect(100e-6, 0.001, 75.0, 25.0);
        assert_relative_eq!(c, 105e-6, epsilon = 1e-15);

        // Negative coefficient below reference increases capacitance
        let c = temperature_effect(100e-6, -0.002, -15.0, 25.0);
        assert_relative_eq!(c, 108e-6, epsilon = 1e-15);
    }
}
