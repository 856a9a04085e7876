//! Parameter sweeps built on the single-run functions.

use crate::capacitor::Capacitor;
use crate::error::Result;

use super::behavior::{effective_capacitance, simulate_behavior_with_config};
use super::config::SimulationConfig;
use super::efficiency::energy_breakdown_with_config;

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the endpoint against accumulated rounding
            values[n - 1] = end;
            values
        }
    }
}

/// Capacitance at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperaturePoint {
    /// Temperature in °C
    pub temperature: f64,
    /// Effective capacitance in farads
    pub capacitance: f64,
    /// Change from nominal in percent
    pub change_percent: f64,
}

/// Effective capacitance across a range of temperatures.
pub fn temperature_sweep(
    capacitor: &Capacitor,
    temperatures: &[f64],
    config: &SimulationConfig,
) -> Vec<TemperaturePoint> {
    let nominal = capacitor.capacitance();
    temperatures
        .iter()
        .map(|&temperature| {
            let capacitance = effective_capacitance(capacitor, temperature, config);
            let change_percent = if nominal != 0.0 {
                (capacitance / nominal - 1.0) * 100.0
            } else {
                0.0
            };
            TemperaturePoint {
                temperature,
                capacitance,
                change_percent,
            }
        })
        .collect()
}

/// Efficiency over a resistance × voltage grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyGrid {
    pub resistances: Vec<f64>,
    pub voltages: Vec<f64>,
    /// Row-major: one row per voltage, one column per resistance
    values: Vec<f64>,
}

impl EfficiencyGrid {
    /// Efficiency at `voltages[v]`, `resistances[r]`.
    pub fn get(&self, v: usize, r: usize) -> Option<f64> {
        if v < self.voltages.len() && r < self.resistances.len() {
            self.values.get(v * self.resistances.len() + r).copied()
        } else {
            None
        }
    }

    /// Iterate over rows, one per voltage.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks() panics on zero
        self.values.chunks(self.resistances.len().max(1))
    }

    /// Highest efficiency and its (voltage, resistance) indices.
    pub fn max(&self) -> Option<(usize, usize, f64)> {
        let cols = self.resistances.len();
        self.values
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &e)| match best {
                Some((_, b)) if b >= e => best,
                _ => Some((i, e)),
            })
            .map(|(i, e)| (i / cols, i % cols, e))
    }
}

/// Efficiency of `capacitor` for every combination of resistance and voltage.
pub fn efficiency_landscape(
    capacitor: &Capacitor,
    resistances: &[f64],
    voltages: &[f64],
    temperature: f64,
    config: &SimulationConfig,
) -> Result<EfficiencyGrid> {
    let mut values = Vec::with_capacity(resistances.len() * voltages.len());
    for &v0 in voltages {
        for &r in resistances {
            let breakdown = energy_breakdown_with_config(capacitor, r, v0, temperature, config)?;
            values.push(breakdown.efficiency());
        }
    }
    Ok(EfficiencyGrid {
        resistances: resistances.to_vec(),
        voltages: voltages.to_vec(),
        values,
    })
}

/// One voltage trace per resistance over a shared time sequence.
pub fn voltage_surface(
    capacitor: &Capacitor,
    resistances: &[f64],
    time_sequence: &[f64],
    v0: f64,
    temperature: f64,
    config: &SimulationConfig,
) -> Result<Vec<Vec<f64>>> {
    resistances
        .iter()
        .map(|&r| simulate_behavior_with_config(capacitor, r, v0, temperature, time_sequence, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 2.0, 5), vec![0.0, 0.5, 1.0, 1.5, 2.0]);

        let t = linspace(0.0, 2.0, 200);
        assert_eq!(t.len(), 200);
        assert_eq!(t[199], 2.0);
    }

    #[test]
    fn test_temperature_sweep() {
        let cap = Capacitor::new("Ceramic", 10e-6, 0.01, 1e-9, 0.001);
        let points = temperature_sweep(&cap, &[-15.0, 25.0, 125.0], &SimulationConfig::default());
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[0].change_percent, -4.0, epsilon = 1e-9);
        assert_eq!(points[1].capacitance, 10e-6);
        assert_eq!(points[1].change_percent, 0.0);
        assert_relative_eq!(points[2].capacitance, 11e-6, epsilon = 1e-15);
        assert_relative_eq!(points[2].change_percent, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_efficiency_landscape() {
        let cap = Capacitor::new("Electrolytic", 1e-3, 0.5, 1e-6, 0.0);
        let resistances = [10.0, 100.0, 1000.0];
        let voltages = [5.0, 25.0];
        let grid =
            efficiency_landscape(&cap, &resistances, &voltages, 25.0, &SimulationConfig::default())
                .unwrap();

        assert_eq!(grid.rows().count(), 2);
        assert!(grid.get(2, 0).is_none());
        assert!(grid.get(0, 3).is_none());

        // ESR loss shrinks as the charging resistance grows
        let row: Vec<f64> = grid.rows().next().unwrap().to_vec();
        assert!(row[0] < row[1] && row[1] < row[2]);

        let (_, r, best) = grid.max().unwrap();
        assert_eq!(r, 2);
        let expected = grid.get(0, 2).unwrap().max(grid.get(1, 2).unwrap());
        assert_eq!(best, expected);
    }

    #[test]
    fn test_voltage_surface() {
        let cap = Capacitor::new("Film", 1e-6, 0.01, 0.0, 0.0);
        let times = linspace(0.0, 0.01, 11);
        let surface =
            voltage_surface(&cap, &[1000.0, 2000.0], &times, 5.0, 25.0, &SimulationConfig::default())
                .unwrap();
        assert_eq!(surface.len(), 2);
        assert!(surface.iter().all(|trace| trace.len() == times.len()));
        // A larger resistance charges more slowly
        assert!(surface[1][2] < surface[0][2]);
    }

    #[test]
    fn test_voltage_surface_propagates_errors() {
        let cap = Capacitor::new("Film", 1e-6, 0.01, 0.0, 0.0);
        let result =
            voltage_surface(&cap, &[1000.0, 0.0], &[0.0, 1.0], 5.0, 25.0, &SimulationConfig::default());
        assert!(result.is_err());
    }
}
