//! WASM bindings for Capsim Core.
//!
//! JavaScript-friendly wrappers around the simulation driver, for plotting
//! charge/discharge curves in the browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCapacitorSim } from 'capsim_core';
//!
//! await init();
//!
//! const sim = new WasmCapacitorSim("Electrolytic", 1e-3, 0.1, 1e-6, 0.002);
//! const times = Float64Array.from({ length: 200 }, (_, i) => i * 2 / 199);
//! const volts = sim.simulate(1000, 5, 25, times);
//! const eff = sim.efficiency(1000, 5, 25);
//! ```

use wasm_bindgen::prelude::*;

use crate::capacitor::Capacitor;
use crate::error::CapsimError;
use crate::simulation::{self, PhaseBoundary, SimulationConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: CapsimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible capacitor simulator.
#[wasm_bindgen]
pub struct WasmCapacitorSim {
    capacitor: Capacitor,
    config: SimulationConfig,
}

#[wasm_bindgen]
impl WasmCapacitorSim {
    /// Create a simulator for one capacitor.
    ///
    /// # Arguments
    /// * `name` - Label, truncated to 29 bytes
    /// * `capacitance` - Nominal capacitance in farads
    /// * `esr` - Equivalent series resistance in ohms
    /// * `leakage` - Leakage conductance in A/V
    /// * `temp_coeff` - Fractional capacitance change per °C
    #[wasm_bindgen(constructor)]
    pub fn new(
        name: &str,
        capacitance: f64,
        esr: f64,
        leakage: f64,
        temp_coeff: f64,
    ) -> WasmCapacitorSim {
        WasmCapacitorSim {
            capacitor: Capacitor::new(name, capacitance, esr, leakage, temp_coeff),
            config: SimulationConfig::default(),
        }
    }

    /// Switch from charge to discharge at `t` seconds instead of the midpoint.
    #[wasm_bindgen]
    pub fn set_phase_boundary(&mut self, t: f64) {
        self.config.phase_boundary = PhaseBoundary::At(t);
    }

    /// Restore the midpoint phase boundary.
    #[wasm_bindgen]
    pub fn clear_phase_boundary(&mut self) {
        self.config.phase_boundary = PhaseBoundary::Midpoint;
    }

    /// Voltage at each of `times`.
    ///
    /// # Returns
    /// A new Float64Array, or an error string for degenerate parameters.
    #[wasm_bindgen]
    pub fn simulate(
        &self,
        resistance: f64,
        v0: f64,
        temperature: f64,
        times: &[f64],
    ) -> Result<Vec<f64>, JsValue> {
        simulation::simulate_behavior_with_config(
            &self.capacitor,
            resistance,
            v0,
            temperature,
            times,
            &self.config,
        )
        .map_err(to_js)
    }

    /// Energy efficiency in percent.
    #[wasm_bindgen]
    pub fn efficiency(&self, resistance: f64, v0: f64, temperature: f64) -> Result<f64, JsValue> {
        simulation::energy_breakdown_with_config(
            &self.capacitor,
            resistance,
            v0,
            temperature,
            &self.config,
        )
        .map(|b| b.efficiency())
        .map_err(to_js)
    }

    /// Capacitance at `temperature`.
    #[wasm_bindgen]
    pub fn effective_capacitance(&self, temperature: f64) -> f64 {
        simulation::effective_capacitance(&self.capacitor, temperature, &self.config)
    }

    /// Multi-line parameter description.
    #[wasm_bindgen]
    pub fn describe(&self) -> String {
        self.capacitor.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.capacitor.name().to_string()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
