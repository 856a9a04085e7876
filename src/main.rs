//! Capsim - Capacitor Behavior Simulator
//!
//! Simulates charge/discharge cycles of a single capacitor and reports its
//! energy efficiency.
//!
//! # Usage
//!
//! ```bash
//! capsim --name Electrolytic --capacitance 1e-3 --esr 0.1 --leakage 1e-6 \
//!     --resistance 1000 --voltage 5 simulate --duration 2 --points 200 > trace.csv
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` for per-run details.

use std::io::{self, BufWriter, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use capsim_core::{
    capacitor::{describe_capacitor, Capacitor},
    error::{CapsimError, Result},
    simulation::{self, PhaseBoundary, SimulationConfig, REFERENCE_TEMPERATURE},
    DEFAULT_POINTS,
};

/// Capacitor charge/discharge simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Capacitor label
    #[arg(long, default_value = "Capacitor")]
    name: String,

    /// Nominal capacitance at 25°C in farads
    #[arg(short, long, default_value_t = 1e-3)]
    capacitance: f64,

    /// Equivalent series resistance in ohms
    #[arg(long, default_value_t = 0.1)]
    esr: f64,

    /// Leakage conductance in A/V
    #[arg(long, default_value_t = 1e-6)]
    leakage: f64,

    /// Fractional capacitance change per °C
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    temp_coeff: f64,

    /// Series charging resistance in ohms
    #[arg(short, long, default_value_t = 100.0)]
    resistance: f64,

    /// Supply voltage in volts
    #[arg(short, long, default_value_t = 10.0)]
    voltage: f64,

    /// Operating temperature in °C
    #[arg(short, long, default_value_t = REFERENCE_TEMPERATURE, allow_hyphen_values = true)]
    temperature: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the capacitor parameters
    Describe,

    /// Simulate one charge/discharge cycle and print `time,voltage,phase` CSV
    Simulate {
        /// Length of the full cycle in seconds
        #[arg(short, long, default_value_t = 2.0)]
        duration: f64,

        /// Number of evenly spaced samples
        #[arg(short, long, default_value_t = DEFAULT_POINTS)]
        points: usize,

        /// Switch from charge to discharge at this time instead of the midpoint
        #[arg(short, long)]
        boundary: Option<f64>,
    },

    /// Print the open-circuit leakage decay from the supply voltage as CSV
    Hold {
        /// Hold time in seconds
        #[arg(short, long, default_value_t = 3600.0)]
        duration: f64,

        /// Number of evenly spaced samples
        #[arg(short, long, default_value_t = DEFAULT_POINTS)]
        points: usize,
    },

    /// Print the energy breakdown and efficiency
    Efficiency,

    /// Print capacitance across a temperature range as CSV
    SweepTemperature {
        /// Lowest temperature in °C
        #[arg(long, default_value_t = -40.0, allow_hyphen_values = true)]
        from: f64,

        /// Highest temperature in °C
        #[arg(long, default_value_t = 125.0, allow_hyphen_values = true)]
        to: f64,

        /// Number of temperatures
        #[arg(short, long, default_value_t = 20)]
        points: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let capacitor = Capacitor::new(
        &args.name,
        args.capacitance,
        args.esr,
        args.leakage,
        args.temp_coeff,
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Command::Describe => describe_capacitor(&capacitor, &mut out)?,

        Command::Simulate {
            duration,
            points,
            boundary,
        } => {
            if duration <= 0.0 || !duration.is_finite() {
                return Err(CapsimError::invalid_argument(
                    "duration",
                    "must be a positive number of seconds",
                ));
            }
            let config = match boundary {
                Some(t) => SimulationConfig::new().with_phase_boundary(PhaseBoundary::At(t)),
                None => SimulationConfig::new(),
            };
            let times = simulation::linspace(0.0, duration, points);
            let trace = simulation::simulate_trace(
                &capacitor,
                args.resistance,
                args.voltage,
                args.temperature,
                &times,
                &config,
            )?;

            writeln!(out, "time,voltage,phase")?;
            for p in trace {
                writeln!(out, "{:.6e},{:.6e},{}", p.time, p.voltage, p.phase.as_str())?;
            }
        }

        Command::Hold { duration, points } => {
            let times = simulation::linspace(0.0, duration, points);
            let volts = simulation::simulate_hold(&capacitor, args.voltage, &times);

            writeln!(out, "time,voltage")?;
            for (t, v) in times.iter().zip(volts) {
                writeln!(out, "{t:.6e},{v:.6e}")?;
            }
        }

        Command::Efficiency => {
            let b = simulation::energy_breakdown(
                &capacitor,
                args.resistance,
                args.voltage,
                args.temperature,
            )?;

            writeln!(out, "Energy Stored: {:.2} µJ", b.stored * 1e6)?;
            writeln!(out, "ESR Losses: {:.2} µJ", b.esr_loss * 1e6)?;
            writeln!(out, "Leakage Losses: {:.2} µJ", b.leakage_loss * 1e6)?;
            writeln!(out, "Dielectric Losses: {:.2} µJ", b.dielectric_loss * 1e6)?;
            writeln!(out, "Plate Losses: {:.2} µJ", b.plate_loss * 1e6)?;
            writeln!(out, "Self-Discharge Losses: {:.2} µJ", b.self_discharge_loss * 1e6)?;
            writeln!(out, "Total Losses: {:.2} µJ", b.total_losses() * 1e6)?;
            writeln!(out, "Efficiency: {:.1}%", b.efficiency())?;
        }

        Command::SweepTemperature { from, to, points } => {
            let temperatures = simulation::linspace(from, to, points);
            let sweep =
                simulation::temperature_sweep(&capacitor, &temperatures, &SimulationConfig::new());

            writeln!(out, "temperature,capacitance,change_percent")?;
            for p in sweep {
                writeln!(
                    out,
                    "{:.2},{:.6e},{:+.3}",
                    p.temperature, p.capacitance, p.change_percent
                )?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
