//! Prepare Bell and GHZ states and print their amplitudes.
//!
//! Run with: RUST_LOG=qsv_sim=trace cargo run -p qsv-sim --example bell

use qsv_ir::{Circuit, QubitId};
use qsv_sim::{SimResult, Simulator, SimulatorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> SimResult<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "qsv_sim=debug".into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let sim = Simulator::new();

    let bell = Circuit::bell()?;
    println!("Bell state ({} gates, depth {}):", bell.len(), bell.depth());
    print!("{}", sim.run(&bell)?);

    let mut ghz = Circuit::ghz(3)?;
    ghz.measure_all()?;
    println!("\nGHZ state, measurements ignored:");
    for (name, count) in ghz.count_ops() {
        println!("  {name}: {count}");
    }
    print!("{}", sim.run(&ghz)?);

    let config = SimulatorConfig::from_json(r#"{"max_qubits": 20, "parallel_threshold": 2}"#)?;
    let mut rotated = Circuit::new(2)?;
    rotated
        .ry(std::f64::consts::FRAC_PI_3, QubitId(0))?
        .rzz(0.25, QubitId(0), QubitId(1))?;
    let sv = Simulator::with_config(config).run(&rotated)?;
    println!("\nRotated pair, probabilities {:?}", sv.probabilities());

    Ok(())
}
