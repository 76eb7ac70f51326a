//! qsv Statevector Simulator
//!
//! This crate evaluates [`qsv_ir::Circuit`]s by evolving a dense vector of
//! `2^n` complex amplitudes. The result is exact and deterministic: there is
//! no sampling, and measurement instructions leave the state untouched.
//!
//! # Features
//!
//! - **No full operators**: a `k`-qubit gate touches the state one class of
//!   `2^k` amplitudes at a time, never a `2^n × 2^n` matrix
//! - **Parallel kernel**: wide circuits spread classes over `rayon` workers
//!   with disjoint `&mut` borrows and identical results
//! - **Any qubit positions**: operands need not be adjacent or ordered
//!
//! # Memory
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | 16 KiB |
//! | 20 | 16 MiB |
//! | 25 | 512 MiB |
//! | 28 | 4 GiB (default limit) |
//!
//! # Example
//!
//! ```rust
//! use qsv_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let sv = qsv_sim::run(&circuit).unwrap();
//!
//! // (|00⟩ + |11⟩)/√2
//! let probs = sv.probabilities();
//! assert!((probs[0b00] - 0.5).abs() < 1e-12);
//! assert!((probs[0b11] - 0.5).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod kernel;
pub mod operator;
pub mod simulator;
pub mod statevector;

pub use config::SimulatorConfig;
pub use error::{SimError, SimResult};
pub use kernel::Strategy;
pub use operator::GateOperator;
pub use simulator::Simulator;
pub use statevector::Statevector;

use qsv_ir::Circuit;

/// Run `circuit` with the default configuration.
pub fn run(circuit: &Circuit) -> SimResult<Statevector> {
    Simulator::new().run(circuit)
}
