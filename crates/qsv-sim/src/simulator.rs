//! Circuit evaluation.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use qsv_ir::Circuit;

use crate::config::SimulatorConfig;
use crate::error::{SimError, SimResult};
use crate::kernel::Strategy;
use crate::operator;
use crate::statevector::Statevector;

/// Statevector simulator.
///
/// Replays a circuit's instructions in order against a fresh |0…0⟩ state.
/// Every call to [`Simulator::run`] owns its own amplitude array, so one
/// simulator can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with a custom configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Evaluate `circuit` and return the final statevector.
    ///
    /// Measurements leave the state untouched. Fails with
    /// [`SimError::CircuitTooLarge`] before allocating if the circuit is wider
    /// than `max_qubits`.
    #[instrument(skip(self, circuit), fields(num_qubits = circuit.num_qubits(), instructions = circuit.len()))]
    pub fn run(&self, circuit: &Circuit) -> SimResult<Statevector> {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits();

        let max_qubits = (self.config.max_qubits as usize).min(usize::BITS as usize - 1);
        if num_qubits > max_qubits {
            return Err(SimError::CircuitTooLarge {
                num_qubits,
                max_qubits,
            });
        }

        let strategy = if self.config.uses_parallel(num_qubits) {
            Strategy::Parallel
        } else {
            Strategy::Sequential
        };
        debug!(
            "Starting simulation: {} qubits, {} instructions, {:?} kernel",
            num_qubits,
            circuit.len(),
            strategy
        );

        let mut sv = Statevector::new(num_qubits)?;
        let mut applied = 0usize;

        for inst in circuit {
            let Some(op) = operator::for_instruction(inst)? else {
                trace!("Skipping {}", inst);
                continue;
            };
            let mut qubits = [0usize; 3];
            let operands = inst.qubits();
            for (slot, q) in qubits.iter_mut().zip(operands.iter()) {
                *slot = q.index();
            }
            sv.apply_with(&op, &qubits[..operands.len()], strategy)?;
            applied += 1;
            trace!("Applied {}", inst);
        }

        let elapsed = start.elapsed();
        debug!(
            "Simulation completed in {:?}: {} gates applied",
            elapsed, applied
        );

        Ok(sv)
    }
}
