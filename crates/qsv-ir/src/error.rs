//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Why a qubit operand was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QubitFault {
    /// The index is not below the circuit's qubit count.
    OutOfRange {
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },
    /// The same qubit appears more than once in one instruction.
    Duplicate,
}

impl std::fmt::Display for QubitFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QubitFault::OutOfRange { num_qubits } => {
                write!(f, "out of range for a {num_qubits}-qubit circuit")
            }
            QubitFault::Duplicate => write!(f, "used more than once"),
        }
    }
}

/// Errors that can occur while building a circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A circuit must have at least one qubit.
    #[error("Invalid circuit dimension: {num_qubits} qubits (need at least 1)")]
    InvalidDimension {
        /// The rejected qubit count.
        num_qubits: u32,
    },

    /// An operand is out of range, or repeated within a multi-qubit gate.
    #[error("Invalid qubit {qubit} for gate '{gate}': {fault}")]
    InvalidQubitIndex {
        /// The offending operand.
        qubit: QubitId,
        /// Name of the gate being appended.
        gate: &'static str,
        /// What is wrong with the operand.
        fault: QubitFault,
    },

    /// A rotation angle is NaN or infinite.
    #[error("Invalid parameter for gate '{gate}': {value} is not a finite angle")]
    InvalidParameter {
        /// Name of the rotation gate.
        gate: &'static str,
        /// The rejected angle.
        value: f64,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
