//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced by the simulation engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qsv_ir::IrError),

    /// A rotation angle is NaN or infinite.
    #[error("Invalid parameter for gate '{gate}': {value} is not a finite angle")]
    InvalidParameter {
        /// Name of the rotation gate.
        gate: &'static str,
        /// The rejected angle.
        value: f64,
    },

    /// An addressed qubit is outside the statevector.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit statevector")]
    InvalidQubitIndex {
        /// The offending qubit index.
        qubit: usize,
        /// Number of qubits in the statevector.
        num_qubits: usize,
    },

    /// The same qubit is addressed twice by one operator.
    #[error("Qubit {qubit} addressed more than once by one operator")]
    DuplicateTarget {
        /// The repeated qubit index.
        qubit: usize,
    },

    /// An operator application addressed no qubits or more than three.
    #[error("Operators address between 1 and 3 qubits, got {0}")]
    InvalidTargetCount(usize),

    /// A statevector was requested over zero qubits, or over too many to index.
    #[error("Cannot build a statevector over {0} qubits")]
    InvalidQubitCount(usize),

    /// Operator size does not match the number of addressed qubits.
    #[error("Operator acts on {expected} qubits but {got} were addressed")]
    ArityMismatch {
        /// Qubits the operator acts on.
        expected: usize,
        /// Qubits supplied by the caller.
        got: usize,
    },

    /// Operator matrix is not a square 2^k × 2^k matrix with k in 1..=3.
    #[error("Operator matrix has shape {rows}x{cols}; expected 2x2, 4x4 or 8x8")]
    InvalidOperatorShape {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Amplitude array length is not a power of two.
    #[error("Statevector length {0} is not a power of two")]
    InvalidStateLength(usize),

    /// Two statevectors of different sizes were combined.
    #[error("Statevector size mismatch: {left} vs {right} qubits")]
    DimensionMismatch {
        /// Qubits on the left-hand side.
        left: usize,
        /// Qubits on the right-hand side.
        right: usize,
    },

    /// Circuit exceeds the configured qubit limit.
    #[error("Circuit has {num_qubits} qubits but the simulator only supports {max_qubits}")]
    CircuitTooLarge {
        /// Qubits in the circuit.
        num_qubits: usize,
        /// Configured limit.
        max_qubits: usize,
    },

    /// Simulator configuration could not be parsed.
    #[error("Invalid simulator configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
