//! Gate kinds, independent of operands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of an instruction, without its qubits or angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    // Single-qubit gates
    /// Identity gate.
    I,
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Hadamard gate.
    CH,
    /// Controlled-S gate.
    CS,

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
    /// Fredkin gate (CSWAP).
    CSwap,

    // Rotations
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,
    /// XX rotation gate.
    Rxx,
    /// YY rotation gate.
    Ryy,
    /// ZZ rotation gate.
    Rzz,

    /// Measurement. Leaves the statevector untouched.
    Measure,
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::I => "id",
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::T => "t",
            GateKind::CX => "cx",
            GateKind::CZ => "cz",
            GateKind::Swap => "swap",
            GateKind::CY => "cy",
            GateKind::CH => "ch",
            GateKind::CS => "cs",
            GateKind::CCX => "ccx",
            GateKind::CSwap => "cswap",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
            GateKind::Rxx => "rxx",
            GateKind::Ryy => "ryy",
            GateKind::Rzz => "rzz",
            GateKind::Measure => "measure",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(self) -> usize {
        match self {
            GateKind::I
            | GateKind::H
            | GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::T
            | GateKind::Rx
            | GateKind::Ry
            | GateKind::Rz
            | GateKind::Measure => 1,

            GateKind::CX
            | GateKind::CZ
            | GateKind::Swap
            | GateKind::CY
            | GateKind::CH
            | GateKind::CS
            | GateKind::Rxx
            | GateKind::Ryy
            | GateKind::Rzz => 2,

            GateKind::CCX | GateKind::CSwap => 3,
        }
    }

    /// Check if this gate takes a rotation angle.
    pub fn is_parameterized(self) -> bool {
        matches!(
            self,
            GateKind::Rx
                | GateKind::Ry
                | GateKind::Rz
                | GateKind::Rxx
                | GateKind::Ryy
                | GateKind::Rzz
        )
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
