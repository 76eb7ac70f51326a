//! Circuit instructions: a gate kind together with its typed operands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::error::{IrError, IrResult, QubitFault};
use crate::gate::GateKind;
use crate::qubit::QubitId;

/// A single circuit instruction.
///
/// Every variant carries exactly the operands its gate needs. Operand order
/// is significant: it fixes which axis of the gate's matrix each qubit maps
/// to (the first operand is the most significant bit of the matrix index).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instruction {
    /// Identity gate.
    I(QubitId),
    /// Hadamard gate.
    H(QubitId),
    /// Pauli-X gate.
    X(QubitId),
    /// Pauli-Y gate.
    Y(QubitId),
    /// Pauli-Z gate.
    Z(QubitId),
    /// S gate.
    S(QubitId),
    /// T gate.
    T(QubitId),

    /// Controlled-X (CNOT) gate.
    CX {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Controlled-Z gate.
    CZ {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// SWAP gate.
    Swap(QubitId, QubitId),
    /// Controlled-Y gate.
    CY {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Controlled-Hadamard gate.
    CH {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Controlled-S gate.
    CS {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },

    /// Toffoli gate.
    CCX {
        /// First control qubit.
        control1: QubitId,
        /// Second control qubit.
        control2: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Fredkin gate.
    CSwap {
        /// Control qubit.
        control: QubitId,
        /// First swapped qubit.
        target1: QubitId,
        /// Second swapped qubit.
        target2: QubitId,
    },

    /// Rotation around X by `theta` radians.
    Rx {
        /// Target qubit.
        qubit: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },
    /// Rotation around Y by `theta` radians.
    Ry {
        /// Target qubit.
        qubit: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },
    /// Rotation around Z by `theta` radians.
    Rz {
        /// Target qubit.
        qubit: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// `exp(-i θ/2 X⊗X)`.
    Rxx {
        /// First qubit.
        qubit1: QubitId,
        /// Second qubit.
        qubit2: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },
    /// `exp(-i θ/2 Y⊗Y)`.
    Ryy {
        /// First qubit.
        qubit1: QubitId,
        /// Second qubit.
        qubit2: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },
    /// `exp(-i θ/2 Z⊗Z)`.
    Rzz {
        /// First qubit.
        qubit1: QubitId,
        /// Second qubit.
        qubit2: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Measurement of one qubit.
    Measure(QubitId),
}

/// The qubits of one instruction, in operand order.
///
/// Instructions address at most three qubits, so this is stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    ids: [QubitId; 3],
    len: usize,
}

impl Operands {
    fn one(q: QubitId) -> Self {
        Self {
            ids: [q, QubitId(0), QubitId(0)],
            len: 1,
        }
    }

    fn two(a: QubitId, b: QubitId) -> Self {
        Self {
            ids: [a, b, QubitId(0)],
            len: 2,
        }
    }

    fn three(a: QubitId, b: QubitId, c: QubitId) -> Self {
        Self {
            ids: [a, b, c],
            len: 3,
        }
    }
}

impl Deref for Operands {
    type Target = [QubitId];

    fn deref(&self) -> &[QubitId] {
        &self.ids[..self.len]
    }
}

impl Instruction {
    /// The operand-free kind of this instruction.
    pub fn kind(&self) -> GateKind {
        match self {
            Instruction::I(_) => GateKind::I,
            Instruction::H(_) => GateKind::H,
            Instruction::X(_) => GateKind::X,
            Instruction::Y(_) => GateKind::Y,
            Instruction::Z(_) => GateKind::Z,
            Instruction::S(_) => GateKind::S,
            Instruction::T(_) => GateKind::T,
            Instruction::CX { .. } => GateKind::CX,
            Instruction::CZ { .. } => GateKind::CZ,
            Instruction::Swap(..) => GateKind::Swap,
            Instruction::CY { .. } => GateKind::CY,
            Instruction::CH { .. } => GateKind::CH,
            Instruction::CS { .. } => GateKind::CS,
            Instruction::CCX { .. } => GateKind::CCX,
            Instruction::CSwap { .. } => GateKind::CSwap,
            Instruction::Rx { .. } => GateKind::Rx,
            Instruction::Ry { .. } => GateKind::Ry,
            Instruction::Rz { .. } => GateKind::Rz,
            Instruction::Rxx { .. } => GateKind::Rxx,
            Instruction::Ryy { .. } => GateKind::Ryy,
            Instruction::Rzz { .. } => GateKind::Rzz,
            Instruction::Measure(_) => GateKind::Measure,
        }
    }

    /// Get the name of this instruction.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Get the number of qubits this instruction addresses.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.kind().num_qubits()
    }

    /// The addressed qubits, in operand order.
    pub fn qubits(&self) -> Operands {
        match *self {
            Instruction::I(q)
            | Instruction::H(q)
            | Instruction::X(q)
            | Instruction::Y(q)
            | Instruction::Z(q)
            | Instruction::S(q)
            | Instruction::T(q)
            | Instruction::Measure(q)
            | Instruction::Rx { qubit: q, .. }
            | Instruction::Ry { qubit: q, .. }
            | Instruction::Rz { qubit: q, .. } => Operands::one(q),

            Instruction::CX { control, target }
            | Instruction::CZ { control, target }
            | Instruction::CY { control, target }
            | Instruction::CH { control, target }
            | Instruction::CS { control, target } => Operands::two(control, target),

            Instruction::Swap(a, b)
            | Instruction::Rxx {
                qubit1: a,
                qubit2: b,
                ..
            }
            | Instruction::Ryy {
                qubit1: a,
                qubit2: b,
                ..
            }
            | Instruction::Rzz {
                qubit1: a,
                qubit2: b,
                ..
            } => Operands::two(a, b),

            Instruction::CCX {
                control1,
                control2,
                target,
            } => Operands::three(control1, control2, target),
            Instruction::CSwap {
                control,
                target1,
                target2,
            } => Operands::three(control, target1, target2),
        }
    }

    /// The rotation angle, for parameterized gates.
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Instruction::Rx { theta, .. }
            | Instruction::Ry { theta, .. }
            | Instruction::Rz { theta, .. }
            | Instruction::Rxx { theta, .. }
            | Instruction::Ryy { theta, .. }
            | Instruction::Rzz { theta, .. } => Some(theta),
            _ => None,
        }
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self, Instruction::Measure(_))
    }

    /// Check that this instruction is well-formed for a circuit of
    /// `num_qubits` qubits.
    ///
    /// Operands must be in range and pairwise distinct, and any angle must be
    /// finite.
    pub fn validate(&self, num_qubits: u32) -> IrResult<()> {
        let gate = self.name();
        let qubits = self.qubits();

        for (i, &qubit) in qubits.iter().enumerate() {
            if qubit.0 >= num_qubits {
                return Err(IrError::InvalidQubitIndex {
                    qubit,
                    gate,
                    fault: QubitFault::OutOfRange { num_qubits },
                });
            }
            if qubits[..i].contains(&qubit) {
                return Err(IrError::InvalidQubitIndex {
                    qubit,
                    gate,
                    fault: QubitFault::Duplicate,
                });
            }
        }

        if let Some(theta) = self.angle() {
            if !theta.is_finite() {
                return Err(IrError::InvalidParameter { gate, value: theta });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(theta) = self.angle() {
            write!(f, "({theta})")?;
        }
        for (i, q) in self.qubits().iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{q}")?;
        }
        Ok(())
    }
}
