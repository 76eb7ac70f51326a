//! qsv Circuit Model
//!
//! This crate provides the data structures for describing quantum circuits
//! that the `qsv-sim` engine evaluates. It holds no simulation logic.
//!
//! # Overview
//!
//! A [`Circuit`] is a fixed qubit count plus an append-only, ordered list of
//! [`Instruction`]s. Each instruction is a variant of a closed sum type with
//! typed operands, and every append is validated eagerly: operands must be in
//! range and pairwise distinct, and rotation angles must be finite.
//!
//! # Qubit ordering
//!
//! Qubit 0 is the most significant bit of a computational-basis index. In an
//! `n`-qubit circuit, qubit `q` sits at bit position `n - 1 - q`, so the basis
//! state `|q0 q1 … q(n-1)⟩` has index `q0·2^(n-1) + … + q(n-1)`.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qsv_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.instructions().len(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `I`, `H` | 1 | Identity and Hadamard |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `T` | 1 | Phase gates |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `CX`, `CY`, `CZ`, `CH`, `CS` | 2 | Controlled gates (control, target) |
//! | `Swap` | 2 | SWAP gate |
//! | `Rxx`, `Ryy`, `Rzz` | 2 | Two-qubit Pauli rotations |
//! | `CCX` | 3 | Toffoli (control, control, target) |
//! | `CSwap` | 3 | Fredkin (control, target, target) |
//! | `Measure` | 1 | Measurement marker |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult, QubitFault};
pub use gate::GateKind;
pub use instruction::{Instruction, Operands};
pub use qubit::QubitId;
