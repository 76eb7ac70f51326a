//! Gate operator library: the unitary matrix of every instruction.
//!
//! Matrices act on the addressed qubits only. Row and column index `b` is the
//! joint state of those qubits in operand order, most significant first: for
//! `CCX(c1, c2, t)` index `0b110` means `c1 = 1, c2 = 1, t = 0`. This is the
//! same big-endian convention as the full statevector.

use ndarray::{Array2, arr2, s};
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use qsv_ir::Instruction;

use crate::error::{SimError, SimResult};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// A dense unitary acting on one, two or three qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct GateOperator {
    matrix: Array2<Complex64>,
    num_qubits: usize,
}

impl GateOperator {
    /// Wrap a 2×2, 4×4 or 8×8 matrix.
    ///
    /// Unitarity is not checked here; see [`GateOperator::is_unitary`].
    pub fn from_matrix(matrix: Array2<Complex64>) -> SimResult<Self> {
        let (rows, cols) = matrix.dim();
        let num_qubits = match (rows, cols) {
            (2, 2) => 1,
            (4, 4) => 2,
            (8, 8) => 3,
            _ => return Err(SimError::InvalidOperatorShape { rows, cols }),
        };
        Ok(Self { matrix, num_qubits })
    }

    /// Number of qubits the operator acts on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Matrix dimension, `2^num_qubits`.
    #[inline]
    pub fn dim(&self) -> usize {
        1 << self.num_qubits
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Check `U·U† = I` to within `tol` per entry.
    pub fn is_unitary(&self, tol: f64) -> bool {
        let adjoint = self.matrix.t().mapv(|z| z.conj());
        let product = self.matrix.dot(&adjoint);
        product.indexed_iter().all(|((r, c), z)| {
            let expected = if r == c { ONE } else { ZERO };
            (z - expected).norm() <= tol
        })
    }

    /// Add a control qubit in front of the operand list.
    ///
    /// The result applies `self` to the remaining qubits when the new most
    /// significant qubit is 1, and the identity otherwise.
    pub fn controlled(&self) -> SimResult<Self> {
        let d = self.dim();
        let mut matrix = Array2::eye(2 * d);
        matrix.slice_mut(s![d.., d..]).assign(&self.matrix);
        Self::from_matrix(matrix)
    }

    fn single(m: [[Complex64; 2]; 2]) -> Self {
        Self {
            matrix: arr2(&m),
            num_qubits: 1,
        }
    }

    fn two(m: [[Complex64; 4]; 4]) -> Self {
        Self {
            matrix: arr2(&m),
            num_qubits: 2,
        }
    }

    /// Identity on `num_qubits` qubits with basis states `a` and `b` exchanged.
    fn transposition(num_qubits: usize, a: usize, b: usize) -> Self {
        let mut matrix = Array2::eye(1 << num_qubits);
        matrix[[a, a]] = ZERO;
        matrix[[b, b]] = ZERO;
        matrix[[a, b]] = ONE;
        matrix[[b, a]] = ONE;
        Self { matrix, num_qubits }
    }
}

// =============================================================================
// Single-qubit gates
// =============================================================================

/// Identity.
pub fn identity() -> GateOperator {
    GateOperator::single([[ONE, ZERO], [ZERO, ONE]])
}

/// Hadamard.
pub fn hadamard() -> GateOperator {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    GateOperator::single([[h, h], [h, -h]])
}

/// Pauli-X.
pub fn pauli_x() -> GateOperator {
    GateOperator::single([[ZERO, ONE], [ONE, ZERO]])
}

/// Pauli-Y.
pub fn pauli_y() -> GateOperator {
    GateOperator::single([[ZERO, -I], [I, ZERO]])
}

/// Pauli-Z.
pub fn pauli_z() -> GateOperator {
    GateOperator::single([[ONE, ZERO], [ZERO, -ONE]])
}

/// S = diag(1, i).
pub fn phase_s() -> GateOperator {
    GateOperator::single([[ONE, ZERO], [ZERO, I]])
}

/// T = diag(1, e^{iπ/4}).
pub fn phase_t() -> GateOperator {
    GateOperator::single([[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, FRAC_PI_4)]])
}

fn finite(gate: &'static str, theta: f64) -> SimResult<f64> {
    if theta.is_finite() {
        Ok(theta)
    } else {
        Err(SimError::InvalidParameter { gate, value: theta })
    }
}

/// `RX(θ) = exp(-iθX/2)`.
pub fn rx(theta: f64) -> SimResult<GateOperator> {
    let half = finite("rx", theta)? / 2.0;
    let c = Complex64::new(half.cos(), 0.0);
    let s = Complex64::new(0.0, -half.sin());
    Ok(GateOperator::single([[c, s], [s, c]]))
}

/// `RY(θ) = exp(-iθY/2)`.
pub fn ry(theta: f64) -> SimResult<GateOperator> {
    let half = finite("ry", theta)? / 2.0;
    let c = Complex64::new(half.cos(), 0.0);
    let s = Complex64::new(half.sin(), 0.0);
    Ok(GateOperator::single([[c, -s], [s, c]]))
}

/// `RZ(θ) = exp(-iθZ/2) = diag(e^{-iθ/2}, e^{iθ/2})`.
pub fn rz(theta: f64) -> SimResult<GateOperator> {
    let half = finite("rz", theta)? / 2.0;
    Ok(GateOperator::single([
        [Complex64::from_polar(1.0, -half), ZERO],
        [ZERO, Complex64::from_polar(1.0, half)],
    ]))
}

// =============================================================================
// Two-qubit gates
// =============================================================================

/// CNOT with operands `(control, target)`.
pub fn cx() -> GateOperator {
    GateOperator::transposition(2, 0b10, 0b11)
}

/// CZ = diag(1, 1, 1, -1).
pub fn cz() -> GateOperator {
    GateOperator::two([
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, -ONE],
    ])
}

/// SWAP.
pub fn swap() -> GateOperator {
    GateOperator::transposition(2, 0b01, 0b10)
}

/// Controlled-Y with operands `(control, target)`.
pub fn cy() -> SimResult<GateOperator> {
    pauli_y().controlled()
}

/// Controlled-Hadamard with operands `(control, target)`.
pub fn ch() -> SimResult<GateOperator> {
    hadamard().controlled()
}

/// Controlled-S = diag(1, 1, 1, i).
pub fn cs() -> SimResult<GateOperator> {
    phase_s().controlled()
}

/// `RXX(θ) = exp(-iθ X⊗X / 2)`.
pub fn rxx(theta: f64) -> SimResult<GateOperator> {
    let half = finite("rxx", theta)? / 2.0;
    let c = Complex64::new(half.cos(), 0.0);
    let s = Complex64::new(0.0, -half.sin());
    Ok(GateOperator::two([
        [c, ZERO, ZERO, s],
        [ZERO, c, s, ZERO],
        [ZERO, s, c, ZERO],
        [s, ZERO, ZERO, c],
    ]))
}

/// `RYY(θ) = exp(-iθ Y⊗Y / 2)`.
pub fn ryy(theta: f64) -> SimResult<GateOperator> {
    let half = finite("ryy", theta)? / 2.0;
    let c = Complex64::new(half.cos(), 0.0);
    let s = Complex64::new(0.0, half.sin());
    // Y⊗Y is -1 on |00⟩↔|11⟩ and +1 on |01⟩↔|10⟩.
    Ok(GateOperator::two([
        [c, ZERO, ZERO, s],
        [ZERO, c, -s, ZERO],
        [ZERO, -s, c, ZERO],
        [s, ZERO, ZERO, c],
    ]))
}

/// `RZZ(θ) = exp(-iθ Z⊗Z / 2)`.
pub fn rzz(theta: f64) -> SimResult<GateOperator> {
    let half = finite("rzz", theta)? / 2.0;
    let even = Complex64::from_polar(1.0, -half);
    let odd = Complex64::from_polar(1.0, half);
    Ok(GateOperator::two([
        [even, ZERO, ZERO, ZERO],
        [ZERO, odd, ZERO, ZERO],
        [ZERO, ZERO, odd, ZERO],
        [ZERO, ZERO, ZERO, even],
    ]))
}

// =============================================================================
// Three-qubit gates
// =============================================================================

/// Toffoli with operands `(control1, control2, target)`.
pub fn ccx() -> GateOperator {
    GateOperator::transposition(3, 0b110, 0b111)
}

/// Fredkin with operands `(control, target1, target2)`.
pub fn cswap() -> GateOperator {
    GateOperator::transposition(3, 0b101, 0b110)
}

/// The operator for an instruction, or `None` for measurement.
pub fn for_instruction(instruction: &Instruction) -> SimResult<Option<GateOperator>> {
    let op = match *instruction {
        Instruction::I(_) => identity(),
        Instruction::H(_) => hadamard(),
        Instruction::X(_) => pauli_x(),
        Instruction::Y(_) => pauli_y(),
        Instruction::Z(_) => pauli_z(),
        Instruction::S(_) => phase_s(),
        Instruction::T(_) => phase_t(),
        Instruction::CX { .. } => cx(),
        Instruction::CZ { .. } => cz(),
        Instruction::Swap(..) => swap(),
        Instruction::CY { .. } => cy()?,
        Instruction::CH { .. } => ch()?,
        Instruction::CS { .. } => cs()?,
        Instruction::CCX { .. } => ccx(),
        Instruction::CSwap { .. } => cswap(),
        Instruction::Rx { theta, .. } => rx(theta)?,
        Instruction::Ry { theta, .. } => ry(theta)?,
        Instruction::Rz { theta, .. } => rz(theta)?,
        Instruction::Rxx { theta, .. } => rxx(theta)?,
        Instruction::Ryy { theta, .. } => ryy(theta)?,
        Instruction::Rzz { theta, .. } => rzz(theta)?,
        Instruction::Measure(_) => return Ok(None),
    };
    Ok(Some(op))
}
