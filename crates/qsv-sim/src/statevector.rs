//! Dense statevector.

use std::fmt;

use num_complex::Complex64;

use crate::error::{SimError, SimResult};
use crate::kernel::{self, Strategy, Targets};
use crate::operator::GateOperator;

/// A statevector representing a quantum state.
///
/// Amplitude `i` belongs to the basis state whose big-endian bitstring is `i`:
/// qubit 0 is the most significant bit.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// Fails with [`SimError::InvalidQubitCount`] for zero qubits or for a
    /// width whose `2^n` does not fit in `usize`.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        if num_qubits == 0 || num_qubits >= usize::BITS as usize {
            return Err(SimError::InvalidQubitCount(num_qubits));
        }
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Wrap an existing amplitude array. The length must be `2^n` with `n ≥ 1`.
    ///
    /// The amplitudes are taken as given; no normalization is applied.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> SimResult<Self> {
        let len = amplitudes.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(SimError::InvalidStateLength(len));
        }
        Ok(Self {
            num_qubits: len.trailing_zeros() as usize,
            amplitudes,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes, `2^n`.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false: a statevector has at least two amplitudes.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// All amplitudes in basis-index order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of one basis state, or `None` if `index >= 2^n`.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Consume the statevector and return its amplitudes.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Measurement probabilities `|a_i|²` of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Euclidean 2-norm.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(Complex64::norm_sqr)
            .sum::<f64>()
            .sqrt()
    }

    /// `⟨self|other⟩`, conjugating `self`.
    pub fn inner_product(&self, other: &Self) -> SimResult<Complex64> {
        if self.num_qubits != other.num_qubits {
            return Err(SimError::DimensionMismatch {
                left: self.num_qubits,
                right: other.num_qubits,
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// Apply `op` to the given qubits, in operand order, on the calling thread.
    pub fn apply(&mut self, op: &GateOperator, qubits: &[usize]) -> SimResult<()> {
        self.apply_with(op, qubits, Strategy::Sequential)
    }

    /// Apply `op` to the given qubits with an explicit kernel strategy.
    ///
    /// Both strategies produce bit-identical amplitudes.
    pub fn apply_with(
        &mut self,
        op: &GateOperator,
        qubits: &[usize],
        strategy: Strategy,
    ) -> SimResult<()> {
        let targets = Targets::new(self.num_qubits, qubits)?;
        kernel::apply(&mut self.amplitudes, op, &targets, strategy)
    }
}

impl fmt::Display for Statevector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.num_qubits;
        for (index, amp) in self.amplitudes.iter().enumerate() {
            writeln!(f, "|{index:0width$b}⟩: {amp}")?;
        }
        Ok(())
    }
}
