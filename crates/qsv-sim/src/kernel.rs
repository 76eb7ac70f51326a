//! Bit-indexed operator application.
//!
//! A `k`-qubit operator addressed at bit positions `p_1..p_k` is applied
//! without building the full `2^n × 2^n` matrix. Basis indices are split into
//! classes of `2^k` members that agree on every bit except the addressed
//! ones. Inside a class the amplitudes transform by exactly the `k`-qubit
//! matrix; distinct classes never share an index, so they can be processed
//! in any order or concurrently.
//!
//! Each class is handled as gather → local mat-vec → scatter. All members are
//! read before any is written.

use num_complex::Complex64;
use rayon::prelude::*;

use crate::error::{SimError, SimResult};
use crate::operator::GateOperator;

/// Largest number of qubits a single operator may address.
pub const MAX_TARGETS: usize = 3;

/// Upper bound on the contiguous run length used by the parallel kernel.
const MAX_RUN_BITS: usize = 12;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// How a gate is applied to the amplitude array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Walk every class on the calling thread.
    Sequential,
    /// Spread classes over the rayon thread pool.
    Parallel,
}

/// Addressed bit positions of one gate application, in operand order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    /// Bit positions in operand order (first operand = matrix MSB).
    positions: [usize; MAX_TARGETS],
    /// Same positions, ascending.
    sorted: [usize; MAX_TARGETS],
    /// Number of addressed qubits.
    k: usize,
    /// `offsets[b]` is the index delta of class member `b` from the class
    /// representative.
    offsets: [usize; 1 << MAX_TARGETS],
}

impl Targets {
    /// Resolve qubit indices into bit positions of an `num_qubits`-wide
    /// register. Qubit `q` lives at bit `num_qubits - 1 - q`.
    pub fn new(num_qubits: usize, qubits: &[usize]) -> SimResult<Self> {
        let k = qubits.len();
        if k == 0 || k > MAX_TARGETS {
            return Err(SimError::InvalidTargetCount(k));
        }

        let mut positions = [0usize; MAX_TARGETS];
        for (i, &qubit) in qubits.iter().enumerate() {
            if qubit >= num_qubits {
                return Err(SimError::InvalidQubitIndex { qubit, num_qubits });
            }
            if qubits[..i].contains(&qubit) {
                return Err(SimError::DuplicateTarget { qubit });
            }
            positions[i] = num_qubits - 1 - qubit;
        }

        let mut sorted = positions;
        sorted[..k].sort_unstable();

        let mut offsets = [0usize; 1 << MAX_TARGETS];
        for (b, offset) in offsets.iter_mut().enumerate().take(1 << k) {
            *offset = (0..k)
                .filter(|&i| (b >> (k - 1 - i)) & 1 == 1)
                .fold(0, |acc, i| acc | (1 << positions[i]));
        }

        Ok(Self {
            positions,
            sorted,
            k,
            offsets,
        })
    }

    /// Number of addressed qubits.
    #[inline]
    pub fn len(&self) -> usize {
        self.k
    }

    /// Always false: at least one qubit is addressed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.k == 0
    }

    /// Bit positions in operand order.
    pub fn positions(&self) -> &[usize] {
        &self.positions[..self.k]
    }

    /// Members per class, `2^k`.
    #[inline]
    pub fn class_size(&self) -> usize {
        1 << self.k
    }

    /// Bits owned by the addressed qubits.
    pub fn mask(&self) -> usize {
        self.positions().iter().fold(0, |acc, p| acc | (1 << p))
    }

    /// Index deltas of the class members, in matrix order.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets[..self.class_size()]
    }

    /// Class representatives in an array of `len` amplitudes: every index
    /// whose addressed bits are all zero, in increasing order.
    pub fn representatives(&self, len: usize) -> impl Iterator<Item = usize> + '_ {
        (0..len >> self.k).map(move |r| self.insert_zero_bits(r))
    }

    /// Members of the class whose representative is `rep`, in matrix order.
    pub fn class(&self, rep: usize) -> impl Iterator<Item = usize> + '_ {
        self.offsets().iter().map(move |&off| rep | off)
    }

    /// Matrix index of the class member that contains `index`.
    fn local_index(&self, index: usize) -> usize {
        self.positions()
            .iter()
            .fold(0, |b, &p| (b << 1) | ((index >> p) & 1))
    }

    /// Spread `r` over the non-addressed bits, leaving addressed bits zero.
    fn insert_zero_bits(&self, mut r: usize) -> usize {
        for &p in &self.sorted[..self.k] {
            let low = r & ((1 << p) - 1);
            r = ((r >> p) << (p + 1)) | low;
        }
        r
    }
}

/// Apply `op` at `targets` using the chosen strategy.
///
/// `amplitudes.len()` must be a power of two covering every addressed bit.
pub fn apply(
    amplitudes: &mut [Complex64],
    op: &GateOperator,
    targets: &Targets,
    strategy: Strategy,
) -> SimResult<()> {
    if op.num_qubits() != targets.len() {
        return Err(SimError::ArityMismatch {
            expected: op.num_qubits(),
            got: targets.len(),
        });
    }
    match strategy {
        Strategy::Sequential => apply_sequential(amplitudes, op, targets),
        Strategy::Parallel => apply_parallel(amplitudes, op, targets),
    }
    Ok(())
}

/// Gather `2^k` amplitudes, multiply by the operator, return the result.
#[inline]
fn transform(op: &GateOperator, local: &[Complex64]) -> [Complex64; 1 << MAX_TARGETS] {
    let m = op.matrix();
    let dim = local.len();
    let mut out = [ZERO; 1 << MAX_TARGETS];
    for (r, slot) in out.iter_mut().enumerate().take(dim) {
        let mut acc = ZERO;
        for (c, &amp) in local.iter().enumerate() {
            acc += m[[r, c]] * amp;
        }
        *slot = acc;
    }
    out
}

/// Process every class of `amplitudes` on the current thread.
pub fn apply_sequential(amplitudes: &mut [Complex64], op: &GateOperator, targets: &Targets) {
    let dim = targets.class_size();
    let offsets = targets.offsets();
    let mut local = [ZERO; 1 << MAX_TARGETS];

    for rep in targets.representatives(amplitudes.len()) {
        for (slot, &off) in local.iter_mut().zip(offsets) {
            *slot = amplitudes[rep | off];
        }
        let out = transform(op, &local[..dim]);
        for (&value, &off) in out.iter().zip(offsets) {
            amplitudes[rep | off] = value;
        }
    }
}

/// Process classes concurrently.
///
/// If the highest addressed bit leaves enough independent outer blocks, each
/// block (which contains whole classes) goes to one worker. Otherwise the
/// array is cut into runs short enough that the addressed bits are constant
/// inside each run; the `2^k` runs that differ only in addressed bits form a
/// group, and each group goes to one worker. In both cases the pieces are
/// disjoint `&mut` slices, so no two workers can touch the same amplitude.
pub fn apply_parallel(amplitudes: &mut [Complex64], op: &GateOperator, targets: &Targets) {
    let highest = targets.sorted[targets.k - 1];
    let block = 1usize << (highest + 1);
    let blocks = amplitudes.len() / block;

    if blocks >= rayon::current_num_threads() {
        amplitudes
            .par_chunks_mut(block)
            .for_each(|chunk| apply_sequential(chunk, op, targets));
        return;
    }

    let lowest = targets.sorted[0];
    let run = 1usize << lowest.min(MAX_RUN_BITS);
    let dim = targets.class_size();
    let mask = targets.mask();

    let mut runs: Vec<(usize, usize, &mut [Complex64])> = amplitudes
        .chunks_mut(run)
        .enumerate()
        .map(|(i, chunk)| {
            let start = i * run;
            (start & !mask, targets.local_index(start), chunk)
        })
        .collect();
    runs.sort_unstable_by_key(|&(key, b, _)| (key, b));

    // Every key occurs exactly `dim` times, once per member index.
    let mut slices: Vec<&mut [Complex64]> = runs.into_iter().map(|(_, _, chunk)| chunk).collect();

    slices.par_chunks_exact_mut(dim).for_each(|group| {
        let mut local = [ZERO; 1 << MAX_TARGETS];
        for j in 0..run {
            for (slot, member) in local.iter_mut().zip(group.iter()) {
                *slot = member[j];
            }
            let out = transform(op, &local[..dim]);
            for (&value, member) in out.iter().zip(group.iter_mut()) {
                member[j] = value;
            }
        }
    });
}
