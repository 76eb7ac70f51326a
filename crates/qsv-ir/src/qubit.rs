//! Qubit identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a qubit within a circuit.
///
/// Qubit 0 is the most significant bit of a computational-basis index: in an
/// `n`-qubit register, qubit `q` occupies bit position `n - 1 - q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The qubit index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Bit position of this qubit inside a basis index of an `num_qubits`-wide
    /// register.
    ///
    /// The caller must ensure `self.0 < num_qubits`.
    #[inline]
    pub fn bit_position(self, num_qubits: usize) -> usize {
        num_qubits - 1 - self.index()
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl From<QubitId> for usize {
    fn from(id: QubitId) -> Self {
        id.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(0)), "q0");
        assert_eq!(format!("{}", QubitId(12)), "q12");
    }

    #[test]
    fn test_bit_position_is_big_endian() {
        assert_eq!(QubitId(0).bit_position(3), 2);
        assert_eq!(QubitId(1).bit_position(3), 1);
        assert_eq!(QubitId(2).bit_position(3), 0);
    }
}
