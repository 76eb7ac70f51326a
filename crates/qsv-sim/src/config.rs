//! Simulator configuration.

use serde::{Deserialize, Serialize};

use crate::error::SimResult;

/// Tunables for [`Simulator`](crate::Simulator).
///
/// Missing fields take their defaults when deserialized, so a partial JSON
/// document such as `{"max_qubits": 20}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Widest circuit `run` will accept. A 28-qubit statevector is 4 GiB.
    pub max_qubits: u32,
    /// Circuits with at least this many qubits use the parallel kernel.
    pub parallel_threshold: u32,
    /// Master switch for the parallel kernel.
    pub parallel: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 28,
            parallel_threshold: 14,
            parallel: true,
        }
    }
}

impl SimulatorConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the qubit limit.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the width from which the parallel kernel is used.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: u32) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enable or disable the parallel kernel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether a circuit of `num_qubits` qubits should use the parallel kernel.
    pub fn uses_parallel(&self, num_qubits: usize) -> bool {
        self.parallel && num_qubits >= self.parallel_threshold as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.max_qubits, 28);
        assert!(config.uses_parallel(14));
        assert!(!config.uses_parallel(13));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulatorConfig::from_json(r#"{"max_qubits": 20}"#).unwrap();
        assert_eq!(config.max_qubits, 20);
        assert_eq!(config.parallel_threshold, 14);
        assert!(config.parallel);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = SimulatorConfig::from_json(r#"{"max_qubits": "lots"}"#).unwrap_err();
        assert!(matches!(err, crate::SimError::Config(_)));
    }

    #[test]
    fn test_parallel_switch() {
        let config = SimulatorConfig::default().with_parallel(false);
        assert!(!config.uses_parallel(27));
    }
}
