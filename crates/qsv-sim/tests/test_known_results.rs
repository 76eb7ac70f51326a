//! Tests for end-to-end circuit evaluation against hand-computed states.

use num_complex::Complex64;
use qsv_ir::{Circuit, QubitId};
use qsv_sim::{SimError, Simulator, SimulatorConfig, Statevector};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

const EPSILON: f64 = 1e-10;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn assert_state(sv: &Statevector, expected: &[Complex64]) {
    assert_eq!(sv.len(), expected.len());
    for (i, (got, want)) in sv.amplitudes().iter().zip(expected).enumerate() {
        assert!(
            (got - want).norm() < EPSILON,
            "amplitude {i}: got {got}, want {want}"
        );
    }
}

/// State with amplitude 1 at `index` and 0 elsewhere.
fn basis(num_qubits: usize, index: usize) -> Vec<Complex64> {
    let mut v = vec![c(0.0, 0.0); 1 << num_qubits];
    v[index] = c(1.0, 0.0);
    v
}

fn q(i: u32) -> QubitId {
    QubitId(i)
}

// ---------------------------------------------------------------------------
// Single-qubit gates
// ---------------------------------------------------------------------------

#[test]
fn hadamard_on_zero() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.h(q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &[c(FRAC_1_SQRT_2, 0.0), c(FRAC_1_SQRT_2, 0.0)]);
}

#[test]
fn x_on_zero() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.x(q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &[c(0.0, 0.0), c(1.0, 0.0)]);
}

#[test]
fn rz_pi_on_zero() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.rz(PI, q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    // exp(-iπ/2) = -i
    assert_state(&sv, &[c(0.0, -1.0), c(0.0, 0.0)]);
}

#[test]
fn rx_pi_on_zero() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.rx(PI, q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &[c(0.0, 0.0), c(0.0, -1.0)]);
}

#[test]
fn ry_half_pi_on_zero() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.ry(FRAC_PI_2, q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &[c(FRAC_1_SQRT_2, 0.0), c(FRAC_1_SQRT_2, 0.0)]);
}

#[test]
fn y_s_t_phases() {
    // Y|0⟩ = i|1⟩, then S and T multiply |1⟩ by i and e^{iπ/4}.
    let mut circuit = Circuit::new(1).unwrap();
    circuit.y(q(0)).unwrap().s(q(0)).unwrap().t(q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    let phase = c(0.0, 1.0) * c(0.0, 1.0) * Complex64::from_polar(1.0, PI / 4.0);
    assert_state(&sv, &[c(0.0, 0.0), phase]);
}

#[test]
fn identity_circuit_is_ground_state() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit.i(q(1)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(3, 0));

    let empty = Circuit::new(3).unwrap();
    assert_eq!(qsv_sim::run(&empty).unwrap(), Statevector::new(3).unwrap());
}

#[test]
fn qubit_zero_is_most_significant() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit.x(q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(3, 0b100));
}

// ---------------------------------------------------------------------------
// Two-qubit gates
// ---------------------------------------------------------------------------

#[test]
fn bell_state() {
    let sv = qsv_sim::run(&Circuit::bell().unwrap()).unwrap();
    assert_state(
        &sv,
        &[
            c(FRAC_1_SQRT_2, 0.0),
            c(0.0, 0.0),
            c(0.0, 0.0),
            c(FRAC_1_SQRT_2, 0.0),
        ],
    );
}

#[test]
fn cnot_with_control_below_target() {
    // X(2) gives |001⟩; CX(2, 0) flips qubit 0 to give |101⟩.
    let mut circuit = Circuit::new(3).unwrap();
    circuit.x(q(2)).unwrap().cx(q(2), q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(3, 0b101));
}

#[test]
fn cnot_with_control_zero_does_nothing() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.x(q(1)).unwrap().cx(q(0), q(1)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(2, 0b01));
}

#[test]
fn swap_moves_excitation() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.x(q(0)).unwrap().swap(q(0), q(1)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(2, 0b01));
}

#[test]
fn cz_phases_only_eleven() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.h(q(0)).unwrap().h(q(1)).unwrap().cz(q(0), q(1)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &[c(0.5, 0.0), c(0.5, 0.0), c(0.5, 0.0), c(-0.5, 0.0)]);
}

#[test]
fn cy_ch_cs_act_on_target() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit.x(q(0)).unwrap().cy(q(0), q(1)).unwrap();
    assert_state(&qsv_sim::run(&circuit).unwrap(), &[
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 1.0),
    ]);

    let mut circuit = Circuit::new(2).unwrap();
    circuit.x(q(1)).unwrap().ch(q(1), q(0)).unwrap();
    assert_state(&qsv_sim::run(&circuit).unwrap(), &[
        c(0.0, 0.0),
        c(FRAC_1_SQRT_2, 0.0),
        c(0.0, 0.0),
        c(FRAC_1_SQRT_2, 0.0),
    ]);

    let mut circuit = Circuit::new(2).unwrap();
    circuit.x(q(0)).unwrap().x(q(1)).unwrap().cs(q(0), q(1)).unwrap();
    assert_state(&qsv_sim::run(&circuit).unwrap(), &[
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 0.0),
        c(0.0, 1.0),
    ]);
}

#[test]
fn rxx_pi_entangles_fully() {
    // exp(-iπ/2 X⊗X)|00⟩ = -i|11⟩
    let mut circuit = Circuit::new(2).unwrap();
    circuit.rxx(PI, q(0), q(1)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, -1.0)]);
}

#[test]
fn ryy_pi_on_zero() {
    // Y⊗Y|00⟩ = -|11⟩, so exp(-iπ/2 Y⊗Y)|00⟩ = i|11⟩
    let mut circuit = Circuit::new(2).unwrap();
    circuit.ryy(PI, q(0), q(1)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &[c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)]);
}

#[test]
fn rzz_is_a_parity_phase() {
    let theta = 0.7;
    let mut circuit = Circuit::new(2).unwrap();
    circuit.x(q(1)).unwrap().rzz(theta, q(0), q(1)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    let mut expected = basis(2, 0b01);
    expected[1] = Complex64::from_polar(1.0, theta / 2.0);
    assert_state(&sv, &expected);
}

// ---------------------------------------------------------------------------
// Three-qubit gates
// ---------------------------------------------------------------------------

#[test]
fn ccx_flips_target_when_both_controls_set() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit
        .x(q(0))
        .unwrap()
        .x(q(1))
        .unwrap()
        .ccx(q(0), q(1), q(2))
        .unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(3, 0b111));
}

#[test]
fn ccx_needs_both_controls() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit.x(q(0)).unwrap().ccx(q(0), q(1), q(2)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(3, 0b100));
}

#[test]
fn ccx_with_scattered_operands() {
    // Controls on qubits 4 and 1, target on qubit 2 of a 5-qubit register.
    let mut circuit = Circuit::new(5).unwrap();
    circuit
        .x(q(4))
        .unwrap()
        .x(q(1))
        .unwrap()
        .ccx(q(4), q(1), q(2))
        .unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(5, 0b01101));
}

#[test]
fn cswap_exchanges_targets_when_control_set() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit
        .x(q(0))
        .unwrap()
        .x(q(1))
        .unwrap()
        .cswap(q(0), q(1), q(2))
        .unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &basis(3, 0b101));
}

// ---------------------------------------------------------------------------
// Engine behaviour
// ---------------------------------------------------------------------------

#[test]
fn ghz_has_two_branches() {
    let sv = qsv_sim::run(&Circuit::ghz(5).unwrap()).unwrap();
    let probs = sv.probabilities();
    assert!((probs[0] - 0.5).abs() < EPSILON);
    assert!((probs[31] - 0.5).abs() < EPSILON);
    assert!((sv.norm() - 1.0).abs() < EPSILON);
}

#[test]
fn measurement_does_not_collapse() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.h(q(0)).unwrap().measure(q(0)).unwrap();
    let sv = qsv_sim::run(&circuit).unwrap();
    assert_state(&sv, &[c(FRAC_1_SQRT_2, 0.0), c(FRAC_1_SQRT_2, 0.0)]);
}

#[test]
fn too_large_circuit_is_rejected_before_allocation() {
    let sim = Simulator::with_config(SimulatorConfig::default().with_max_qubits(4));
    let err = sim.run(&Circuit::ghz(8).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        SimError::CircuitTooLarge {
            num_qubits: 8,
            max_qubits: 4
        }
    ));
    assert!(err.to_string().contains("8 qubits"));
}

#[test]
fn config_from_json_drives_kernel_choice() {
    let config = SimulatorConfig::from_json(r#"{"parallel_threshold": 1}"#).unwrap();
    assert!(config.uses_parallel(1));

    let parallel = Simulator::with_config(config);
    let sequential = Simulator::with_config(SimulatorConfig::default().with_parallel(false));
    let circuit = Circuit::ghz(6).unwrap();
    assert_eq!(
        parallel.run(&circuit).unwrap(),
        sequential.run(&circuit).unwrap()
    );
}
