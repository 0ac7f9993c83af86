//! Benchmarks for state vector operations
//!
//! Gate application, Pauli application, projection and stabilizer state
//! preparation at increasing register sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vecsim_state::{PauliString, StateVector};

fn alternating_pauli(num_qubits: usize) -> PauliString {
    let text: String = (0..num_qubits).map(|q| ['X', 'Y', 'Z'][q % 3]).collect();
    text.parse().unwrap()
}

fn bench_single_qubit_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_gate");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1 << num_qubits;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), num_qubits, |b, &num_qubits| {
            let mut state = StateVector::<f64>::new(num_qubits);
            b.iter(|| {
                state.apply(black_box("H"), &[num_qubits / 2]).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_two_qubit_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit_gate");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1 << num_qubits;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), num_qubits, |b, &num_qubits| {
            let mut state = StateVector::<f64>::uniform(num_qubits);
            b.iter(|| {
                state.apply(black_box("CNOT"), &[0, num_qubits - 1]).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_apply_pauli(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_pauli");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1 << num_qubits;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), num_qubits, |b, &num_qubits| {
            let mut state = StateVector::<f64>::uniform(num_qubits);
            let pauli = alternating_pauli(num_qubits);
            b.iter(|| {
                state.apply_pauli(black_box(&pauli), 0).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1 << num_qubits;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), num_qubits, |b, &num_qubits| {
            let base = StateVector::<f64>::uniform(num_qubits);
            let pauli = alternating_pauli(num_qubits);
            b.iter(|| {
                let mut state = base.clone();
                black_box(state.project(&pauli).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_from_stabilizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_stabilizers");

    for num_qubits in [4, 8, 12].iter() {
        // GHZ generators: X…X followed by adjacent ZZ pairs
        let mut generators = vec![PauliString::parse(&"X".repeat(*num_qubits)).unwrap()];
        for q in 0..num_qubits - 1 {
            let text: String = (0..*num_qubits)
                .map(|k| if k == q || k == q + 1 { 'Z' } else { 'I' })
                .collect();
            generators.push(text.parse().unwrap());
        }

        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), &generators, |b, generators| {
            b.iter(|| black_box(StateVector::<f64>::from_stabilizers(generators).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_qubit_gate,
    bench_two_qubit_gate,
    bench_apply_pauli,
    bench_project,
    bench_from_stabilizers
);
criterion_main!(benches);
