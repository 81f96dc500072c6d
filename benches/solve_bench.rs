//! Solver Benchmark
//!
//! Parsing, differentiation, Jacobian assembly and full solves on small
//! nonlinear systems and a generated polynomial.

use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;
use symb_solve::{EquationSystem, JacobianMatrix, Solver, parse};

// =============================================================================
// Expression Generator
// =============================================================================

/// Polynomial with the roots `1..=n` shifted by a half, expanded as a
/// product so the parser sees nested factors
fn generate_root_product(n: usize) -> String {
    let mut s = String::with_capacity(n * 12);
    for i in 1..=n {
        if i > 1 {
            s.push('*');
        }
        write!(s, "(x - {}.5)", i).unwrap();
    }
    s.push_str(" = 0");
    s
}

/// Two products of `n` binomials each, with no factor in common
fn generate_disjoint_products(n: usize) -> String {
    let chain = |offset: usize| {
        (1..=n)
            .map(|i| format!("(x + {})", i + offset))
            .collect::<Vec<_>>()
            .join(" * ")
    };
    format!("({}) * ({})", chain(0), chain(n))
}

const MIXED: &str = "sin(x)^2 * cos(y) + x^3 / (y + 2) - ln(x^2 + 1) + 3xy";

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse_and_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("expressions");

    group.bench_function("parse_mixed", |b| b.iter(|| parse(black_box(MIXED))));

    let expr = parse(MIXED).unwrap();
    group.bench_function("derive_mixed", |b| {
        b.iter(|| black_box(&expr).derivative(black_box('x')))
    });

    let bindings = [('x', 0.7), ('y', 1.3)];
    group.bench_function("evaluate_mixed", |b| {
        b.iter(|| black_box(&expr).evaluate(black_box(&bindings)))
    });

    // Exponent merging searches every pairing of the two chains
    for n in [4, 6, 8] {
        let text = generate_disjoint_products(n);
        group.bench_function(format!("reduce_long_products_{n}"), |b| {
            b.iter(|| parse(black_box(&text)))
        });
    }

    group.finish();
}

fn bench_systems(c: &mut Criterion) {
    let mut group = c.benchmark_group("systems");

    let circle = ["x^2 + y^2 = 10", "x - y = 4"];
    let system = EquationSystem::parse(&circle).unwrap();
    group.bench_function("jacobian_circle_line", |b| {
        b.iter(|| JacobianMatrix::build(black_box(system.residuals()), system.variables()))
    });

    let solver = Solver::new();
    group.bench_function("solve_circle_line", |b| {
        b.iter(|| solver.solve(black_box(&circle), &[]))
    });

    let transcendental = ["cos(x) = x"];
    group.bench_function("solve_cos_fixed_point", |b| {
        b.iter(|| solver.solve(black_box(&transcendental), &[]))
    });

    let polynomial = [generate_root_product(6)];
    group.sample_size(20);
    group.bench_function("deflate_degree_6", |b| {
        b.iter(|| solver.solve(black_box(&polynomial), &[0.0]))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_and_derive, bench_systems);
criterion_main!(benches);
