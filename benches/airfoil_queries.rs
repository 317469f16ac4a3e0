use criterion::{black_box, criterion_group, criterion_main, Criterion};

use airfoils_rs::airfoil::Airfoil;
use airfoils_rs::algorithms::linspace;

fn benchmark(c: &mut Criterion) {
    let first = Airfoil::naca4("4412", 200).expect("Failed to generate first airfoil");
    let second = Airfoil::naca4("0012", 200).expect("Failed to generate second airfoil");
    let xsi = linspace(0.0, 1.0, 500);

    c.bench_function("Interpolate Surfaces", |b| {
        b.iter(|| first.interpolate_y_many(black_box(&xsi)))
    });

    c.bench_function("Camber Line Angles", |b| {
        b.iter(|| first.camber_line_angles(black_box(&xsi)))
    });

    c.bench_function("Morph Airfoils", |b| {
        b.iter(|| Airfoil::morph_between(black_box(&first), black_box(&second), 0.5, 200))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
