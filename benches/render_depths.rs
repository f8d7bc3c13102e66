use criterion::{Criterion, criterion_group, criterion_main};

use curve_explorer::{Base, Fractal, Point};

fn classic_base() -> Base {
    Base::new(vec![
        Point::at(0.05, 0.25),
        Point::at(0.95, -0.25),
        Point::at(1.0, 0.0),
    ])
    .unwrap()
}

fn bench_render_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_depths");

    for max_oom in [12_u32, 16, 18] {
        group.bench_function(format!("sequential_oom_{}", max_oom), |b| {
            b.iter(|| {
                let mut fractal = Fractal::new(classic_base(), max_oom).unwrap();
                while fractal.render_next() {}
                fractal.total_points()
            })
        });

        group.bench_function(format!("parallel_oom_{}", max_oom), |b| {
            b.iter(|| {
                let mut fractal = Fractal::new(classic_base(), max_oom).unwrap();
                while fractal.render_next_parallel() {}
                fractal.total_points()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_depths);
criterion_main!(benches);
