mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use heatmap::prelude::*;

const SIZES: [u32; 3] = [256, 1024, 2048];

fn gradient(interpolation: Interpolation) -> ColorScheme {
    ColorScheme::evenly_spaced(
        &[
            Rgba::new(94, 79, 162, 0),
            Rgba::rgb(50, 136, 189),
            Rgba::rgb(171, 221, 164),
            Rgba::rgb(254, 224, 139),
            Rgba::rgb(244, 109, 67),
            Rgba::rgb(158, 1, 66),
        ],
        interpolation,
    )
    .expect("valid gradient")
}

fn filled_field(size: u32) -> DensityField {
    let mut field = DensityField::new(size, size);
    let stamp = Stamp::linear(size / 32);
    field.add_points_with_stamp(common::gen_points(2_000, size, 0xF1E1D), &stamp);
    field
}

fn render_benches(c: &mut Criterion) {
    for interpolation in [
        Interpolation::Discrete,
        Interpolation::Soft,
        Interpolation::Mixed,
        Interpolation::MixedExp,
    ] {
        let scheme = gradient(interpolation);
        let mut group = c.benchmark_group(format!("render/{interpolation:?}"));

        for &size in &SIZES {
            let field = filled_field(size);
            let mut out = vec![0u8; heatmap::render::buffer_len(&field)];
            group.throughput(common::elements_throughput((size * size) as usize));

            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    render_into(&field, &scheme, &mut out).expect("buffer sized for field");
                    black_box(out[0]);
                });
            });
        }

        group.finish();
    }
}

fn render_saturated_benches(c: &mut Criterion) {
    let scheme = gradient(Interpolation::Mixed);
    let field = filled_field(1024);
    let mut group = c.benchmark_group("render/saturated");
    group.throughput(common::elements_throughput(1024 * 1024));

    for fraction in [0.25f32, 1.0, 4.0] {
        let level = field.max() * fraction;
        group.bench_with_input(BenchmarkId::from_parameter(fraction), &level, |b, &level| {
            b.iter(|| black_box(render_saturated(&field, &scheme, level).len()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = render_benches, render_saturated_benches
}
criterion_main!(benches);
