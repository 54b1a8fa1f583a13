use criterion::{criterion_group, criterion_main, Criterion};
use edgefirst_mirror::{
    backend::ipu::build_task,
    display::{DisplaySurface, PixelFormat},
    scaler::aspect_fit,
};
use std::hint::black_box;

pub fn benchmark_scaler(c: &mut Criterion) {
    let dims = [
        (320, 240),
        (800, 480),
        (1024, 600),
        (1280, 720),
        (1920, 1080),
        (3840, 2160),
    ];

    let mut group = c.benchmark_group("aspect_fit");
    for src_dim in dims.iter() {
        for dst_dim in dims.iter() {
            group.bench_function(
                format!("{}x{}-{}x{}", src_dim.0, src_dim.1, dst_dim.0, dst_dim.1),
                |b| {
                    b.iter(|| {
                        aspect_fit(
                            black_box(src_dim.0),
                            black_box(src_dim.1),
                            black_box(dst_dim.0),
                            black_box(dst_dim.1),
                        )
                    })
                },
            );
        }
    }
    group.finish();

    let src = DisplaySurface::new(800, 480, 0x2000_0000, PixelFormat::Bgra32);
    let dst = DisplaySurface::new(1920, 1080, 0x3000_0000, PixelFormat::Bgra32);
    let region = aspect_fit(src.width, src.height, dst.width, dst.height);
    c.bench_function("ipu/build_task", |b| {
        b.iter(|| build_task(black_box(&src), black_box(&dst), black_box(&region)))
    });
}

criterion_group!(benches, benchmark_scaler);
criterion_main!(benches);
