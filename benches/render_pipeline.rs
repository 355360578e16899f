use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use fractal_zoom::controllers::capture::CapturePipeline;
use fractal_zoom::controllers::session::FrameRenderer;
use fractal_zoom::core::data::{Complex, ComplexRect, Resolution};
use fractal_zoom::presenters::cpu::CpuRenderer;

fn default_region() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).expect("valid region")
}

fn bench_render(c: &mut Criterion) {
    let resolution = Resolution::new(800, 600).expect("valid resolution");
    let region = default_region();

    let mut group = c.benchmark_group("render_pipeline");
    group.sample_size(20);

    group.bench_function("cpu_render_800x600", |b| {
        let mut renderer = CpuRenderer::new(resolution, 256);
        b.iter(|| renderer.render(black_box(&region)).expect("render"));
    });

    group.bench_function("capture_submit_800x600", |b| {
        let mut renderer = CpuRenderer::new(resolution, 64);
        renderer.render(&region).expect("render");
        b.iter_batched(
            || CapturePipeline::with_writer(std::io::sink(), resolution),
            |mut pipeline| {
                for _ in 0..10 {
                    pipeline.submit_frame(renderer.frame()).expect("submit");
                }
                black_box(pipeline.stop())
            },
            BatchSize::PerIteration,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
