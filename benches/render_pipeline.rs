use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use escape_explorer::{
    BackendKind, ExplorerConfig, FractalEngine, FractalKind, NavigationCommand, RayonBackend,
    SerialBackend, StepBackend,
};

const RESOLUTIONS: [u32; 3] = [100, 300, 500];

fn engine_at<B: StepBackend>(backend: B, resolution: u32) -> FractalEngine<B> {
    let config = ExplorerConfig::default();
    let mut viewport = config
        .initial_viewport(FractalKind::Mandelbrot, BackendKind::Serial)
        .unwrap();
    viewport.apply(NavigationCommand::Resize(resolution as i32 - viewport.resolution() as i32));

    FractalEngine::new(backend, viewport, config.batch_steps, config.escape_threshold)
}

fn bench_step_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_batch");

    for resolution in RESOLUTIONS {
        group.bench_with_input(
            BenchmarkId::new("serial", resolution),
            &resolution,
            |b, &resolution| {
                let mut engine = engine_at(SerialBackend, resolution);
                engine.prepare();
                b.iter(|| engine.run_batch())
            },
        );

        group.bench_with_input(
            BenchmarkId::new("rayon", resolution),
            &resolution,
            |b, &resolution| {
                let mut engine = engine_at(RayonBackend, resolution);
                engine.prepare();
                b.iter(|| engine.run_batch())
            },
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for resolution in RESOLUTIONS {
        let mut engine = engine_at(RayonBackend, resolution);
        engine.run_steps(200);

        group.bench_with_input(
            BenchmarkId::new("grayscale", resolution),
            &engine,
            |b, engine| b.iter(|| black_box(engine.render().unwrap())),
        );

        engine.navigate(NavigationCommand::ToggleColourMode);

        group.bench_with_input(
            BenchmarkId::new("false_colour", resolution),
            &engine,
            |b, engine| b.iter(|| black_box(engine.render().unwrap())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_step_batch, bench_render);
criterion_main!(benches);
