use criterion::{Criterion, criterion_group, criterion_main};
use photo_timeline::api::{TimelineStyle, build_timeline_frame};
use photo_timeline::core::{Catalog, Geometry, TimelineEntry, Viewport};
use photo_timeline::interaction::{NavigationCommand, NavigationController, NavigationTuning};
use std::hint::black_box;

fn sample_catalog(count: i64) -> Catalog {
    Catalog::from_entries(
        (0..count)
            .map(|i| TimelineEntry::new(format!("IMG_{i:05}.jpg"), 1_600_000_000 + i * 37))
            .collect(),
    )
}

fn bench_map_to_pixel(c: &mut Criterion) {
    let viewport = Viewport::new(1_600_000_000.0, 1_600_370_000.0).expect("valid viewport");
    let geometry = Geometry::new(400, 1080, 20.0);

    c.bench_function("viewport_map_to_pixel", |b| {
        b.iter(|| viewport.map_to_pixel(black_box(1_600_123_456.0), black_box(geometry)))
    });
}

fn bench_navigation_sequence(c: &mut Criterion) {
    let controller = NavigationController::new(NavigationTuning::default()).expect("tuning");
    let start = Viewport::new(0.0, 86_400.0).expect("valid viewport");
    let commands = [
        NavigationCommand::ZoomIn,
        NavigationCommand::PanLater,
        NavigationCommand::ZoomOut,
        NavigationCommand::PanEarlier,
    ];

    c.bench_function("navigation_1k_commands", |b| {
        b.iter(|| {
            let mut viewport = start;
            for command in commands.iter().cycle().take(1_000) {
                viewport = controller.apply(viewport, *command).expect("step");
            }
            black_box(viewport)
        })
    });
}

fn bench_frame_build_10k(c: &mut Criterion) {
    let catalog = sample_catalog(10_000);
    let viewport = Viewport::initialize(&catalog).expect("non-empty catalog");
    let geometry = Geometry::new(400, 1080, 20.0);
    let style = TimelineStyle::default();

    c.bench_function("frame_build_10k", |b| {
        b.iter(|| {
            build_timeline_frame(
                black_box(&catalog),
                black_box(viewport),
                black_box(geometry),
                black_box(style),
            )
            .expect("frame build should succeed")
        })
    });
}

criterion_group!(
    benches,
    bench_map_to_pixel,
    bench_navigation_sequence,
    bench_frame_build_10k
);
criterion_main!(benches);
