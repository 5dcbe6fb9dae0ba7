use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec3};
use size_references::app::{layout, transition, ReferenceView};
use size_references::core::Aabb;
use size_references::shared::ToolbarMetrics;
use size_references::{
    OverlayEvent, OverlayOptions, PointerButton, ScreenRect, SceneQuery, StaticScene,
    ViewportCamera, WidgetState,
};
use std::hint::black_box;

fn bench_layout(c: &mut Criterion) {
    let metrics = ToolbarMetrics::default();

    c.bench_function("toolbar_layout_full", |b| {
        b.iter(|| {
            let buttons = layout::layout(black_box(Vec2::new(10.0, 10.0)), true, true, &metrics);
            black_box(buttons.len())
        })
    });
}

fn build_pointer_stream(count: usize) -> Vec<OverlayEvent> {
    let mut events = vec![OverlayEvent::Tick {
        viewport: ScreenRect::new(0.0, 0.0, 1280.0, 720.0),
    }];
    events.push(OverlayEvent::PointerDown {
        button: PointerButton::Primary,
        pos: Vec2::new(14.0, 20.0),
    });
    events.extend((0..count).map(|i| OverlayEvent::PointerMoved {
        pos: Vec2::new(14.0 + (i % 600) as f32, 20.0 + (i % 300) as f32),
    }));
    events.push(OverlayEvent::PointerUp {
        button: PointerButton::Primary,
        pos: Vec2::new(100.0, 100.0),
    });
    events
}

fn bench_transition(c: &mut Criterion) {
    let options = OverlayOptions::default();
    let view = ReferenceView {
        position: Vec3::ZERO,
        visible: true,
        has_references: true,
    };
    let events = build_pointer_stream(1024);

    c.bench_function("handle_event_drag_stream", |b| {
        b.iter(|| {
            let mut state = WidgetState::new(&options);
            for event in &events {
                state = transition::handle_event(&state, &view, black_box(event), &options).state;
            }
            black_box(state.window_position)
        })
    });
}

fn bench_raycast(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_raycast");

    for &box_count in &[16usize, 256usize] {
        let mut scene = StaticScene::with_ground(ViewportCamera::new(Vec2::new(1280.0, 720.0)));
        for i in 0..box_count {
            let x = (i % 16) as f32 * 2.0 - 16.0;
            let z = -((i / 16) as f32) * 2.0 - 2.0;
            scene.add_box(Aabb::standing(Vec3::new(x, 0.0, z), Vec3::splat(1.0)));
        }

        group.bench_with_input(BenchmarkId::new("pick", box_count), &scene, |b, scene| {
            b.iter(|| {
                let mut hits = 0usize;
                for y in (0..720).step_by(24) {
                    let pos = Vec2::new(640.0, y as f32);
                    let hit = scene
                        .camera()
                        .screen_ray(pos)
                        .and_then(|ray| scene.raycast(&ray));
                    if hit.is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_transition, bench_raycast);
criterion_main!(benches);
