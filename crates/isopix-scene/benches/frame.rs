use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use isopix_color::Color;
use isopix_geom::GridPos;
use isopix_scene::{
    Cube, DepthOrder, DrawList, Scene, ShadowMode, ViewConfig, compute_shadows, render_frame,
};

fn pyramid(n: i32) -> Vec<GridPos> {
    let mut out = Vec::new();
    for z in 0..n {
        for y in z..(2 * n - z) {
            for x in z..(2 * n - z) {
                out.push(GridPos::from((x, y, -z)));
            }
        }
    }
    out
}

fn bench_sort_and_shadows(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_and_shadows");
    let positions = pyramid(4);
    group.bench_function("draw_order_pyramid4", |b| {
        let order = DepthOrder::new(0.7, 1000.0);
        b.iter(|| black_box(order.draw_order(black_box(&positions))))
    });
    group.bench_function("shadows_diagonal_pyramid4", |b| {
        b.iter(|| black_box(compute_shadows(black_box(&positions), ShadowMode::Diagonal45)))
    });
    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    group.measurement_time(Duration::from_secs(5));
    let view = ViewConfig {
        shadow_mode: ShadowMode::TopOnly,
        ..Default::default()
    };
    let mut scene = Scene::with_cubes(
        view,
        pyramid(4)
            .into_iter()
            .map(|p| Cube::new(Color::rgb(180, 120, 60), p)),
    );
    let mut list = DrawList::new();
    group.bench_function("pyramid4_top_only", |b| {
        b.iter(|| {
            list.clear();
            scene.rotate_by(0.01);
            black_box(render_frame(&mut scene, &mut list));
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sort_and_shadows, bench_render_frame);
criterion_main!(benches);
