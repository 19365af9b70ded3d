//! Camera look, look-at and projection timings.

#![allow(unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flycam::camera::look_at::{look_at_library, look_at_manual};
use flycam::camera::OrientedCamera;
use glam::Vec3;

fn adjust_look_benchmark(c: &mut Criterion) {
    let mut camera = OrientedCamera::new(16.0 / 9.0);
    c.bench_function("adjust_look", |b| {
        b.iter(|| camera.adjust_look(black_box(1.5), black_box(-0.75)));
    });
}

fn view_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("look_at");
    let eye = Vec3::new(1.0, 2.0, 3.0);
    let front = Vec3::new(0.3, -0.2, -0.93).normalize();

    group.bench_function("library", |b| {
        b.iter(|| look_at_library(black_box(eye), black_box(front), Vec3::Y));
    });
    group.bench_function("manual", |b| {
        b.iter(|| look_at_manual(black_box(eye), black_box(front), Vec3::Y));
    });
    group.finish();
}

fn view_projection_benchmark(c: &mut Criterion) {
    let camera = OrientedCamera::new(16.0 / 9.0);
    c.bench_function("view_projection", |b| {
        b.iter(|| black_box(&camera).view_projection());
    });
}

criterion_group!(
    benches,
    adjust_look_benchmark,
    view_benchmark,
    view_projection_benchmark
);
criterion_main!(benches);
