// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for input disambiguation.
//!
//! Measures the gesture resolver over the event storms a real input system
//! produces: redundant tap reports and double-click bursts.

use cinebar::coordinator::GestureResolver;
use cinebar::input::{PointerButton, PointerDevice, SurfaceEvent, SurfaceEventKind};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn tap_events(timestamp_ms: u64) -> [SurfaceEvent; 3] {
    [
        SurfaceEvent::new(
            SurfaceEventKind::PointerUp {
                device: PointerDevice::Mouse,
                button: PointerButton::Primary,
            },
            timestamp_ms,
        ),
        SurfaceEvent::new(
            SurfaceEventKind::MouseUp {
                button: PointerButton::Primary,
            },
            timestamp_ms + 2,
        ),
        SurfaceEvent::new(SurfaceEventKind::Click, timestamp_ms + 15),
    ]
}

/// Benchmark resolution of a long stream of well-separated taps.
fn bench_tap_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_resolution");

    group.bench_function("tap_stream", |b| {
        b.iter(|| {
            let mut resolver = GestureResolver::new();
            let mut commands = 0u32;
            for i in 0..1_000u64 {
                for event in tap_events(i * 400) {
                    if resolver.resolve(black_box(event)).is_some() {
                        commands += 1;
                    }
                }
            }
            black_box(commands)
        });
    });

    group.finish();
}

/// Benchmark resolution of interleaved double-clicks and taps, the path
/// exercising both suppression windows.
fn bench_mixed_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_resolution");

    group.bench_function("mixed_gestures", |b| {
        b.iter(|| {
            let mut resolver = GestureResolver::new();
            let mut commands = 0u32;
            for i in 0..1_000u64 {
                let base = i * 700;
                let double_click = SurfaceEvent::new(SurfaceEventKind::DoubleClick, base);
                if resolver.resolve(black_box(double_click)).is_some() {
                    commands += 1;
                }
                for event in tap_events(base + 350) {
                    if resolver.resolve(black_box(event)).is_some() {
                        commands += 1;
                    }
                }
            }
            black_box(commands)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tap_stream, bench_mixed_gestures);
criterion_main!(benches);
