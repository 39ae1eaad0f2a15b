// Benchmark for grid layout
// Measures month layout and day column packing over growing event sets

use calendar_grid::models::event::Event;
use calendar_grid::models::view::{ViewKind, ViewWindow};
use calendar_grid::services::layout::{build, layout_day_columns, LayoutOptions, SortPolicy};
use calendar_grid::services::render::{GridRenderer, MonthGridRenderer};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_events(count: usize) -> Vec<Event> {
    let base = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..count)
        .map(|i| {
            let start = base + Duration::days((i % 31) as i64) + Duration::minutes((i * 37 % 1380) as i64);
            // Every fifth event runs for several days
            let length = if i % 5 == 0 {
                Duration::days((i % 4) as i64 + 1)
            } else {
                Duration::minutes(30 + (i % 4) as i64 * 15)
            };
            let mut event = Event::new(i as i64, format!("Event {i}"), start, start + length).unwrap();
            event.all_day = i % 7 == 0;
            event
        })
        .collect()
}

fn january() -> ViewWindow {
    let anchor = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    ViewWindow::for_kind(anchor, ViewKind::Month, 0).unwrap()
}

fn benchmark_month_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_layout");
    let window = january();

    for size in [10, 100, 1000].iter() {
        let events = generate_events(*size);
        for policy in [SortPolicy::StartPriority, SortPolicy::SpanPriority] {
            let options = LayoutOptions {
                sort_policy: policy,
                max_per_day: Some(4),
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", policy), size),
                &events,
                |b, events| {
                    b.iter(|| build(black_box(events), black_box(&window), &options));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_month_render(c: &mut Criterion) {
    let window = january();
    let events = generate_events(500);
    let layout = build(&events, &window, &LayoutOptions::default());
    let renderer = MonthGridRenderer::month();

    c.bench_function("month_render_500", |b| {
        b.iter(|| renderer.render(black_box(&layout), &window))
    });
}

fn benchmark_day_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("day_columns");

    for size in [5, 50, 200].iter() {
        let events: Vec<Event> = generate_events(*size * 31)
            .into_iter()
            .filter(|event| event.first_day() == NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .collect();
        let refs: Vec<&Event> = events.iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &refs, |b, refs| {
            b.iter(|| layout_day_columns(black_box(refs)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_month_layout,
    benchmark_month_render,
    benchmark_day_columns
);
criterion_main!(benches);
