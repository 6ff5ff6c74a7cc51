//! Criterion benchmarks for widget event dispatch.

use criterion::{criterion_group, criterion_main, Criterion};
use elegir_core::{Event, MouseButton, Point, Rect, Widget};
use elegir_widgets::{Select, SelectOption};
use std::hint::black_box;

fn open_select(option_count: usize) -> Select {
    let mut select = Select::uncontrolled()
        .options((0..option_count).map(|i| SelectOption::simple(format!("option-{i}"))))
        .max_visible_items(option_count);
    select.layout(Rect::new(0.0, 0.0, 24.0, 1.0));
    select
}

fn bench_header_toggle(c: &mut Criterion) {
    let mut select = open_select(16);
    let click = Event::MouseDown {
        position: Point::new(5.0, 0.0),
        button: MouseButton::Left,
    };
    c.bench_function("select_header_toggle", |b| {
        b.iter(|| {
            black_box(select.event(black_box(&click)));
        });
    });
}

fn bench_item_hit_test(c: &mut Criterion) {
    let mut select = open_select(16);
    select.toggle_open();
    let hover = Event::MouseMove {
        position: Point::new(5.0, 9.0),
    };
    c.bench_function("select_item_hit_test", |b| {
        b.iter(|| {
            black_box(select.event(black_box(&hover)));
        });
    });
}

criterion_group!(benches, bench_header_toggle, bench_item_hit_test);
criterion_main!(benches);
