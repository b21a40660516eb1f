use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use sticker_drawer::{Catalog, Design, FixedPlacement, RandomPlacement, StickerDrawer};

fn catalog(len: usize) -> Catalog {
    Catalog::new((0..len).map(|i| format!("stickers/{i}.png")))
}

fn drawer(len: usize) -> StickerDrawer {
    StickerDrawer::new(catalog(len))
        .with_placement(FixedPlacement::new(50.0, 50.0))
}

fn spawn_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn");

    group.bench_function("fixed_placement", |b| {
        b.iter_batched(
            || drawer(9),
            |drawer| black_box(drawer.spawn("stickers/0.png")),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("random_placement", |b| {
        b.iter_batched(
            || StickerDrawer::new(catalog(9)).with_placement(RandomPlacement::seeded(3)),
            |drawer| black_box(drawer.spawn("stickers/0.png")),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn delete_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");

    group.bench_function("single_delete_1k", |b| {
        b.iter_batched(
            || drawer(1_000),
            |drawer| {
                drawer.request_delete(500);
                black_box(drawer.confirm_delete())
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("bulk_delete_half_of_1k", |b| {
        b.iter_batched(
            || {
                let drawer = drawer(1_000);
                drawer.switch_design(Design::BulkSelect);
                drawer.toggle_select_mode();
                for index in (0..1_000).step_by(2) {
                    drawer.toggle_selection(index);
                }
                drawer.request_bulk_delete();
                drawer
            },
            |drawer| black_box(drawer.confirm_bulk_delete()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn selection_benchmarks(c: &mut Criterion) {
    c.bench_function("toggle_selection", |b| {
        let drawer = drawer(100);
        drawer.switch_design(Design::BulkSelect);
        drawer.toggle_select_mode();
        let mut index = 0;
        b.iter(|| {
            index = (index + 7) % 100;
            black_box(drawer.toggle_selection(index))
        })
    });
}

criterion_group!(
    benches,
    spawn_benchmarks,
    delete_benchmarks,
    selection_benchmarks
);
criterion_main!(benches);
