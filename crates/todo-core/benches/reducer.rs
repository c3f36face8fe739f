#![allow(missing_docs)]

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use todo_core::{Action, FilterMode, SequentialGenerator, TaskList, filter, reorder};

fn build_list(len: usize) -> TaskList {
    let mut ids = SequentialGenerator::default();
    let list = (0..len).fold(TaskList::new(), |list, idx| {
        list.apply(Action::add(format!("task {idx}")), &mut ids)
    });
    let targets: Vec<_> = list.iter().step_by(3).map(|item| item.id.clone()).collect();
    targets
        .into_iter()
        .fold(list, |list, id| list.apply(Action::Do { id }, &mut ids))
}

fn apply_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("task_list_apply");
    for &len in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("clear_completed", len), &len, |b, &len| {
            b.iter_batched(
                || build_list(len),
                |list| {
                    let mut ids = SequentialGenerator::default();
                    black_box(list.apply(Action::ClearCompleted, &mut ids));
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("do_last", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let list = build_list(len);
                    let id = list.iter().last().map(|item| item.id.clone());
                    (list, id)
                },
                |(list, id)| {
                    let mut ids = SequentialGenerator::default();
                    if let Some(id) = id {
                        black_box(list.apply(Action::Do { id }, &mut ids));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn view_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("task_list_views");
    for &len in &[16usize, 256, 4096] {
        let list = build_list(len);
        group.bench_with_input(BenchmarkId::new("filter_active", len), &list, |b, list| {
            b.iter(|| black_box(filter(list, FilterMode::Active).len()));
        });
        group.bench_with_input(BenchmarkId::new("reorder_ends", len), &list, |b, list| {
            b.iter(|| black_box(reorder(list, 0, list.len() - 1)));
        });
    }
    group.finish();
}

criterion_group!(benches, apply_benchmark, view_benchmark);
criterion_main!(benches);
