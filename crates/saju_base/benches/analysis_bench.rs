use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    HourSlot, analyze_day_master, branch_relations, chart_pattern, compatibility, derive_chart,
    five_element_balance, spirit_killings, ten_gods,
};
use saju_calendar::SolarDate;

fn derive_bench(c: &mut Criterion) {
    let date = SolarDate { year: 1990, month: 5, day: 15 };

    let mut group = c.benchmark_group("derive");
    group.bench_function("derive_chart", |b| {
        b.iter(|| derive_chart(black_box(date), HourSlot::O))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let Ok(chart) = derive_chart(SolarDate { year: 1990, month: 5, day: 15 }, HourSlot::O) else {
        return;
    };
    let Ok(other) = derive_chart(SolarDate { year: 1984, month: 2, day: 4 }, HourSlot::Ja) else {
        return;
    };

    let mut group = c.benchmark_group("analysis");
    group.bench_function("five_element_balance", |b| {
        b.iter(|| five_element_balance(black_box(&chart)))
    });
    group.bench_function("ten_gods", |b| b.iter(|| ten_gods(black_box(&chart))));
    group.bench_function("analyze_day_master", |b| {
        b.iter(|| analyze_day_master(black_box(&chart)))
    });
    group.bench_function("chart_pattern", |b| {
        let a = analyze_day_master(&chart);
        b.iter(|| chart_pattern(black_box(&chart), black_box(&a)))
    });
    group.bench_function("branch_relations", |b| {
        b.iter(|| branch_relations(black_box(&chart)))
    });
    group.bench_function("spirit_killings", |b| {
        b.iter(|| spirit_killings(black_box(&chart)))
    });
    group.bench_function("compatibility", |b| {
        b.iter(|| compatibility(black_box(&chart), black_box(&other)))
    });
    group.finish();
}

criterion_group!(benches, derive_bench, analysis_bench);
criterion_main!(benches);
