use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_base::{GeoLocation, MeanElementEphemeris, NameTable};
use panchanga_search::{
    PanchangConfig, masa_for_date, next_new_moon, panchanga_for_date, tithi_for_date,
};
use panchanga_time::CivilDate;

fn lunar_phase_bench(c: &mut Criterion) {
    let eph = MeanElementEphemeris::default();

    let mut group = c.benchmark_group("search_lunar_phase");
    group.bench_function("next_new_moon", |b| {
        b.iter(|| next_new_moon(black_box(&eph), black_box(2_460_390.0)).expect("should converge"))
    });
    group.finish();
}

fn panchang_bench(c: &mut Criterion) {
    let eph = MeanElementEphemeris::default();
    let names = NameTable::builtin();
    let loc = GeoLocation::new(12.9716, 77.5946, 5.5);
    let config = PanchangConfig::default();
    let date = CivilDate::new(2024, 3, 20).expect("valid date");

    let mut group = c.benchmark_group("search_panchang");
    group.sample_size(20);
    group.bench_function("tithi_for_date", |b| {
        b.iter(|| {
            tithi_for_date(&eph, &names, black_box(date), &loc, &config)
                .expect("tithi should succeed")
        })
    });
    group.bench_function("masa_for_date", |b| {
        b.iter(|| {
            masa_for_date(&eph, &names, black_box(date), &loc, &config)
                .expect("masa should succeed")
        })
    });
    group.bench_function("panchanga_for_date", |b| {
        b.iter(|| {
            panchanga_for_date(&eph, &names, black_box(date), &loc, &config)
                .expect("panchanga should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, lunar_phase_bench, panchang_bench);
criterion_main!(benches);
