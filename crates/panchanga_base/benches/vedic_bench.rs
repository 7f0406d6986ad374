use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_base::{
    AyanamshaSystem, GeoLocation, MeanElementEphemeris, NameCategory, NameResolver, NameTable,
    RiseSetConfig, ayanamsha_deg, compute_moon_rise_set, moon_latitude_deg, moon_longitude_deg,
    sun_longitude_deg, sun_rise_set, tithi_from_elongation, yoga_from_sum,
};

fn position_bench(c: &mut Criterion) {
    let jd = 2_460_325.25;

    let mut group = c.benchmark_group("positions");
    group.bench_function("sun_longitude", |b| {
        b.iter(|| sun_longitude_deg(black_box(jd)))
    });
    group.bench_function("moon_longitude", |b| {
        b.iter(|| moon_longitude_deg(black_box(jd)))
    });
    group.bench_function("moon_latitude", |b| {
        b.iter(|| moon_latitude_deg(black_box(jd)))
    });
    group.bench_function("ayanamsha_lahiri", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(0.24)))
    });
    group.finish();
}

fn riseset_bench(c: &mut Criterion) {
    let eph = MeanElementEphemeris::default();
    let loc = GeoLocation::new(12.9716, 77.5946, 5.5);
    let config = RiseSetConfig::default();

    let mut group = c.benchmark_group("riseset");
    group.bench_function("sun_rise_set", |b| {
        b.iter(|| sun_rise_set(&eph, &loc, black_box(2_460_325), &config))
    });
    group.bench_function("moon_rise_set", |b| {
        b.iter(|| compute_moon_rise_set(&eph, &loc, black_box(2_460_325)))
    });
    group.finish();
}

fn element_bench(c: &mut Criterion) {
    let table = NameTable::builtin();

    let mut group = c.benchmark_group("elements");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(211.75)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(278.31)))
    });
    group.bench_function("name_lookup", |b| {
        b.iter(|| table.resolve(NameCategory::Nakshatra, black_box(14)))
    });
    group.bench_function("name_fallback", |b| {
        b.iter(|| table.resolve(NameCategory::Tithi, black_box(999)))
    });
    group.finish();
}

criterion_group!(benches, position_bench, riseset_bench, element_bench);
criterion_main!(benches);
