use criterion::{Criterion, black_box, criterion_group, criterion_main};
use udaya_ephem::{
    GeoLocation, RiseSetConfig, RiseSetEvent, approximate_local_noon_jd, ascendant_deg,
    compute_rise_set, moon_longitude_deg, sun_position,
};

fn longitude_bench(c: &mut Criterion) {
    let jd = 2_460_310.542;

    let mut group = c.benchmark_group("longitudes");
    group.bench_function("sun_position", |b| b.iter(|| sun_position(black_box(jd))));
    group.bench_function("moon_longitude", |b| {
        b.iter(|| moon_longitude_deg(black_box(jd)))
    });
    group.bench_function("ascendant", |b| {
        b.iter(|| ascendant_deg(black_box(jd), black_box(13.0827), black_box(80.2707)))
    });
    group.finish();
}

fn riseset_bench(c: &mut Criterion) {
    let loc = GeoLocation::new(13.0827, 80.2707, 0.0);
    let noon = approximate_local_noon_jd(2_460_310.5, loc.longitude_deg);
    let config = RiseSetConfig::default();

    let mut group = c.benchmark_group("riseset");
    group.bench_function("sunrise", |b| {
        b.iter(|| compute_rise_set(&loc, RiseSetEvent::Sunrise, black_box(noon), &config))
    });
    group.finish();
}

criterion_group!(benches, longitude_bench, riseset_bench);
criterion_main!(benches);
