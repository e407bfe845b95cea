use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use udaya_core::{
    AyanamshaSystem, BuiltinEphemeris, BuiltinSunEvents, Coordinates, FixedZone, PanchangConfig,
    PanchangPipeline, Zodiac,
};

fn pipeline_bench(c: &mut Criterion) {
    let coords = Coordinates::new(13.0827, 80.2707);
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();

    let tropical = PanchangPipeline::new(
        FixedZone::new("Asia/Kolkata"),
        BuiltinSunEvents::default(),
        BuiltinEphemeris,
    );
    let sidereal = tropical.clone().with_config(
        PanchangConfig::default().with_zodiac(Zodiac::Sidereal(AyanamshaSystem::Lahiri)),
    );

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("compute_panchang_tropical", |b| {
        b.iter(|| tropical.compute_panchang(Some(black_box(coords)), "Chennai", black_box(date)))
    });
    group.bench_function("compute_panchang_lahiri", |b| {
        b.iter(|| sidereal.compute_panchang(Some(black_box(coords)), "Chennai", black_box(date)))
    });
    group.bench_function("sunrise_only", |b| {
        let sun = BuiltinSunEvents::default();
        b.iter(|| {
            sun.event(
                black_box(&coords),
                black_box(date),
                chrono_tz::Asia::Kolkata,
                udaya_ephem::RiseSetEvent::Sunrise,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, pipeline_bench);
criterion_main!(benches);
