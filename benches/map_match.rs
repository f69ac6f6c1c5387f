use snapline::{Matcher, MatcherConfig, RoadSegment};

use criterion::criterion_main;
use geo::{point, LineString, Point};
use std::hint::black_box;
use wkt::TryFromWkt;

/// Streets per side of the synthetic grid.
const GRID_SIZE: usize = 40;

/// 0.001° between streets, roughly 111m.
const GRID_SPACING: f64 = 0.001;

struct MapMatchScenario {
    name: &'static str,
    input_linestring: &'static str,
}

const MATCH_CASES: [MapMatchScenario; 2] = [
    MapMatchScenario {
        name: "STRAIGHT",
        input_linestring: "LINESTRING (0.00012 0.00002, 0.00061 -0.00003, 0.00113 0.00001, 0.00158 0.00004, 0.00207 -0.00002, 0.00262 0.00003, 0.00311 0.00001, 0.00359 -0.00004)",
    },
    MapMatchScenario {
        name: "STAIRCASE",
        input_linestring: "LINESTRING (0.00015 0.00003, 0.00068 -0.00002, 0.00102 0.00041, 0.00097 0.00088, 0.00143 0.00103, 0.00196 0.00098, 0.00203 0.00152, 0.00199 0.00207, 0.00251 0.00203, 0.00298 0.00196, 0.00303 0.00249)",
    },
];

/// Every street of a square grid, split into one segment per block.
fn grid() -> Vec<RoadSegment> {
    let at = |column: usize, row: usize| -> Point {
        point! { x: column as f64 * GRID_SPACING, y: row as f64 * GRID_SPACING }
    };

    (0..GRID_SIZE)
        .flat_map(|row| {
            (0..GRID_SIZE - 1).flat_map(move |column| {
                [
                    RoadSegment::new(at(column, row), at(column + 1, row)),
                    RoadSegment::new(at(row, column), at(row, column + 1)),
                ]
            })
        })
        .collect()
}

fn target_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("match");
    group.significance_level(0.1).sample_size(30);

    let matcher = Matcher::new(grid(), MatcherConfig::default()).expect("Matcher must be created");

    MATCH_CASES.into_iter().for_each(|sc| {
        let coordinates: LineString<f64> = LineString::try_from_wkt_str(sc.input_linestring)
            .expect("Linestring must parse successfully.");
        let trace = coordinates.into_points();

        group.bench_function(format!("match: {}", sc.name), |b| {
            b.iter(|| {
                let result = matcher.map_match(black_box(&trace));
                assert_eq!(result.len(), trace.len());
            })
        });
    });

    group.bench_function("build: grid", |b| {
        b.iter(|| Matcher::new(black_box(grid()), MatcherConfig::default()))
    });

    group.finish();
}

criterion::criterion_group!(targeted_benches, target_benchmark);
criterion_main!(targeted_benches);
