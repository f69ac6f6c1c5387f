use crate::geo::PlanarScale;
use crate::graph::{Graph, RoadSegment, Scan};

use geo::{point, Distance, Euclidean, Point};

fn graph() -> Graph {
    Graph::new(
        [
            RoadSegment::new(point! { x: 0.0, y: 0.0 }, point! { x: 0.001, y: 0.0 }),
            RoadSegment::new(point! { x: 0.0, y: 0.0006 }, point! { x: 0.001, y: 0.0006 }),
            RoadSegment::new(point! { x: 0.0, y: 0.0004 }, point! { x: 0.001, y: 0.0004 }),
            RoadSegment::new(point! { x: 0.001, y: 0.0004 }, point! { x: 0.0014, y: 0.0008 }),
        ],
        PlanarScale::new(100_000.0),
    )
}

#[test]
fn projected_scan_is_exact() {
    let graph = graph();
    let origin = point! { x: 0.0005, y: 0.0 };

    // The diagonal's envelope touches the square, but the segment itself is 64m away.
    let prefiltered = graph
        .scan_segments(&origin, 50.0)
        .map(|indexed| indexed.id)
        .collect::<Vec<_>>();
    assert!(prefiltered.contains(&3));

    let ids = graph
        .scan_segments_projected(&origin, 50.0)
        .into_iter()
        .map(|(_, indexed)| indexed.id)
        .collect::<Vec<_>>();

    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn projected_scan_matches_linear_scan() {
    let graph = graph();
    let radius = 45.0;

    let probes = [
        point! { x: 0.0005, y: 0.0002 },
        point! { x: -0.0003, y: 0.0 },
        point! { x: 0.0012, y: 0.0005 },
        point! { x: 0.0007, y: 0.0009 },
    ];

    for probe in probes {
        let linear = graph
            .segments()
            .iter()
            .enumerate()
            .filter(|(_, segment)| {
                let projected: Point = segment.project(&probe);
                Euclidean.distance(probe, projected) <= graph.scale().to_degrees(radius)
            })
            .map(|(id, _)| id)
            .collect::<Vec<_>>();

        let scanned = graph
            .scan_segments_projected(&probe, radius)
            .into_iter()
            .map(|(_, indexed)| indexed.id)
            .collect::<Vec<_>>();

        assert_eq!(scanned, linear, "mismatch at {probe:?}");
    }
}

#[test]
fn projected_scan_far_from_roads_is_empty() {
    let graph = graph();
    let origin = point! { x: 0.5, y: 0.5 };

    assert!(graph.scan_segments_projected(&origin, 50.0).is_empty());
}
