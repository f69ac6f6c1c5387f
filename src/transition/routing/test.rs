use crate::geo::PlanarScale;
use crate::graph::{Graph, RoadSegment, SegmentId};
use crate::transition::*;

use approx::assert_relative_eq;
use geo::{point, Point};

fn network() -> Graph {
    Graph::new(
        [
            RoadSegment::new(point! { x: 0.0, y: 0.0 }, point! { x: 0.001, y: 0.0 }),
            RoadSegment::new(point! { x: 0.001, y: 0.0 }, point! { x: 0.001, y: 0.001 }),
            RoadSegment::new(point! { x: 0.01, y: 0.01 }, point! { x: 0.011, y: 0.01 }),
        ],
        PlanarScale::new(100_000.0),
    )
}

fn candidate(graph: &Graph, segment: SegmentId, position: Point) -> Candidate {
    let edge = *graph.segment(segment).expect("segment exists");
    let location = CandidateLocation {
        layer_id: 0,
        node_id: segment,
    };

    Candidate::new(segment, edge, edge.project(&position), 0.0, location)
}

#[test]
fn same_segment_is_direct() {
    let graph = network();
    let mut router = GraphRouter::new(&graph, 2_000.0);

    let a = candidate(&graph, 0, point! { x: 0.0002, y: 0.0 });
    let b = candidate(&graph, 0, point! { x: 0.0007, y: 0.0 });

    let distance = router.route_distance(&a, &b).expect("reachable");
    assert_relative_eq!(distance, 50.0, epsilon = 1e-6);
}

#[test]
fn joined_segments_take_shortest_ends() {
    let graph = network();
    let mut router = GraphRouter::new(&graph, 2_000.0);

    let a = candidate(&graph, 0, point! { x: 0.0005, y: 0.0 });
    let b = candidate(&graph, 1, point! { x: 0.001, y: 0.0005 });

    // 50m to the shared corner, then 50m up the second segment.
    let distance = router.route_distance(&a, &b).expect("reachable");
    assert_relative_eq!(distance, 100.0, epsilon = 1e-6);

    let reverse = router.route_distance(&b, &a).expect("reachable");
    assert_relative_eq!(reverse, 100.0, epsilon = 1e-6);
}

#[test]
fn disconnected_segments_are_unreachable() {
    let graph = network();
    let mut router = GraphRouter::new(&graph, 2_000.0);

    let a = candidate(&graph, 0, point! { x: 0.0005, y: 0.0 });
    let b = candidate(&graph, 2, point! { x: 0.0105, y: 0.01 });

    assert_eq!(router.route_distance(&a, &b), None);
}

#[test]
fn cutoff_bounds_graph_distance() {
    let graph = Graph::new(
        [
            RoadSegment::new(point! { x: 0.0, y: 0.0 }, point! { x: 0.001, y: 0.0 }),
            RoadSegment::new(point! { x: 0.001, y: 0.0 }, point! { x: 0.002, y: 0.0 }),
            RoadSegment::new(point! { x: 0.002, y: 0.0 }, point! { x: 0.003, y: 0.0 }),
        ],
        PlanarScale::new(100_000.0),
    );

    let a = candidate(&graph, 0, point! { x: 0.0005, y: 0.0 });
    let b = candidate(&graph, 2, point! { x: 0.0025, y: 0.0 });

    // The nearest pair of ends are 100m apart along the graph.
    let mut bounded = GraphRouter::new(&graph, 50.0);
    assert_eq!(bounded.route_distance(&a, &b), None);
    assert_relative_eq!(bounded.cutoff(), 50.0);

    let mut unbounded = GraphRouter::new(&graph, 2_000.0);
    let distance = unbounded.route_distance(&a, &b).expect("reachable");
    assert_relative_eq!(distance, 200.0, epsilon = 1e-6);
}

#[test_log::test]
fn matrix_covers_every_pair() {
    let graph = network();
    let mut router = GraphRouter::new(&graph, 2_000.0);

    let sources = [candidate(&graph, 0, point! { x: 0.0005, y: 0.0 })];
    let targets = [
        candidate(&graph, 1, point! { x: 0.001, y: 0.0005 }),
        candidate(&graph, 2, point! { x: 0.0105, y: 0.01 }),
    ];

    let matrix = router.distance_matrix(&sources, &targets);

    assert_eq!((matrix.rows(), matrix.columns()), (1, 2));
    assert_relative_eq!(matrix.get(0, 0).unwrap_or_default(), 100.0, epsilon = 1e-6);
    assert_eq!(matrix.get(0, 1), None);
    assert_eq!(matrix.get(3, 3), None);
    assert_eq!(matrix.reachable(), 1);
}
