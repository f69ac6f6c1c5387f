use crate::graph::{Graph, NodeKey, SegmentEnd};
use crate::transition::*;

use itertools::iproduct;
use log::trace;
use measure_time::trace_time;
use strum::IntoEnumIterator;
#[cfg(feature = "tracing")]
use tracing::Level;

/// Routes between candidates over the road [graph](Graph).
///
/// The route between two candidates on different segments leaves the
/// source segment through one of its ends, travels the graph, and enters
/// the target segment through one of its ends. The shortest of the four
/// combinations is taken:
///
/// ```text
///   source ---offset---> end ===graph===> end ---offset---> target
/// ```
///
/// Graph searches are bounded by a cutoff distance and memoised per
/// start node, so each node is searched at most once per router.
#[derive(Debug)]
pub struct GraphRouter<'a> {
    map: &'a Graph,
    cache: ReachCache,
}

impl<'a> GraphRouter<'a> {
    /// Creates a router over `map`, whose searches are bounded to `cutoff` meters.
    pub fn new(map: &'a Graph, cutoff: f64) -> Self {
        GraphRouter {
            map,
            cache: ReachCache::new(ReachMetadata {
                threshold_distance: cutoff,
            }),
        }
    }

    /// The bound, in meters, of each graph search.
    pub fn cutoff(&self) -> f64 {
        self.cache.metadata().threshold_distance
    }

    /// The shortest graph distance between two nodes, if it lies within the cutoff.
    pub fn node_distance(&mut self, source: NodeKey, target: NodeKey) -> Option<f64> {
        if !self.map.contains_node(source) || !self.map.contains_node(target) {
            return None;
        }

        self.cache.query(self.map, source).get(&target).copied()
    }

    /// The route length between two candidates, in meters.
    ///
    /// Candidates on the same segment are joined directly along it.
    pub fn route_distance(&mut self, source: &Candidate, target: &Candidate) -> Option<f64> {
        let scale = self.map.scale();

        if source.shares_segment(target) {
            return Some(scale.distance(&source.position, &target.position));
        }

        iproduct!(SegmentEnd::iter(), SegmentEnd::iter())
            .filter_map(|(exit, entry)| {
                let from = NodeKey::quantize(&source.edge.endpoint(exit));
                let to = NodeKey::quantize(&target.edge.endpoint(entry));

                let between = self.node_distance(from, to)?;
                Some(source.offset(&scale, exit) + between + target.offset(&scale, entry))
            })
            .min_by(f64::total_cmp)
    }
}

impl Router for GraphRouter<'_> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::DEBUG))]
    fn distance_matrix(&mut self, sources: &[Candidate], targets: &[Candidate]) -> DistanceMatrix {
        trace_time!("distance matrix {}x{}", sources.len(), targets.len());

        let mut matrix = DistanceMatrix::unreachable(sources.len(), targets.len());
        for ((row, source), (column, target)) in
            iproduct!(sources.iter().enumerate(), targets.iter().enumerate())
        {
            matrix.set(row, column, self.route_distance(source, target));
        }

        trace!(
            "Resolved {} of {} routes, {} nodes searched",
            matrix.reachable(),
            sources.len() * targets.len(),
            self.cache.len()
        );

        matrix
    }
}
