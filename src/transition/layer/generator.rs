use crate::graph::{Graph, Scan};
use crate::transition::*;

use geo::Point;
use log::debug;
use measure_time::debug_time;
use wkt::ToWkt;

/// Generates the layers within the transition graph.
///
/// Generates the layers of the transition graph, where each layer
/// represents a point in the input, and each node in the layer
/// represents a candidate transition point, within the `search_distance`
/// radius of the input point, which was found by the projection
/// of the input point upon every segment within this radius.
pub struct LayerGenerator<'a, E, T>
where
    E: EmissionStrategy,
    T: TransitionStrategy,
{
    /// The maximum distance (meters) between an input point and its candidates.
    pub search_distance: f64,

    /// The costing heuristics required to generate the layers.
    ///
    /// This is required as a caching technique since the emission
    /// of a candidate need only be calculated once.
    pub heuristics: &'a CostingStrategies<E, T>,

    /// The routing map used to pull candidates from.
    map: &'a Graph,
}

impl<'a, E, T> LayerGenerator<'a, E, T>
where
    E: EmissionStrategy,
    T: TransitionStrategy,
{
    /// Creates a [`LayerGenerator`] from a map and costing heuristics.
    pub fn new(
        map: &'a Graph,
        heuristics: &'a CostingStrategies<E, T>,
        search_distance: f64,
    ) -> Self {
        LayerGenerator {
            map,
            heuristics,
            search_distance,
        }
    }

    /// Produces a single layer for the input point, `origin`.
    pub fn layer(&self, layer_id: usize, origin: &Point) -> Layer {
        let scale = self.map.scale();

        let candidates = self
            .map
            .scan_segments_projected(origin, self.search_distance)
            .into_iter()
            .enumerate()
            .map(|(node_id, (position, indexed))| {
                // We have the actual projected position, and it's associated segment.
                // Therefore, we can use the emission costing function to calculate
                // the associated emission of this candidate.
                let distance = scale.distance(&position, origin);
                let emission = self
                    .heuristics
                    .emission(EmissionContext::new(&position, origin, distance));

                let location = CandidateLocation { layer_id, node_id };
                Candidate::new(indexed.id, indexed.segment, position, emission, location)
            })
            .collect::<Vec<_>>();

        debug!(
            "Layer {} (Point={}): Found {} candidates within {}m",
            layer_id,
            origin.wkt_string(),
            candidates.len(),
            self.search_distance
        );

        Layer {
            candidates,
            origin: *origin,
        }
    }

    /// Generates a layer for every input point, in order.
    pub fn with_points(&self, input: &[Point]) -> Layers {
        debug_time!("generating {} layers", input.len());

        input
            .iter()
            .enumerate()
            .map(|(layer_id, origin)| self.layer(layer_id, origin))
            .collect::<Layers>()
    }
}
