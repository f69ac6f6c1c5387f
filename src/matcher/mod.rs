//! The public entry point, pairing a road [graph](Graph) with its configuration.

use crate::config::MatcherConfig;
use crate::geo::{LatLng, PlanarScale};
use crate::graph::{Graph, RoadSegment};
use crate::transition::*;

use geo::Point;
use log::info;
use measure_time::info_time;
#[cfg(feature = "tracing")]
use tracing::Level;


/// Matches GPS traces onto a fixed road network.
///
/// The matcher owns the [`Graph`] built from its segments and never mutates it,
/// so a single matcher may be shared by reference across threads, with each
/// call keeping its own working state.
///
/// ```rust
/// use geo::{point, wkt};
/// use snapline::{Matcher, MatcherConfig, RoadSegment};
///
/// let road = wkt! { LINESTRING (0.0 0.0, 0.001 0.0, 0.001 0.001) };
/// let matcher = Matcher::new(RoadSegment::from_polyline(&road), MatcherConfig::default())?;
///
/// let trace = [point! { x: 0.0004, y: 0.00002 }, point! { x: 0.00098, y: 0.0005 }];
/// let matched = matcher.map_match(&trace);
///
/// // Each point snaps onto the leg of the corner it lies beside.
/// assert_eq!(matched.len(), 2);
/// assert_eq!(matched[0].y(), 0.0);
/// assert_eq!(matched[1].x(), 0.001);
/// # Ok::<(), snapline::Error>(())
/// ```
#[derive(Debug)]
pub struct Matcher<E = GaussianEmission, T = ExponentialTransition>
where
    E: EmissionStrategy,
    T: TransitionStrategy,
{
    graph: Graph,
    config: MatcherConfig,
    heuristics: CostingStrategies<E, T>,
}

impl Matcher {
    /// Builds the road graph and spatial index from `segments`, using the
    /// default Gaussian emission and exponential transition model.
    ///
    /// Fails if the configuration holds a non-positive parameter.
    pub fn new(
        segments: impl IntoIterator<Item = RoadSegment>,
        config: MatcherConfig,
    ) -> crate::Result<Self> {
        Self::with_heuristics(segments, config, CostingStrategies::from_config(&config))
    }
}

impl<E, T> Matcher<E, T>
where
    E: EmissionStrategy,
    T: TransitionStrategy,
{
    /// Builds a matcher which scores candidates with custom heuristics.
    ///
    /// The σ and β of the configuration only parameterise the default
    /// heuristics, and are ignored here.
    pub fn with_heuristics(
        segments: impl IntoIterator<Item = RoadSegment>,
        config: MatcherConfig,
        heuristics: CostingStrategies<E, T>,
    ) -> crate::Result<Self> {
        config.validate()?;

        let graph = Graph::new(segments, PlanarScale::new(config.meters_per_degree));
        info!("Matcher ready: {:?}, config {:?}", graph, config);

        Ok(Matcher {
            graph,
            config,
            heuristics,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn heuristics(&self) -> &CostingStrategies<E, T> {
        &self.heuristics
    }

    /// A fresh router over the matcher's graph, bounded by the configured cutoff.
    pub fn router(&self) -> GraphRouter<'_> {
        GraphRouter::new(&self.graph, self.config.search_cutoff)
    }

    /// Generates the candidate layers of a trace, without solving them.
    pub fn transition(&self, trace: &[Point]) -> Transition<'_, E, T> {
        Transition::new(
            &self.graph,
            trace,
            &self.heuristics,
            self.config.search_radius,
        )
    }

    /// Solves a trace, routing over the matcher's own graph.
    pub fn solve(&self, trace: &[Point]) -> Collapse {
        self.solve_with(trace, &mut self.router())
    }

    /// Solves a trace, routing between candidates through the supplied `router`.
    ///
    /// The router may be any [`Router`], such as one backed by a remote
    /// routing service. It is borrowed mutably so its caches may be reused
    /// across calls on the same trace.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn solve_with<R>(&self, trace: &[Point], router: &mut R) -> Collapse
    where
        R: Router + ?Sized,
    {
        if trace.is_empty() {
            return Collapse::default();
        }

        info_time!("matched {} points", trace.len());

        let transition = self.transition(trace);
        let collapse = transition.solve(ViterbiSolver, router);

        if !collapse.restarts.is_empty() {
            info!(
                "Matched with {} restarts at layers {:?}",
                collapse.restarts.len(),
                collapse.restarts
            );
        }

        collapse
    }

    /// Matches a trace onto the road network.
    ///
    /// Returns exactly one position per input point, in input order.
    /// An empty trace yields an empty result.
    pub fn map_match(&self, trace: &[Point]) -> Vec<Point> {
        self.solve(trace).positions()
    }

    /// Matches a trace of validated coordinates onto the road network.
    pub fn map_match_latlng(&self, trace: &[LatLng]) -> Vec<LatLng> {
        let points = trace.iter().copied().map(Point::from).collect::<Vec<_>>();

        self.map_match(&points)
            .into_iter()
            .map(LatLng::from)
            .collect()
    }
}
