use crate::graph::Graph;
use crate::transition::*;

use geo::Point;

/// A map-specific transition graph based on the Hidden-Markov-Model structure.
///
/// This is the orchestration point for solving transition graphs for making
/// map-matching requests. It requires a [map](Graph) on instantiation, as well as
/// the input points to solve for.
///
/// ### Example
///
/// Below is an example that matches a trip onto a small network. To see all
/// the available ways to interpret the resultant solution, see the
/// [`Collapse`] structure.
///
/// ```rust
/// use geo::point;
/// use snapline::{Graph, GraphRouter, PlanarScale, RoadSegment, Transition};
/// use snapline::transition::{CostingStrategies, ViterbiSolver};
///
/// let map = Graph::new(
///     [RoadSegment::new(point! { x: 0.0, y: 0.0 }, point! { x: 0.001, y: 0.0 })],
///     PlanarScale::default(),
/// );
///
/// // Use the default costing strategies
/// let costing = CostingStrategies::default();
///
/// // Create our transition graph, supplying our map for context,
/// // and the points we wish to load as the layer data.
/// let points = [point! { x: 0.0002, y: 0.00001 }, point! { x: 0.0006, y: -0.00001 }];
/// let transition = Transition::new(&map, &points, &costing, 50.0);
///
/// // Now.. we simply solve the transition graph using the solver,
/// // routing upon the same map.
/// let solution = transition.solve(ViterbiSolver, GraphRouter::new(&map, 2_000.0));
///
/// assert_eq!(solution.len(), 2);
/// assert!(solution.steps.iter().all(|step| step.is_decoded()));
/// ```
pub struct Transition<'a, Emission, Transition>
where
    Emission: EmissionStrategy,
    Transition: TransitionStrategy,
{
    pub(crate) map: &'a Graph,
    pub(crate) heuristics: &'a CostingStrategies<Emission, Transition>,

    pub(crate) layers: Layers,
}

impl<'a, Emmis, Trans> Transition<'a, Emmis, Trans>
where
    Emmis: EmissionStrategy,
    Trans: TransitionStrategy,
{
    /// Creates a new transition graph from the input points and heuristics.
    ///
    /// ### Warning
    ///
    /// This function is expensive. Unlike many other `::new(..)` functions, this
    /// function calls out to the [`LayerGenerator`], scanning the map for the
    /// candidates of every input point.
    pub fn new(
        map: &'a Graph,
        points: &[Point],
        heuristics: &'a CostingStrategies<Emmis, Trans>,
        search_distance: f64,
    ) -> Transition<'a, Emmis, Trans> {
        let generator = LayerGenerator::new(map, heuristics, search_distance);
        let layers = generator.with_points(points);

        Transition {
            map,
            heuristics,
            layers,
        }
    }

    pub fn map(&self) -> &'a Graph {
        self.map
    }

    pub fn heuristics(&self) -> &'a CostingStrategies<Emmis, Trans> {
        self.heuristics
    }

    /// The candidate layers, one per input point.
    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    /// Solves the transition graph, using the provided [`Solver`] and [`Router`].
    pub fn solve(&self, solver: impl Solver, router: impl Router) -> Collapse {
        // Indirection to call.
        solver.solve(self, router)
    }
}
