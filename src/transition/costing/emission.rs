use crate::transition::Strategy;

use std::f64::consts::TAU;

pub trait EmissionStrategy: for<'a> Strategy<EmissionContext<'a>> {}
impl<T> EmissionStrategy for T where T: for<'a> Strategy<EmissionContext<'a>> {}

#[derive(Clone, Copy, Debug)]
pub struct EmissionContext<'a> {
    /// The proposed (candidate) position to be matched onto.
    ///
    /// This belongs to the network, and is not provided
    /// as input to the match query.
    pub candidate_position: &'a geo::Point,

    /// The position the costing method is matching.
    ///
    /// This belongs to the un-matched trip, as the position
    /// which must be matched upon the network.
    pub source_position: &'a geo::Point,

    /// The planar distance (in meters) between the source and candidate positions.
    pub distance: f64,
}

impl<'a> EmissionContext<'a> {
    pub fn new(candidate: &'a geo::Point, source: &'a geo::Point, distance: f64) -> Self {
        Self {
            candidate_position: candidate,
            source_position: source,
            distance,
        }
    }
}

/// 4.07 meters, the GPS noise measured by Newson & Krumm.
pub const DEFAULT_EMISSION_SIGMA: f64 = 4.07;

/// Scores a candidate by a zero-mean gaussian over its distance to the source.
///
/// ```math
/// p(d) = 1 / (√(2π) σ) · e^(-½ (d / σ)²)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianEmission {
    /// The standard deviation (σ) of GPS noise, in meters.
    pub sigma: f64,
}

impl Default for GaussianEmission {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_EMISSION_SIGMA,
        }
    }
}

impl GaussianEmission {
    pub const fn new(sigma: f64) -> Self {
        Self { sigma }
    }
}

impl<'a> Strategy<EmissionContext<'a>> for GaussianEmission {
    fn calculate(&self, context: EmissionContext<'a>) -> Option<f64> {
        Some(self.log_probability(context).exp())
    }

    #[inline]
    fn log_probability(&self, context: EmissionContext<'a>) -> f64 {
        let normalised = context.distance / self.sigma;
        -(TAU.sqrt() * self.sigma).ln() - 0.5 * normalised * normalised
    }
}
