use crate::transition::{Candidate, Strategy};

pub trait TransitionStrategy: for<'a> Strategy<TransitionContext<'a>> {}
impl<T> TransitionStrategy for T where T: for<'a> Strategy<TransitionContext<'a>> {}

#[derive(Clone, Copy, Debug)]
pub struct TransitionContext<'a> {
    /// The source candidate, within the prior layer.
    pub source_candidate: &'a Candidate,

    /// The target candidate, within the current layer.
    pub target_candidate: &'a Candidate,

    pub lengths: TransitionLengths,
}

impl<'a> TransitionContext<'a> {
    pub fn new(
        source_candidate: &'a Candidate,
        target_candidate: &'a Candidate,
        lengths: TransitionLengths,
    ) -> Self {
        Self {
            source_candidate,
            target_candidate,
            lengths,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionLengths {
    /// The planar distance (meters) between the two input points
    pub straightline_distance: f64,

    /// The length (meters) of the shortest route between the candidates
    pub route_length: f64,
}

impl TransitionLengths {
    /// The absolute difference between the straightline distance separating
    /// the input points, and the route length between their candidates.
    ///
    /// For example:
    /// -   If two points were `100m` apart, but had an optimal route
    ///     between their candidates of `130m`, the discrepancy would be `30m`.
    /// -   If the route were instead `90m`, the discrepancy is `10m`.
    #[inline]
    pub fn discrepancy(&self) -> f64 {
        (self.straightline_distance - self.route_length).abs()
    }
}

/// 10 meters, the scale of route discrepancies.
pub const DEFAULT_TRANSITION_BETA: f64 = 10.0;

/// Scores a transition by an exponential over its length [discrepancy](TransitionLengths::discrepancy).
///
/// ```math
/// p(δ) = 1 / β · e^(-δ / β)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialTransition {
    /// The scale (β) of the distribution, in meters.
    pub beta: f64,
}

impl Default for ExponentialTransition {
    fn default() -> Self {
        Self {
            beta: DEFAULT_TRANSITION_BETA,
        }
    }
}

impl ExponentialTransition {
    pub const fn new(beta: f64) -> Self {
        Self { beta }
    }
}

impl<'a> Strategy<TransitionContext<'a>> for ExponentialTransition {
    fn calculate(&self, context: TransitionContext<'a>) -> Option<f64> {
        Some(self.log_probability(context).exp())
    }

    #[inline]
    fn log_probability(&self, context: TransitionContext<'a>) -> f64 {
        -self.beta.ln() - context.lengths.discrepancy() / self.beta
    }
}
