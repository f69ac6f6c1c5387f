use crate::transition::*;

pub trait Strategy<Ctx> {
    /// The probability density of the context, which
    /// you must implement. A density of `None` is impossible.
    fn calculate(&self, context: Ctx) -> Option<f64>;

    /// The natural logarithm of the [calculated](Strategy::calculate) density.
    ///
    /// Solvers only ever consume this form, since products of many small
    /// densities underflow. Strategies with a closed-form logarithm should
    /// override this to avoid the underflow within the density itself.
    #[inline]
    fn log_probability(&self, context: Ctx) -> f64 {
        self.calculate(context).map_or(f64::NEG_INFINITY, f64::ln)
    }
}

pub trait Costing<Emission, Transition>
where
    Transition: TransitionStrategy,
    Emission: EmissionStrategy,
{
    /// The log-emission probability of a candidate.
    fn emission(&self, context: EmissionContext) -> f64;

    /// The log-transition probability between two candidates.
    fn transition(&self, context: TransitionContext) -> f64;
}
