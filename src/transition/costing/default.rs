use crate::config::MatcherConfig;
use crate::transition::*;

/// The pairing of emission and transition strategies used by a solver.
#[derive(Clone, Debug)]
pub struct CostingStrategies<E, T>
where
    E: EmissionStrategy,
    T: TransitionStrategy,
{
    emission: E,
    transition: T,
}

impl<E, T> CostingStrategies<E, T>
where
    E: EmissionStrategy,
    T: TransitionStrategy,
{
    pub fn new(emission: E, transition: T) -> Self {
        Self {
            emission,
            transition,
        }
    }
}

impl Default for CostingStrategies<GaussianEmission, ExponentialTransition> {
    fn default() -> Self {
        CostingStrategies::new(GaussianEmission::default(), ExponentialTransition::default())
    }
}

impl CostingStrategies<GaussianEmission, ExponentialTransition> {
    /// The default strategies, parameterised by the configured σ and β.
    pub fn from_config(config: &MatcherConfig) -> Self {
        CostingStrategies::new(
            GaussianEmission::new(config.emission_sigma),
            ExponentialTransition::new(config.transition_beta),
        )
    }
}

impl<E, T> Costing<E, T> for CostingStrategies<E, T>
where
    T: TransitionStrategy,
    E: EmissionStrategy,
{
    #[inline]
    fn emission(&self, context: EmissionContext) -> f64 {
        self.emission.log_probability(context)
    }

    #[inline]
    fn transition(&self, context: TransitionContext) -> f64 {
        self.transition.log_probability(context)
    }
}
