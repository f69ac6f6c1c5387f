use crate::transition::*;

/// Defines a structure which can be supplied to the [`Transition::solve`] function
/// in order to solve the transition graph.
///
/// Functionality is implemented using the [`Solver::solve`] method.
pub trait Solver {
    /// Decodes the most likely sequence of candidates across every layer
    /// of the transition graph, scoring transitions with route lengths
    /// provided by the `router`.
    ///
    /// Solving never fails. Layers which cannot be decoded are resolved
    /// through fallbacks, so the solution always holds one step per layer.
    fn solve<E, T, R>(&self, transition: &Transition<E, T>, router: R) -> Collapse
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
        R: Router;
}
