use crate::transition::*;

use itertools::Itertools;
use log::{debug, warn};
use measure_time::debug_time;
#[cfg(feature = "tracing")]
use tracing::Level;

/// The best path ending at a candidate, found by the forward pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct State {
    /// The log-probability of the best path ending at this candidate.
    pub score: f64,

    /// The index of the maximising candidate within the previous layer.
    /// This is `None` for the first layer, and for layers which restarted.
    pub parent: Option<usize>,
}

/// The forward-pass output, holding a slot for every candidate of every layer.
///
/// A slot is `None` when no valid path reaches the candidate.
#[derive(Clone, Debug, Default)]
pub struct Trellis {
    pub layers: Vec<Vec<Option<State>>>,

    /// Layers whose states were reinitialised from emission alone.
    pub restarts: Vec<usize>,
}

impl Trellis {
    /// The state of a candidate, if it was reached.
    pub fn state(&self, layer_id: usize, node_id: usize) -> Option<State> {
        self.layers.get(layer_id)?.get(node_id).copied().flatten()
    }

    /// The best state within the last layer holding any state, as `(layer_id, node_id, state)`.
    /// Ties resolve to the earliest candidate.
    pub fn terminal(&self) -> Option<(usize, usize, State)> {
        self.layers.iter().enumerate().rev().find_map(|(layer_id, states)| {
            states
                .iter()
                .enumerate()
                .filter_map(|(node_id, state)| state.map(|state| (node_id, state)))
                .fold(None, |best: Option<(usize, State)>, (node_id, state)| match best {
                    Some((_, current)) if current.score >= state.score => best,
                    _ => Some((node_id, state)),
                })
                .map(|(node_id, state)| (layer_id, node_id, state))
        })
    }
}

/// Decodes the transition graph with the Viterbi algorithm, in log-space.
///
/// The forward pass scores every candidate by the best path reaching it,
/// combining the previous score, the transition into the candidate and its
/// emission. Candidates with no valid predecessor are unreached. Should an
/// entire layer be unreached, decoding restarts from that layer using
/// emission alone.
///
/// The backward pass follows parents from the best terminal state. Layers
/// not covered by the decoded path fall back onto their nearest candidate,
/// or their input point when they have no candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViterbiSolver;

impl ViterbiSolver {
    /// States seeded from emission alone, with no parent.
    fn initial(layer: &Layer) -> Vec<Option<State>> {
        layer
            .candidates
            .iter()
            .map(|candidate| {
                Some(State {
                    score: candidate.emission,
                    parent: None,
                })
            })
            .collect()
    }

    /// Scores every candidate of `target` by its best predecessor within `source`.
    fn step<E, T, R>(
        transition: &Transition<E, T>,
        router: &mut R,
        (source, source_states): (&Layer, &[Option<State>]),
        target: &Layer,
    ) -> Vec<Option<State>>
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
        R: Router,
    {
        let live = source_states
            .iter()
            .any(|state| state.is_some_and(|state| state.score.is_finite()));

        if !live || target.candidates.is_empty() {
            return vec![None; target.candidates.len()];
        }

        let scale = transition.map().scale();
        let straightline_distance = scale.distance(&source.origin, &target.origin);
        let matrix = router.distance_matrix(&source.candidates, &target.candidates);

        target
            .candidates
            .iter()
            .enumerate()
            .map(|(column, candidate)| {
                source_states
                    .iter()
                    .zip(&source.candidates)
                    .enumerate()
                    .filter_map(|(row, (state, previous))| {
                        let state = state.filter(|state| state.score.is_finite())?;
                        let route_length = matrix.get(row, column)?;

                        let lengths = TransitionLengths {
                            straightline_distance,
                            route_length,
                        };

                        let context = TransitionContext::new(previous, candidate, lengths);
                        let score = state.score
                            + transition.heuristics().transition(context)
                            + candidate.emission;

                        Some(State {
                            score,
                            parent: Some(row),
                        })
                        .filter(|state| state.score.is_finite())
                    })
                    .fold(None, |best: Option<State>, state| match best {
                        Some(current) if current.score >= state.score => best,
                        _ => Some(state),
                    })
            })
            .collect()
    }

    /// Runs the forward pass over every layer.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::DEBUG))]
    pub fn forward<E, T, R>(&self, transition: &Transition<E, T>, mut router: R) -> Trellis
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
        R: Router,
    {
        debug_time!("forward pass over {} layers", transition.layers().len());

        let mut trellis = Trellis::default();
        let Some(first) = transition.layers().first() else {
            return trellis;
        };

        trellis.layers.push(Self::initial(first));

        for (layer_id, (source, target)) in transition.layers().iter().tuple_windows().enumerate() {
            let layer_id = layer_id + 1;
            let source_states = trellis.layers.last().map(Vec::as_slice).unwrap_or_default();

            let mut states = Self::step(transition, &mut router, (source, source_states), target);
            if !target.candidates.is_empty() && states.iter().all(Option::is_none) {
                warn!(
                    "Layer {} has no candidate reachable from layer {}, restarting the match",
                    layer_id,
                    layer_id - 1
                );

                states = Self::initial(target);
                trellis.restarts.push(layer_id);
            }

            debug!(
                "Layer {}: {} of {} candidates reached",
                layer_id,
                states.iter().flatten().count(),
                states.len()
            );

            trellis.layers.push(states);
        }

        trellis
    }

    /// Follows parents back from the best terminal state, resolving
    /// every layer the path does not cover through its fallback.
    pub fn backtrack(&self, layers: &Layers, trellis: &Trellis) -> Collapse {
        let mut steps = vec![None; layers.len()];

        let terminal = trellis.terminal();
        let mut cursor = terminal.map(|(layer_id, node_id, _)| (layer_id, node_id));

        while let Some((layer_id, node_id)) = cursor {
            let Some(state) = trellis.state(layer_id, node_id) else {
                break;
            };

            let Some(layer) = layers.get(layer_id) else {
                break;
            };

            if let (Some(step), Some(candidate)) =
                (steps.get_mut(layer_id), layer.candidates.get(node_id))
            {
                *step = Some(MatchedStep::decoded(layer.origin, *candidate));
            }

            cursor = state
                .parent
                .zip(layer_id.checked_sub(1))
                .map(|(parent, previous)| (previous, parent));
        }

        let steps = steps
            .into_iter()
            .zip(layers.iter())
            .map(|(step, layer)| step.unwrap_or_else(|| MatchedStep::fallback(layer)))
            .collect::<Vec<_>>();

        let decoded = steps.iter().filter(|step| step.is_decoded()).count();
        debug!(
            "Decoded {} of {} layers, {} restarts",
            decoded,
            steps.len(),
            trellis.restarts.len()
        );

        Collapse::new(
            steps,
            trellis.restarts.clone(),
            terminal.map(|(_, _, state)| state.score),
        )
    }
}

impl Solver for ViterbiSolver {
    fn solve<E, T, R>(&self, transition: &Transition<E, T>, router: R) -> Collapse
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
        R: Router,
    {
        let trellis = self.forward(transition, router);
        self.backtrack(transition.layers(), &trellis)
    }
}
