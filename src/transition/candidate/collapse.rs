use crate::transition::{Candidate, Layer};

use geo::{Distance, Euclidean, LineString, Point};

/// How the output position of a single input point was chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// The candidate lies upon the decoded maximum-likelihood path.
    Decoded(Candidate),

    /// No decoded state covered this point, so the candidate
    /// closest to the input point was used instead.
    Nearest(Candidate),

    /// The point had no candidates, the input point is returned as-is.
    Observation,
}

/// The matched outcome of a single input point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchedStep {
    /// The input position.
    pub origin: Point,

    /// The output position.
    pub position: Point,

    pub resolution: Resolution,
}

impl MatchedStep {
    pub(crate) fn decoded(origin: Point, candidate: Candidate) -> Self {
        Self {
            origin,
            position: candidate.position,
            resolution: Resolution::Decoded(candidate),
        }
    }

    /// Resolves a layer without a decoded state, using the candidate nearest to the
    /// origin (by raw degree-space distance), or the origin itself if there are none.
    pub(crate) fn fallback(layer: &Layer) -> Self {
        let nearest = layer.candidates.iter().min_by(|a, b| {
            Euclidean
                .distance(a.position, layer.origin)
                .total_cmp(&Euclidean.distance(b.position, layer.origin))
        });

        match nearest {
            Some(candidate) => Self {
                origin: layer.origin,
                position: candidate.position,
                resolution: Resolution::Nearest(*candidate),
            },
            None => Self {
                origin: layer.origin,
                position: layer.origin,
                resolution: Resolution::Observation,
            },
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self.resolution, Resolution::Decoded(_))
    }
}

/// The collapsed solution to a transition graph.
///
/// Contains exactly one [`MatchedStep`] for every input point, in input order.
#[derive(Clone, Debug, Default)]
pub struct Collapse {
    pub steps: Vec<MatchedStep>,

    /// The layers at which decoding restarted as no candidate could be
    /// reached from the previous layer.
    pub restarts: Vec<usize>,

    /// The log-probability of the decoded path's terminal state.
    /// This is `None` if no layer produced any candidates.
    pub score: Option<f64>,
}

impl Collapse {
    pub(crate) fn new(steps: Vec<MatchedStep>, restarts: Vec<usize>, score: Option<f64>) -> Self {
        Self {
            steps,
            restarts,
            score,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The matched position of every input point.
    pub fn positions(&self) -> Vec<Point> {
        self.steps.iter().map(|step| step.position).collect()
    }

    /// Returns the candidates upon the decoded path.
    /// Points resolved through a fallback are not included.
    pub fn matched(&self) -> Vec<Candidate> {
        self.steps
            .iter()
            .filter_map(|step| match step.resolution {
                Resolution::Decoded(candidate) => Some(candidate),
                _ => None,
            })
            .collect()
    }

    /// Returns the matched positions as a [`LineString`].
    pub fn linestring(&self) -> LineString {
        self.positions().into_iter().collect()
    }
}
