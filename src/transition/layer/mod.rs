#[doc(hidden)]
pub mod generator;
#[doc(inline)]
pub use generator::*;

use crate::transition::Candidate;
use geo::Point;

/// A layer within the transition graph, one per input point.
///
/// This represents a set of [candidates](#field.candidates),
/// and the [origin](#field.origin) point, from which they originate.
#[derive(Clone, Debug)]
pub struct Layer {
    /// All the candidates detected within the layer, as
    /// positions the [origin](#field.origin) could be matched to.
    ///
    /// This may be empty, if no road lies within the search radius.
    pub candidates: Vec<Candidate>,

    /// The input position within the input to the transition solver.
    pub origin: Point,
}

#[derive(Clone, Debug, Default)]
pub struct Layers {
    pub layers: Vec<Layer>,
}

impl Layers {
    pub fn last(&self) -> Option<&Layer> {
        self.layers.last()
    }

    pub fn first(&self) -> Option<&Layer> {
        self.layers.first()
    }

    pub fn get(&self, layer_id: usize) -> Option<&Layer> {
        self.layers.get(layer_id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Layer> + ExactSizeIterator {
        self.layers.iter()
    }
}

impl FromIterator<Layer> for Layers {
    fn from_iter<I: IntoIterator<Item = Layer>>(layers: I) -> Self {
        Self {
            layers: layers.into_iter().collect(),
        }
    }
}
