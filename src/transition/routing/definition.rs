use crate::transition::Candidate;

/// Route lengths (meters) from a set of source candidates to a set of
/// target candidates, stored row-major by source.
///
/// An entry of `None` marks the pair as unreachable.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    rows: usize,
    columns: usize,
    entries: Vec<Option<f64>>,
}

impl DistanceMatrix {
    /// A matrix where no target is reachable from any source.
    pub fn unreachable(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            entries: vec![None; rows * columns],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The route length from source `row` to target `column`, if reachable.
    /// Positions outside the matrix are unreachable.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.rows || column >= self.columns {
            return None;
        }

        self.entries[row * self.columns + column]
    }

    /// Records the route length between a pair. Out of bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, distance: Option<f64>) {
        if row < self.rows && column < self.columns {
            self.entries[row * self.columns + column] = distance;
        }
    }

    /// The number of reachable pairs.
    pub fn reachable(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }
}

/// Provides the route lengths used to score transitions between layers.
///
/// Routers take `&mut self` so an implementation may memoise searches
/// across the calls made within a single match. A router is not shared
/// between concurrent matches, each match owns its own.
pub trait Router {
    /// Route lengths from every source candidate to every target candidate.
    ///
    /// The returned matrix must have `sources.len()` rows and
    /// `targets.len()` columns.
    fn distance_matrix(&mut self, sources: &[Candidate], targets: &[Candidate]) -> DistanceMatrix;
}

impl<R> Router for &mut R
where
    R: Router + ?Sized,
{
    fn distance_matrix(&mut self, sources: &[Candidate], targets: &[Candidate]) -> DistanceMatrix {
        (**self).distance_matrix(sources, targets)
    }
}
