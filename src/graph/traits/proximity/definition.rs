use crate::graph::IndexedSegment;

use geo::Point;

/// Trait containing utility functions to find segments upon a root structure.
pub trait Scan {
    /// A function which returns an unsorted iterator of [`IndexedSegment`] references
    /// whose envelope lies within the provided `distance` (meters) of the input [point](Point).
    ///
    /// ### Note
    /// This function implements a square-scan.
    ///
    /// Therefore, it bounds the search to a square around the origin, and will
    /// return segments which are further than `distance` from the origin. It must
    /// be refined, as is done in [`Scan::scan_segments_projected`].
    fn scan_segments<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a IndexedSegment>;

    /// Returns the projection of the input [point](Point) onto every segment for which
    /// the projection lies within `distance` (meters) of the point.
    ///
    /// The returned set is exact, it is the same set a linear scan over all segments
    /// would produce. Entries are ordered by ascending segment id, which carries no
    /// meaning beyond making the output reproducible.
    ///
    /// An empty vector is a normal outcome for points far from any road.
    fn scan_segments_projected<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> Vec<(Point, &'a IndexedSegment)>;
}
