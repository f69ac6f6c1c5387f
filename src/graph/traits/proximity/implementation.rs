use crate::graph::Scan;
use crate::graph::{Graph, IndexedSegment};

use geo::{point, Distance, Euclidean, Point};
use rstar::AABB;

#[cfg(feature = "tracing")]
use tracing::Level;

impl Scan for Graph {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    #[inline]
    fn scan_segments<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a IndexedSegment> {
        let radius = self.scale.to_degrees(distance);

        let bottom_left = point! { x: point.x() - radius, y: point.y() - radius };
        let top_right = point! { x: point.x() + radius, y: point.y() + radius };

        let bbox = AABB::from_corners(bottom_left, top_right);
        self.index().locate_in_envelope_intersecting(&bbox)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn scan_segments_projected<'a>(
        &'a self,
        point: &Point,
        distance: f64,
    ) -> Vec<(Point, &'a IndexedSegment)> {
        let radius = self.scale.to_degrees(distance);

        let mut projected = self
            .scan_segments(point, distance)
            .filter_map(|indexed| {
                let position = indexed.segment.project(point);

                // Compared in degree-space, as the radius was converted.
                (Euclidean.distance(*point, position) <= radius).then_some((position, indexed))
            })
            .collect::<Vec<_>>();

        projected.sort_unstable_by_key(|(_, indexed)| indexed.id);
        projected
    }
}
