use geo::{point, Line, LineString, Point};
use rstar::AABB;
use strum::EnumIter;

use crate::geo::PlanarScale;

/// The index of a segment within the [graph](crate::Graph) it was loaded into.
pub type SegmentId = usize;

/// One end of a [`RoadSegment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum SegmentEnd {
    Source,
    Target,
}

/// A straight piece of road geometry between two endpoints.
///
/// Segments are undirected. They are the unit of projection for candidate
/// generation, and each one becomes an edge between its quantized endpoints
/// within the road graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadSegment {
    pub source: Point,
    pub target: Point,
}

impl RoadSegment {
    pub const fn new(source: Point, target: Point) -> Self {
        Self { source, target }
    }

    /// Splits a polyline, such as the geometry of a road way, into its
    /// consecutive segments. Polylines with fewer than two points yield nothing.
    pub fn from_polyline(polyline: &LineString) -> impl Iterator<Item = RoadSegment> + '_ {
        polyline.lines().map(RoadSegment::from)
    }

    #[inline]
    pub const fn endpoint(&self, end: SegmentEnd) -> Point {
        match end {
            SegmentEnd::Source => self.source,
            SegmentEnd::Target => self.target,
        }
    }

    /// Planar length of the segment, in meters.
    #[inline]
    pub fn length(&self, scale: &PlanarScale) -> f64 {
        scale.distance(&self.source, &self.target)
    }

    /// The closest position upon the segment to `point`.
    ///
    /// The projection parameter is clamped to `[0, 1]`, so points beyond either
    /// end snap onto that endpoint. Zero-length segments project onto their source.
    ///
    /// ```text
    ///                     point
    ///                       |
    ///        +--------------x-----------+
    ///      Source       projected     Target
    /// ```
    pub fn project(&self, point: &Point) -> Point {
        let dx = self.target.x() - self.source.x();
        let dy = self.target.y() - self.source.y();

        let length_squared = dx * dx + dy * dy;
        if length_squared == 0.0 {
            return self.source;
        }

        let t = ((point.x() - self.source.x()) * dx + (point.y() - self.source.y()) * dy)
            / length_squared;
        let t = t.clamp(0.0, 1.0);

        point! {
            x: self.source.x() + t * dx,
            y: self.source.y() + t * dy,
        }
    }
}

impl From<Line> for RoadSegment {
    fn from(line: Line) -> Self {
        RoadSegment::new(line.start_point(), line.end_point())
    }
}

/// A [`RoadSegment`] stored within the spatial index alongside its [`SegmentId`].
#[derive(Clone, Copy, Debug)]
pub struct IndexedSegment {
    pub id: SegmentId,
    pub segment: RoadSegment,
}

impl rstar::RTreeObject for IndexedSegment {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.segment.source, self.segment.target)
    }
}
