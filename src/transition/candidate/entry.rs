use crate::geo::PlanarScale;
use crate::graph::{RoadSegment, SegmentEnd, SegmentId};

use geo::Point;

/// The location of a candidate within a solution.
/// This identifies which layer the candidate came from, and which node in the layer it was.
///
/// This is useful for debugging purposes to understand a node without requiring further context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandidateLocation {
    pub layer_id: usize,
    pub node_id: usize,
}

/// Represents the candidate selected within a layer.
///
/// This value holds the [segment](#field.segment) of the road network it is sourced
/// from, along with the projected candidate [position](#field.position).
///
/// It further contains the log-emission probability [emission](#field.emission) of
/// choosing this candidate and the candidate's location within the solution,
/// [location](#field.location).
///
/// Two candidates may share a position while belonging to different segments,
/// for example where roads meet. They are told apart by their segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub segment: SegmentId,
    pub edge: RoadSegment,
    pub position: Point,
    pub emission: f64,

    pub location: CandidateLocation,
}

impl Candidate {
    pub fn new(
        segment: SegmentId,
        edge: RoadSegment,
        position: Point,
        emission: f64,
        location: CandidateLocation,
    ) -> Self {
        Self {
            segment,
            edge,
            position,
            emission,
            location,
        }
    }

    /// Calculates the offset, in meters, from the candidate to one end of its segment.
    ///
    /// The below diagram images the offsets for an intermediate candidate position.
    ///
    /// ```text
    ///                 Candidate
    ///          Source     |     Target
    ///        +------------|------------+
    ///         <--offset-->
    /// ```
    pub fn offset(&self, scale: &PlanarScale, end: SegmentEnd) -> f64 {
        scale.distance(&self.position, &self.edge.endpoint(end))
    }

    /// If both candidates were projected onto the same road segment.
    #[inline]
    pub fn shares_segment(&self, other: &Candidate) -> bool {
        self.segment == other.segment
    }
}
