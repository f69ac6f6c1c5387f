use geo::{Distance, Euclidean, Point};

/// Roughly the length of one degree of latitude, in meters.
pub const DEFAULT_METERS_PER_DEGREE: f64 = 111_000.0;

/// A fixed, locally-flat projection between degree-space and meters.
///
/// Distances are the planar Euclidean distance between two `(lng, lat)`
/// pairs, multiplied by a single meters-per-degree constant. Longitudinal
/// degrees shrink towards the poles, so this approximation is only accurate
/// for small extents at low to moderate latitudes.
///
/// ```rust
/// use geo::point;
/// use snapline::PlanarScale;
///
/// let scale = PlanarScale::default();
/// let a = point! { x: 0.0, y: 0.0 };
/// let b = point! { x: 0.0, y: 0.001 };
///
/// assert!((scale.distance(&a, &b) - 111.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarScale {
    meters_per_degree: f64,
}

impl Default for PlanarScale {
    fn default() -> Self {
        Self::new(DEFAULT_METERS_PER_DEGREE)
    }
}

impl PlanarScale {
    pub const fn new(meters_per_degree: f64) -> Self {
        Self { meters_per_degree }
    }

    #[inline]
    pub const fn meters_per_degree(&self) -> f64 {
        self.meters_per_degree
    }

    /// Planar distance between two points, in meters.
    #[inline]
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        Euclidean.distance(*a, *b) * self.meters_per_degree
    }

    /// Converts a length in meters into degree-space.
    #[inline]
    pub fn to_degrees(&self, meters: f64) -> f64 {
        meters / self.meters_per_degree
    }
}
