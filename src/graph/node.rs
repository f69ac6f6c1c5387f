use geo::{point, Point};

/// Fixed-precision steps per degree used to quantize node positions.
///
/// `1e-5°` is roughly `1.1m` of latitude, so endpoints closer than
/// about a meter collapse onto the same [`NodeKey`].
pub const QUANTIZATION: f64 = 100_000.0;

/// The identity of a node within the road [graph](crate::Graph).
///
/// Nodes are keyed by the integer-quantized position of a segment endpoint,
/// and the same quantization is applied when building and when querying the
/// graph. Two positions produce equal keys if, and only if, they round to the
/// same `1e-5°` cell.
///
/// ```rust
/// use geo::point;
/// use snapline::NodeKey;
///
/// let a = NodeKey::quantize(&point! { x: 151.194620, y: -33.885309 });
/// let b = NodeKey::quantize(&point! { x: 151.194621, y: -33.885311 });
///
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    lat: i64,
    lng: i64,
}

impl NodeKey {
    #[inline]
    pub fn quantize(position: &Point) -> Self {
        NodeKey {
            lat: (position.y() * QUANTIZATION).round() as i64,
            lng: (position.x() * QUANTIZATION).round() as i64,
        }
    }

    /// The center of the quantized cell.
    pub fn position(&self) -> Point {
        point! {
            x: self.lng as f64 / QUANTIZATION,
            y: self.lat as f64 / QUANTIZATION,
        }
    }
}

impl From<&Point> for NodeKey {
    fn from(value: &Point) -> Self {
        NodeKey::quantize(value)
    }
}
