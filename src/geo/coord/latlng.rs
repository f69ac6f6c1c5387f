use std::fmt::{Debug, Formatter};

use geo::{point, Point};

use crate::geo::error::GeoError;

pub type Degree = f64;

/// `LatLng`
/// The latitude, longitude pair structure, geotags an item with a location.
///
/// ```rust
/// use snapline::LatLng;
///
/// let latlng = LatLng::from_degree(-33.8853, 151.1946).unwrap();
/// assert_eq!(format!("{latlng:?}"), "POINT(151.1946 -33.8853)");
/// ```
#[derive(Clone, Copy, PartialOrd, PartialEq)]
pub struct LatLng {
    lat: Degree,
    lng: Degree,
}

impl LatLng {
    /// Constructs a `LatLng` from degrees, rejecting values which
    /// cannot describe a position on the globe.
    pub fn from_degree(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        if !(-90f64..=90f64).contains(&lat) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be within -90 and 90. Given: {}",
                lat
            )));
        }

        if !(-180f64..=180f64).contains(&lng) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be within -180 and 180. Given: {}",
                lng
            )));
        }

        Ok(Self::from_degree_unchecked(lat, lng))
    }

    pub const fn from_degree_unchecked(lat: Degree, lng: Degree) -> Self {
        LatLng { lat, lng }
    }

    pub const fn lat(&self) -> Degree {
        self.lat
    }

    pub const fn lng(&self) -> Degree {
        self.lng
    }

    /// Returns a (`lng`, `lat`) pair
    pub const fn expand(&self) -> (Degree, Degree) {
        (self.lng, self.lat)
    }
}

impl Debug for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng, self.lat)
    }
}

impl From<LatLng> for Point {
    fn from(value: LatLng) -> Self {
        point! { x: value.lng, y: value.lat }
    }
}

impl From<Point> for LatLng {
    fn from(value: Point) -> Self {
        LatLng::from_degree_unchecked(value.y(), value.x())
    }
}
