//! Geometric primitives used by the matcher.
//!
//! All positions are [`geo::Point`]s in degrees, where `x` is the longitude
//! and `y` is the latitude. Distances are measured in degree-space and scaled
//! to meters through a [`PlanarScale`].

#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod planar;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use coord::latlng::LatLng;
#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use planar::{PlanarScale, DEFAULT_METERS_PER_DEGREE};
