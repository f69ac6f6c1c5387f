use crate::geo::{GeoError, LatLng, PlanarScale};

use approx::assert_relative_eq;
use geo::{point, Point};

#[test]
fn planar_distance_scales_degrees() {
    let scale = PlanarScale::new(100_000.0);
    let a = point! { x: 10.0, y: 10.0 };
    let b = point! { x: 10.0003, y: 10.0004 };

    assert_relative_eq!(scale.distance(&a, &b), 50.0, max_relative = 1e-9);
    assert_relative_eq!(scale.to_degrees(50.0), 0.0005);
}

#[test]
fn latlng_rejects_out_of_range() {
    assert!(matches!(
        LatLng::from_degree(91.0, 0.0),
        Err(GeoError::InvalidCoordinate(_))
    ));
    assert!(LatLng::from_degree(0.0, -180.5).is_err());
    assert!(LatLng::from_degree(f64::NAN, 0.0).is_err());
    assert!(LatLng::from_degree(-90.0, 180.0).is_ok());
}

#[test]
fn latlng_point_conversion_swaps_axes() {
    let latlng = LatLng::from_degree(-33.885309, 151.19462).expect("valid coordinate");
    let point = Point::from(latlng);

    assert_eq!(point.x(), 151.19462);
    assert_eq!(point.y(), -33.885309);
    assert_eq!(LatLng::from(point), latlng);
}
