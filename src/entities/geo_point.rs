use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Like [`GeoPoint::new`], but rejects points that are not on the globe.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let point = Self::new(latitude, longitude);

        if !point.is_valid() {
            return Err(invalid_input_error());
        }

        Ok(point)
    }

    /// Finite, latitude in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.longitude, point.latitude)
    }
}

impl From<geo_types::Point<f64>> for GeoPoint {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

/// Directions APIs take `longitude,latitude` pairs.
impl From<GeoPoint> for String {
    fn from(point: GeoPoint) -> Self {
        let point: geo_types::Point<f64> = point.into();
        format!("{},{}", point.x(), point.y())
    }
}

#[test]
fn lng_lat_order() {
    let point = GeoPoint::new(10.5, 20.25);

    let formatted: String = point.into();
    assert_eq!(formatted, "20.25,10.5");

    let geo: geo_types::Point<f64> = point.into();
    assert_eq!(GeoPoint::from(geo), point);
}

#[test]
fn rejects_points_off_the_globe() {
    assert!(GeoPoint::checked(-90.0, 180.0).is_ok());
    assert!(GeoPoint::checked(52.5, 13.4).is_ok());

    for (lat, lon) in [
        (f64::NAN, 5.0),
        (5.0, f64::NAN),
        (f64::INFINITY, 0.0),
        (0.0, f64::NEG_INFINITY),
        (500.0, 0.0),
        (-90.5, 0.0),
        (0.0, 180.1),
    ] {
        assert_eq!(GeoPoint::checked(lat, lon), Err(invalid_input_error()));
    }
}
