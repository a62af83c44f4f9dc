use geo_types::{Geometry, Point};

use crate::error::{invalid_location_error, unexpected_error, Error};

/// A WGS84 coordinate pair. Both components are always present and in range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid_location_error());
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid_location_error());
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

// x is longitude, y is latitude
impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        Point::new(location.longitude, location.latitude)
    }
}

impl From<Location> for Geometry<f64> {
    fn from(location: Location) -> Self {
        Geometry::Point(location.into())
    }
}

impl TryFrom<Point<f64>> for Location {
    type Error = Error;

    fn try_from(point: Point<f64>) -> Result<Self, Self::Error> {
        Location::new(point.y(), point.x())
    }
}

impl TryFrom<Geometry<f64>> for Location {
    type Error = Error;

    fn try_from(geometry: Geometry<f64>) -> Result<Self, Self::Error> {
        match geometry {
            Geometry::Point(point) => point.try_into(),
            _ => Err(unexpected_error("stored location is not a point")),
        }
    }
}
