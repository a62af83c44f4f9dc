use geo::{Distance, Geodesic};
use geo_types::Point;

use crate::entities::{Location, Place};
use crate::error::{invalid_input_error, partial_proximity_error, Error};

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 100;

/// Keeps places whose geodesic distance to `center` is at most `radius` meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proximity {
    center: Location,
    radius: f64,
}

impl Proximity {
    pub fn new(center: Location, radius: f64) -> Result<Self, Error> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(invalid_input_error("radius must be a non-negative number of meters"));
        }

        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Location {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn contains(&self, location: Location) -> bool {
        Geodesic::distance(Point::from(self.center), Point::from(location)) <= self.radius
    }
}

/// A validated listing request: pagination window plus optional filters,
/// combined with AND.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceQuery {
    offset: i64,
    limit: i64,
    name: Option<String>,
    proximity: Option<Proximity>,
}

impl Default for PlaceQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
            name: None,
            proximity: None,
        }
    }
}

impl PlaceQuery {
    pub fn new(
        offset: Option<i64>,
        limit: Option<i64>,
        name: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius: Option<f64>,
    ) -> Result<Self, Error> {
        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(invalid_input_error("offset must not be negative"));
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if !(0..=MAX_LIMIT).contains(&limit) {
            return Err(invalid_input_error(format!(
                "limit must be between 0 and {}",
                MAX_LIMIT
            )));
        }

        let proximity = match (latitude, longitude, radius) {
            (None, None, None) => None,
            (Some(latitude), Some(longitude), Some(radius)) => {
                Some(Proximity::new(Location::new(latitude, longitude)?, radius)?)
            }
            _ => return Err(partial_proximity_error()),
        };

        Ok(Self {
            offset,
            limit,
            name,
            proximity,
        })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn proximity(&self) -> Option<&Proximity> {
        self.proximity.as_ref()
    }

    /// Filter predicate only; pagination is applied by the caller.
    pub fn matches(&self, place: &Place) -> bool {
        if let Some(name) = &self.name {
            if !place.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(proximity) = &self.proximity {
            if !proximity.contains(place.location) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: i32, name: &str, latitude: f64, longitude: f64) -> Place {
        Place {
            id,
            name: name.into(),
            description: "".into(),
            location: Location::new(latitude, longitude).unwrap(),
        }
    }

    #[test]
    fn defaults() {
        let query = PlaceQuery::new(None, None, None, None, None, None).unwrap();

        assert_eq!(query, PlaceQuery::default());
        assert_eq!(query.limit(), 100);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn limit_above_cap_is_rejected() {
        let err = PlaceQuery::new(None, Some(101), None, None, None, None).unwrap_err();
        assert!(err.is_validation_error());

        assert!(PlaceQuery::new(None, Some(100), None, None, None, None).is_ok());
        assert!(PlaceQuery::new(None, Some(-1), None, None, None, None).is_err());
        assert!(PlaceQuery::new(Some(-1), None, None, None, None, None).is_err());
    }

    #[test]
    fn proximity_requires_all_three() {
        let partials = [
            (Some(40.0), Some(-74.0), None),
            (Some(40.0), None, Some(10.0)),
            (None, Some(-74.0), Some(10.0)),
            (Some(40.0), None, None),
            (None, None, Some(10.0)),
        ];

        for (latitude, longitude, radius) in partials {
            let err = PlaceQuery::new(None, None, None, latitude, longitude, radius).unwrap_err();
            assert_eq!(err, partial_proximity_error());
        }
    }

    #[test]
    fn proximity_values_are_validated() {
        assert!(PlaceQuery::new(None, None, None, Some(91.0), Some(0.0), Some(1.0)).is_err());
        assert!(PlaceQuery::new(None, None, None, Some(0.0), Some(181.0), Some(1.0)).is_err());
        assert!(PlaceQuery::new(None, None, None, Some(0.0), Some(0.0), Some(-1.0)).is_err());
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let query = PlaceQuery::new(None, None, Some("new".into()), None, None, None).unwrap();

        assert!(query.matches(&place(1, "New York", 40.7128, -74.006)));
        assert!(query.matches(&place(2, "Newark", 40.7357, -74.1724)));
        assert!(!query.matches(&place(3, "Chicago", 41.8781, -87.6298)));
    }

    #[test]
    fn proximity_filter_uses_geodesic_distance() {
        let query = PlaceQuery::new(
            None,
            None,
            None,
            Some(40.7099),
            Some(-74.0475),
            Some(50000.0),
        )
        .unwrap();

        assert!(query.matches(&place(1, "New York", 40.7128, -74.006)));
        assert!(query.matches(&place(2, "Newark", 40.7357, -74.1724)));
        assert!(!query.matches(&place(3, "Chicago", 41.8781, -87.6298)));
    }

    #[test]
    fn zero_radius_matches_only_the_same_point() {
        let center = Location::new(40.7128, -74.006).unwrap();
        let proximity = Proximity::new(center, 0.0).unwrap();

        assert!(proximity.contains(center));
        assert!(!proximity.contains(Location::new(40.7129, -74.006).unwrap()));
    }

    #[test]
    fn filters_are_combined() {
        let query = PlaceQuery::new(
            None,
            None,
            Some("york".into()),
            Some(40.7099),
            Some(-74.0475),
            Some(50000.0),
        )
        .unwrap();

        assert!(query.matches(&place(1, "New York", 40.7128, -74.006)));
        assert!(!query.matches(&place(2, "Newark", 40.7357, -74.1724)));
    }
}
