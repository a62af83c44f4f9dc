//! Mapping between the JSON shapes on the wire and the entities.
//!
//! Two coordinate encodings exist; a deployment picks exactly one of them
//! through [`CoordinateFormat`]:
//!
//! - `object`: `{"latitude": 40.7128, "longitude": -74.006}`
//! - `csv`: `"40.7128,-74.006"`

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::entities::{Location, NewPlace, Place};
use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CoordinateFormat {
    #[default]
    Object,
    Csv,
}

impl FromStr for CoordinateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "object" => Ok(Self::Object),
            "csv" | "csv_string" => Ok(Self::Csv),
            other => Err(format!("unknown coordinate format {:?}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireLocation {
    Object { latitude: f64, longitude: f64 },
    Csv(String),
}

#[derive(Debug, Deserialize)]
pub struct CreatePlaceParams {
    pub name: String,
    pub description: String,
    pub location: WireLocation,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub location: WireLocation,
}

impl CoordinateFormat {
    pub fn decode(&self, location: WireLocation) -> Result<Location, Error> {
        match (*self, location) {
            (Self::Object, WireLocation::Object { latitude, longitude }) => {
                Location::new(latitude, longitude)
            }
            (Self::Csv, WireLocation::Csv(value)) => parse_csv(&value),
            (Self::Object, WireLocation::Csv(_)) => Err(invalid_input_error(
                "location must be an object with latitude and longitude",
            )),
            (Self::Csv, WireLocation::Object { .. }) => Err(invalid_input_error(
                "location must be a \"<latitude>,<longitude>\" string",
            )),
        }
    }

    pub fn encode(&self, location: Location) -> WireLocation {
        match self {
            Self::Object => WireLocation::Object {
                latitude: location.latitude(),
                longitude: location.longitude(),
            },
            Self::Csv => WireLocation::Csv(format!(
                "{},{}",
                location.latitude(),
                location.longitude()
            )),
        }
    }

    pub fn decode_new_place(&self, params: CreatePlaceParams) -> Result<NewPlace, Error> {
        let location = self.decode(params.location)?;

        NewPlace::new(params.name, params.description, location)
    }

    pub fn encode_place(&self, place: Place) -> PlaceView {
        PlaceView {
            id: place.id,
            name: place.name,
            description: place.description,
            location: self.encode(place.location),
        }
    }
}

fn parse_csv(value: &str) -> Result<Location, Error> {
    let invalid = || invalid_input_error(format!("invalid location {:?}", value));

    let mut parts = value.split(',');
    let (latitude, longitude) = match (parts.next(), parts.next(), parts.next()) {
        (Some(latitude), Some(longitude), None) => (latitude.trim(), longitude.trim()),
        _ => return Err(invalid()),
    };

    let latitude: f64 = latitude.parse().map_err(|_| invalid())?;
    let longitude: f64 = longitude.parse().map_err(|_| invalid())?;

    Location::new(latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_round_trip() {
        let location = Location::new(40.7128, -74.006).unwrap();
        let format = CoordinateFormat::Object;

        assert_eq!(format.decode(format.encode(location)).unwrap(), location);
        assert_eq!(
            serde_json::to_value(format.encode(location)).unwrap(),
            json!({"latitude": 40.7128, "longitude": -74.006})
        );
    }

    #[test]
    fn csv_round_trip() {
        let location = Location::new(-33.868820, 151.209296).unwrap();
        let format = CoordinateFormat::Csv;

        assert_eq!(format.decode(format.encode(location)).unwrap(), location);
        assert_eq!(
            format.encode(location),
            WireLocation::Csv("-33.86882,151.209296".into())
        );
    }

    #[test]
    fn csv_tolerates_whitespace() {
        let location = parse_csv(" 41.8781 , -87.6298 ").unwrap();

        assert_eq!(location, Location::new(41.8781, -87.6298).unwrap());
    }

    #[test]
    fn malformed_csv() {
        for value in ["", "41.8781", "41.8781,-87.6298,0", "north,west", "95,0"] {
            let err = parse_csv(value).unwrap_err();
            assert!(err.is_validation_error(), "{}", value);
        }
    }

    #[test]
    fn format_mismatch_is_rejected() {
        let object = WireLocation::Object {
            latitude: 1.0,
            longitude: 2.0,
        };

        assert!(CoordinateFormat::Csv.decode(object).is_err());
        assert!(CoordinateFormat::Object
            .decode(WireLocation::Csv("1,2".into()))
            .is_err());
    }

    #[test]
    fn create_params_accept_both_shapes() {
        let object: CreatePlaceParams = serde_json::from_value(json!({
            "name": "New York",
            "description": "The Big Apple.",
            "location": {"latitude": 40.7128, "longitude": -74.006},
        }))
        .unwrap();
        let csv: CreatePlaceParams = serde_json::from_value(json!({
            "name": "New York",
            "description": "The Big Apple.",
            "location": "40.7128,-74.006",
        }))
        .unwrap();

        assert_eq!(
            CoordinateFormat::Object.decode_new_place(object).unwrap(),
            CoordinateFormat::Csv.decode_new_place(csv).unwrap()
        );
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("object".parse::<CoordinateFormat>(), Ok(CoordinateFormat::Object));
        assert_eq!("CSV".parse::<CoordinateFormat>(), Ok(CoordinateFormat::Csv));
        assert!("wkt".parse::<CoordinateFormat>().is_err());
    }
}
