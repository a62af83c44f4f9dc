use crate::entities::Location;
use crate::error::{invalid_input_error, Error};

/// A stored point of interest. `id` is assigned by the store on insert.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub location: Location,
}

/// A validated, not yet persisted place.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPlace {
    name: String,
    description: String,
    location: Location,
}

impl NewPlace {
    pub fn new(name: String, description: String, location: Location) -> Result<Self, Error> {
        if name.trim().is_empty() {
            return Err(invalid_input_error("name must not be empty"));
        }

        if description.trim().is_empty() {
            return Err(invalid_input_error("description must not be empty"));
        }

        Ok(Self {
            name,
            description,
            location,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn into_place(self, id: i32) -> Place {
        Place {
            id,
            name: self.name,
            description: self.description,
            location: self.location,
        }
    }
}

#[test]
fn new_place_requires_text() {
    let location = Location::new(41.8781, -87.6298).unwrap();

    assert!(NewPlace::new("Chicago".into(), "The Windy City.".into(), location).is_ok());
    assert!(NewPlace::new("".into(), "The Windy City.".into(), location).is_err());
    assert!(NewPlace::new("Chicago".into(), "   ".into(), location).is_err());
}

#[test]
fn duplicate_names_are_allowed() {
    let location = Location::new(41.8781, -87.6298).unwrap();
    let first = NewPlace::new("Chicago".into(), "one".into(), location).unwrap();
    let second = NewPlace::new("Chicago".into(), "two".into(), location).unwrap();

    assert_eq!(first.into_place(1).name, second.into_place(2).name);
}
