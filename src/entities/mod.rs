mod location;
mod place;
mod query;

pub use location::Location;
pub use place::{NewPlace, Place};
pub use query::{PlaceQuery, Proximity, DEFAULT_LIMIT, MAX_LIMIT};
