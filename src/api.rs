use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{NewPlace, Place, PlaceQuery};
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    /// Persists `place` and returns it with its store-assigned id.
    async fn create_place(&self, place: NewPlace) -> Result<Place, Error>;

    /// Places matching `query`, in insertion order, windowed by offset/limit.
    async fn list_places(&self, query: PlaceQuery) -> Result<Vec<Place>, Error>;
}

pub trait API: PlaceAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
