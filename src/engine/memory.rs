use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    api::{PlaceAPI, API},
    entities::{NewPlace, Place, PlaceQuery},
    error::{unexpected_error, Error},
};

/// Process-local implementation of the API. Records live as long as the
/// engine; ids start at 1 and follow insertion order.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    places: RwLock<Vec<Place>>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaceAPI for MemoryEngine {
    #[tracing::instrument(skip(self))]
    async fn create_place(&self, place: NewPlace) -> Result<Place, Error> {
        let mut places = self.places.write().await;

        let id = i32::try_from(places.len() + 1)
            .map_err(|_| unexpected_error("place id space exhausted"))?;
        let place = place.into_place(id);

        places.push(place.clone());

        tracing::info!(id = place.id, "place created");

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn list_places(&self, query: PlaceQuery) -> Result<Vec<Place>, Error> {
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit()).unwrap_or(0);

        let places = self.places.read().await;

        Ok(places
            .iter()
            .filter(|place| query.matches(place))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

impl API for MemoryEngine {}
