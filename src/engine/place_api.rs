use super::helpers::{contains_pattern, place_from_row, PLACE_COLUMNS};
use super::Engine;

use async_trait::async_trait;
use geo_types::Geometry;
use geozero::wkb;
use sqlx::{Executor, QueryBuilder};

use crate::{
    api::PlaceAPI,
    db::{Database, PLACE_TABLE},
    entities::{NewPlace, Place, PlaceQuery},
    error::Error,
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_place(&self, place: NewPlace) -> Result<Place, Error> {
        let location: Geometry<f64> = place.location().into();

        let mut tx = self.pool.begin().await?;

        let row = tx
            .fetch_one(
                sqlx::query(&format!(
                    "INSERT INTO {} (name, description, location) VALUES ($1, $2, ST_SetSRID($3, 4326)::geography) RETURNING {}",
                    PLACE_TABLE, PLACE_COLUMNS
                ))
                .bind(place.name())
                .bind(place.description())
                .bind(wkb::Encode(location)),
            )
            .await?;

        let place = place_from_row(&row)?;

        tx.commit().await?;

        tracing::info!(id = place.id, "place created");

        Ok(place)
    }

    #[tracing::instrument(skip(self))]
    async fn list_places(&self, query: PlaceQuery) -> Result<Vec<Place>, Error> {
        let mut builder: QueryBuilder<Database> = QueryBuilder::new(format!(
            "SELECT {} FROM {} WHERE TRUE",
            PLACE_COLUMNS, PLACE_TABLE
        ));

        if let Some(name) = query.name() {
            builder
                .push(" AND name ILIKE ")
                .push_bind(contains_pattern(name));
        }

        if let Some(proximity) = query.proximity() {
            let center = proximity.center();

            builder
                .push(" AND ST_DWithin(location, ST_SetSRID(ST_MakePoint(")
                .push_bind(center.longitude())
                .push(", ")
                .push_bind(center.latitude())
                .push("), 4326)::geography, ")
                .push_bind(proximity.radius())
                .push(")");
        }

        builder
            .push(" ORDER BY id OFFSET ")
            .push_bind(query.offset())
            .push(" LIMIT ")
            .push_bind(query.limit());

        let mut tx = self.pool.begin().await?;

        let rows = tx.fetch_all(builder.build()).await?;

        tx.commit().await?;

        rows.iter().map(place_from_row).collect()
    }
}
