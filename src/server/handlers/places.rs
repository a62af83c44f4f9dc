use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Json, Query};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::api::DynAPI;
use crate::auth::Authorized;
use crate::entities::PlaceQuery;
use crate::error::Error;
use crate::wire::{CoordinateFormat, CreatePlaceParams, PlaceView};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    offset: Option<i64>,
    limit: Option<i64>,
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    radius: Option<f64>,
}

impl TryFrom<ListParams> for PlaceQuery {
    type Error = Error;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        PlaceQuery::new(
            params.offset,
            params.limit,
            params.name,
            params.latitude,
            params.longitude,
            params.radius,
        )
    }
}

pub async fn create(
    _: Authorized,
    Extension(api): Extension<DynAPI>,
    Extension(format): Extension<CoordinateFormat>,
    params: Result<Json<CreatePlaceParams>, JsonRejection>,
) -> Result<(StatusCode, Json<PlaceView>), Error> {
    let Json(params) = params?;
    let place = format.decode_new_place(params)?;

    let place = api.create_place(place).await?;

    Ok((StatusCode::CREATED, Json(format.encode_place(place))))
}

pub async fn list(
    _: Authorized,
    Extension(api): Extension<DynAPI>,
    Extension(format): Extension<CoordinateFormat>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<PlaceView>>, Error> {
    let Query(params) = params?;
    let query = PlaceQuery::try_from(params)?;

    let places = api.list_places(query).await?;

    Ok(places
        .into_iter()
        .map(|place| format.encode_place(place))
        .collect::<Vec<_>>()
        .into())
}
