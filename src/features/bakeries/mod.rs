pub mod model;

use crate::AppState;
use crate::error::ApiError;
use crate::features::DATETIME_FORMAT;
use crate::features::form::FormFields;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use model::{
    JsonBakery, JsonBakerySummary, UpdateBakeryForm, bakery_to_json, bakery_to_json_summary,
};

pub fn bakeries_router() -> Router<AppState> {
    Router::new()
        .route("/bakeries", get(list_bakeries_handler))
        .route(
            "/bakeries/{id}",
            get(get_bakery_handler).patch(update_bakery_handler),
        )
}

async fn list_bakeries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonBakery>>, ApiError> {
    let bakeries = state.repo.get_all_bakeries().await?;

    let json_bakeries = bakeries
        .iter()
        .map(|b| bakery_to_json(b, DATETIME_FORMAT))
        .collect();

    Ok(Json(json_bakeries))
}

async fn get_bakery_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JsonBakery>, ApiError> {
    let bakery = state
        .repo
        .get_bakery(id)
        .await?
        .ok_or(ApiError::BakeryNotFound)?;

    Ok(Json(bakery_to_json(&bakery, DATETIME_FORMAT)))
}

async fn update_bakery_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    form: Result<FormFields<UpdateBakeryForm>, ApiError>,
) -> Result<Json<JsonBakerySummary>, ApiError> {
    // the lookup happens before the body is judged, an unknown id is a 404 whatever was sent
    let name = form.as_ref().ok().and_then(|FormFields(f)| f.name.as_deref());

    let bakery = state
        .repo
        .rename_bakery(id, name)
        .await?
        .ok_or(ApiError::BakeryNotFound)?;

    if let Err(rejection) = form {
        return Err(rejection);
    }

    Ok(Json(bakery_to_json_summary(&bakery)))
}
