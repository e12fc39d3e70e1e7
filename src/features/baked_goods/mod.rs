pub mod model;

use crate::AppState;
use crate::error::ApiError;
use crate::features::DATETIME_FORMAT;
use crate::features::form::FormFields;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use model::{
    CreateBakedGoodForm, JsonBakedGood, JsonCreatedBakedGood, JsonMessage, baked_good_to_json,
    created_baked_good_to_json,
};

pub fn baked_goods_router() -> Router<AppState> {
    Router::new()
        .route("/baked_goods", post(create_baked_good_handler))
        .route("/baked_goods/by_price", get(baked_goods_by_price_handler))
        .route(
            "/baked_goods/most_expensive",
            get(most_expensive_baked_good_handler),
        )
        .route("/baked_goods/{id}", delete(delete_baked_good_handler))
}

async fn baked_goods_by_price_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonBakedGood>>, ApiError> {
    let baked_goods = state.repo.get_baked_goods_by_price().await?;

    let json_baked_goods = baked_goods
        .iter()
        .map(|bg| baked_good_to_json(bg, DATETIME_FORMAT))
        .collect();

    Ok(Json(json_baked_goods))
}

async fn most_expensive_baked_good_handler(
    State(state): State<AppState>,
) -> Result<Json<JsonBakedGood>, ApiError> {
    let most_expensive = state
        .repo
        .get_most_expensive_baked_good()
        .await?
        .ok_or(ApiError::NoBakedGoods)?;

    Ok(Json(baked_good_to_json(&most_expensive, DATETIME_FORMAT)))
}

async fn create_baked_good_handler(
    State(state): State<AppState>,
    FormFields(form): FormFields<CreateBakedGoodForm>,
) -> Result<(StatusCode, Json<JsonCreatedBakedGood>), ApiError> {
    let new_baked_good = form.validate()?;

    let baked_good = state.repo.save_baked_good(&new_baked_good).await?;

    Ok((
        StatusCode::CREATED,
        Json(created_baked_good_to_json(&baked_good)),
    ))
}

async fn delete_baked_good_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JsonMessage>, ApiError> {
    if !state.repo.delete_baked_good(id).await? {
        return Err(ApiError::BakedGoodNotFound);
    }

    Ok(Json(JsonMessage {
        message: "Baked good successfully deleted".to_string(),
    }))
}
