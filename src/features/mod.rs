pub mod baked_goods;
pub mod bakeries;
pub mod form;
pub mod home;

use crate::AppState;
use axum::Router;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// every feature router is composed here; main only adds layers and state
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(home::home_router())
        .merge(bakeries::bakeries_router())
        .merge(baked_goods::baked_goods_router())
}
