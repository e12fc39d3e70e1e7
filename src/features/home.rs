use crate::AppState;
use axum::{Router, response::Html, routing::get};

pub const HOME_HTML: &str = "<h1>Bakery GET-POST-PATCH-DELETE API</h1>";

pub fn home_router() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

async fn home_handler() -> Html<&'static str> {
    Html(HOME_HTML)
}
