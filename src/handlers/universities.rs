//! Static list of universities offered by the sign-up form

use axum::{Json, Router, routing::get};

use crate::{constants::UNIVERSITIES, state::AppState};

async fn list_universities() -> Json<&'static [&'static str]> {
    Json(UNIVERSITIES)
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/universities", get(list_universities))
}
