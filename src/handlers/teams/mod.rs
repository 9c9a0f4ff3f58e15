//! Team handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Team routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_teams).post(handler::create_team))
        .route(
            "/{id}",
            get(handler::get_team)
                .put(handler::update_team)
                .delete(handler::delete_team),
        )
}
