//! Competition-sponsor link handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Sponsorship link routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_links).post(handler::create_link))
        .route(
            "/{id}",
            get(handler::get_link)
                .put(handler::update_link)
                .delete(handler::delete_link),
        )
        .route(
            "/competition/{competition_id}",
            get(handler::list_competition_links),
        )
}
