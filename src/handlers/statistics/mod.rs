//! Competition statistics handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Statistic routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_statistics).post(handler::create_statistic),
        )
        .route(
            "/{id}",
            get(handler::get_statistic)
                .put(handler::update_statistic)
                .delete(handler::delete_statistic),
        )
}
