//! Registration handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Registration routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_registrations).post(handler::create_registration),
        )
        .route(
            "/{id}",
            get(handler::get_registration)
                .put(handler::update_registration)
                .delete(handler::delete_registration),
        )
        .route(
            "/competition/{competition_id}",
            get(handler::list_competition_registrations).post(handler::self_register),
        )
}
