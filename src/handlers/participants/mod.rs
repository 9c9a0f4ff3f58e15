//! Participant handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Participant routes, keyed by the backing user's id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_participants).post(handler::create_participant),
        )
        .route(
            "/{user_id}",
            get(handler::get_participant)
                .put(handler::update_participant)
                .delete(handler::delete_participant),
        )
}
