//! Collaborator handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Collaborator routes, keyed by the backing user's id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_collaborators).post(handler::create_collaborator),
        )
        .route(
            "/{user_id}",
            get(handler::get_collaborator)
                .put(handler::update_collaborator)
                .delete(handler::delete_collaborator),
        )
}
