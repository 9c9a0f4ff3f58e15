//! Sponsor handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Sponsor routes, keyed by the backing user's id
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_sponsors).post(handler::create_sponsor))
        .route(
            "/{user_id}",
            get(handler::get_sponsor).delete(handler::delete_sponsor),
        )
        .route("/{user_id}/logo", post(handler::upload_logo))
}
