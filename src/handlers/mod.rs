//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by resource.

pub mod auth;
pub mod collaborators;
pub mod competition_sponsors;
pub mod competitions;
pub mod health;
pub mod nullable;
pub mod pagination;
pub mod participants;
pub mod problems;
pub mod registrations;
pub mod sponsors;
pub mod statistics;
pub mod submissions;
pub mod teams;
pub mod universities;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(universities::routes())
        .nest("/auth", auth::routes(state))
        .nest("/users", users::routes())
        .nest("/teams", teams::routes())
        .nest("/collaborators", collaborators::routes())
        .nest("/participants", participants::routes())
        .nest("/sponsors", sponsors::routes())
        .nest("/competitions", competitions::routes())
        .nest("/competition-sponsors", competition_sponsors::routes())
        .nest("/registrations", registrations::routes())
        .nest("/problems", problems::routes())
        .nest("/submissions", submissions::routes())
        .nest("/statistics", statistics::routes())
}
