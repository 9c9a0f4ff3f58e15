//! Marathon - Programming Marathon Management Backend
//!
//! REST backend for running an academic programming marathon: competitions,
//! organizing teams, collaborators, participants, sponsors, problems,
//! submissions and per-competition statistics.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers and transfer schemas (thin layer)
//! - **Services**: Derived attributes and compound writes
//! - **Repositories**: Database access
//! - **Models**: Database rows and enums

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the full application router with its middleware stack
pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    let origin: HeaderValue = state.config().cors.allowed_origin.parse()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let router = Router::new()
        .merge(handlers::routes(state.clone()))
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::test_utils::test_app::{TEST_ORIGIN, create_offline_app, create_test_app};

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
        let boundary = "marathon-boundary";
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = create_offline_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_universities() {
        let response = create_offline_app()
            .oneshot(Request::get("/universities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), crate::constants::UNIVERSITIES.len());
        assert!(list.contains(&json!("Universidade de Brasília (UnB)")));
    }

    #[tokio::test]
    async fn test_invalid_payload_is_422_before_touching_database() {
        let response = create_offline_app()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({
                    "name": "Ada",
                    "email": "not-an-email",
                    "password": "secret123",
                    "role": "participant"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_competition_capacity_must_be_positive() {
        let response = create_offline_app()
            .oneshot(json_request(
                "POST",
                "/competitions",
                json!({ "name": "Cup", "date": "2025-06-25", "team_id": 1, "max_participants": 0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_self_registration_requires_email() {
        let response = create_offline_app()
            .oneshot(multipart_request(
                "/registrations/competition/1",
                &[("name", "Ada"), ("birthDate", "2000-01-01")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["error"]["message"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn test_me_requires_bearer_token() {
        let app = create_offline_app();

        let missing = app
            .clone()
            .oneshot(Request::get("/auth/me").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

        let garbage = app
            .oneshot(
                Request::get("/auth/me")
                    .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(garbage).await["error"]["code"], "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_cors_allows_only_configured_origin() {
        let app = create_offline_app();

        let preflight = |origin: &str| {
            Request::builder()
                .method("OPTIONS")
                .uri("/competitions")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap()
        };

        let allowed = app.clone().oneshot(preflight(TEST_ORIGIN)).await.unwrap();
        assert_eq!(
            allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            TEST_ORIGIN
        );

        let denied = app.oneshot(preflight("http://evil.example")).await.unwrap();
        assert!(denied.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_competition_lifecycle_over_http() {
        let (app, _state) = create_test_app().await;

        let team = app
            .clone()
            .oneshot(json_request("POST", "/teams", json!({ "name": "Alpha" })))
            .await
            .unwrap();
        assert_eq!(team.status(), StatusCode::CREATED);
        let team_id = body_json(team).await["team_id"].as_i64().unwrap();

        let today = crate::utils::today().format("%Y-%m-%d").to_string();
        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/competitions",
                json!({ "name": "Cup", "date": today, "team_id": team_id }),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let competition = body_json(created).await;
        assert_eq!(competition["status"], "Today");
        assert_eq!(competition["registration_count"], 0);

        let id = competition["competition_id"].as_i64().unwrap();
        let uri = format!("/competitions/{}", id);

        let deleted = app
            .clone()
            .oneshot(Request::delete(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let missing = app
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(missing).await["error"]["message"],
            "Competition not found"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_self_registration_over_http() {
        let (app, state) = create_test_app().await;
        let team = crate::test_utils::fixtures::team(state.db(), "Alpha").await;
        let competition = crate::test_utils::fixtures::competition(
            state.db(),
            team.team_id,
            crate::utils::today(),
            None,
        )
        .await;

        let uri = format!("/registrations/competition/{}", competition.competition_id);
        let response = app
            .clone()
            .oneshot(multipart_request(
                &uri,
                &[
                    ("name", "Grace Hopper"),
                    ("email", "grace@example.com"),
                    ("university", "Universidade de São Paulo (USP)"),
                    ("category", "undergrad"),
                    ("birthDate", "1906-12-09"),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["user"]["role"], "participant");
        assert_eq!(body["registration"]["category"], "undergrad");

        let listed = app
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(listed).await.as_array().unwrap().len(), 1);
    }
}
