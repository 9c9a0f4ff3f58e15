//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// How loudly a finished request is reported
#[derive(Debug, PartialEq, Eq)]
enum Severity {
    Info,
    Warn,
}

/// 5xx and every 4xx except 404 are warnings
fn severity(status: StatusCode) -> Severity {
    if status.is_server_error() || (status.is_client_error() && status != StatusCode::NOT_FOUND) {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match severity(response.status()) {
        Severity::Warn => warn!(%method, %path, status, %duration_ms, "Request completed with error"),
        Severity::Info => info!(%method, %path, status, %duration_ms, "Request completed"),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert_eq!(severity(StatusCode::OK), Severity::Info);
        assert_eq!(severity(StatusCode::CREATED), Severity::Info);
        assert_eq!(severity(StatusCode::NOT_FOUND), Severity::Info);
        assert_eq!(severity(StatusCode::CONFLICT), Severity::Warn);
        assert_eq!(severity(StatusCode::UNPROCESSABLE_ENTITY), Severity::Warn);
        assert_eq!(severity(StatusCode::INTERNAL_SERVER_ERROR), Severity::Warn);
    }
}
