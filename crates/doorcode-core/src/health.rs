use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check. Readiness is per service,
/// since it depends on what the service talks to.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
