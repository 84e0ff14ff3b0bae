use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use doorcode_core::health::healthz;
use doorcode_core::middleware::request_id_layer;

use crate::handlers::{
    admin::{dashboard, login, login_page, logout},
    code::{issue_code, redeem_page},
    health::readyz,
    submission::{get_listings, get_listings_page, submit_listing},
};
use crate::state::AppState;

/// Whole-request cap: five 5 MiB images plus form fields fit comfortably.
const BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let media = ServeDir::new(&state.media_root);
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Codes
        .route("/codes", post(issue_code))
        .route("/qr/{code}", get(redeem_page))
        // Submissions
        .route("/submit/{code}", post(submit_listing))
        .route("/listings", get(get_listings_page))
        .route("/api/listings", get(get_listings))
        // Admin
        .route("/admin/login", get(login_page))
        .route("/admin/login", post(login))
        .route("/admin/logout", post(logout))
        .route("/admin", get(dashboard))
        // Stored images
        .nest_service("/media", media)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
        .with_state(state)
}
