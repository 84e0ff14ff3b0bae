use sea_orm::Database;
use tracing::info;

use doorcode_listings::config::ListingsConfig;
use doorcode_listings::router::build_router;
use doorcode_listings::state::AppState;

#[tokio::main]
async fn main() {
    doorcode_core::tracing::init_tracing();

    let config = ListingsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    tokio::fs::create_dir_all(&config.media_root)
        .await
        .expect("failed to create media root");

    let state = AppState {
        db,
        media_root: config.media_root.into(),
        admin_password: config.admin_password,
        public_base_url: config.public_base_url,
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.listings_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("listings service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
