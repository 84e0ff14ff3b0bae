/// Listings service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ListingsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Password accepted by the dashboard login.
    pub admin_password: String,
    /// Base URL printed into redemption links (e.g. "https://example.com").
    /// Env var: `PUBLIC_BASE_URL`, default `http://localhost:5000`.
    pub public_base_url: String,
    /// Directory where uploaded images are written. Env var: `MEDIA_ROOT`,
    /// default `media`.
    pub media_root: String,
    /// Cookie domain attribute for the dashboard session cookie.
    /// Env var: `COOKIE_DOMAIN`, default `localhost`.
    pub cookie_domain: String,
    /// TCP port to listen on (default 5000). Env var: `LISTINGS_PORT`.
    pub listings_port: u16,
}

impl ListingsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            admin_password: std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD"),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_owned()),
            media_root: std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_owned()),
            cookie_domain: std::env::var("COOKIE_DOMAIN")
                .unwrap_or_else(|_| "localhost".to_owned()),
            listings_port: std::env::var("LISTINGS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        }
    }
}
