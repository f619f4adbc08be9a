use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_url: String,
    pub store_service_key: String,
    pub jwt_secret: String,
    pub port: u16,
    pub uploads_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            store_url: env::var("STORE_URL")
                .unwrap_or_else(|_| {
                    warn!("STORE_URL not set, using empty value");
                    String::new()
                }),
            store_service_key: env::var("STORE_SERVICE_KEY")
                .unwrap_or_else(|_| {
                    warn!("STORE_SERVICE_KEY not set, using empty value");
                    String::new()
                }),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("JWT_SECRET not set, using empty value");
                    String::new()
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8500),
            uploads_dir: env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| {
                    warn!("UPLOADS_DIR not set, using default");
                    "uploads".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.store_url.is_empty()
            && !self.store_service_key.is_empty()
            && !self.jwt_secret.is_empty()
    }
}
