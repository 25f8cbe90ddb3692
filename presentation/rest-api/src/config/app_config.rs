use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Edge configuration for the storefront API: the HTTP listener plus the
/// CORS policy applied in front of every route.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    /// Reads every edge setting from the environment in one place.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }

    /// Address the HTTP listener binds to, as "ip:port".
    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}
