use super::{
    auth_config::AuthConfig, cors_config, media_config::MediaConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env(),
            media: MediaConfig::from_env(),
        }
    }
}
