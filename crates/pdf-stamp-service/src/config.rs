use crate::error::{Result, ServiceError};
use serde::Deserialize;

/// Environment variable naming an extra config file (without extension)
pub const CONFIG_PATH_ENV: &str = "PDF_STAMP_CONFIG";

/// Prefix of environment overrides, e.g. `PDF_STAMP_SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "PDF_STAMP";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    /// Path the stamping endpoint is served on
    pub route: String,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared key required on the stamping route; auth is off when unset
    pub function_key: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            route: "/api/WatermarkV2".to_string(),
            auth: AuthConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7071,
        }
    }
}

impl ServiceConfig {
    /// Layer `config/default.toml`, `$PDF_STAMP_CONFIG` and `PDF_STAMP_*`
    /// environment variables, later sources winning
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                builder = builder.add_source(config::File::with_name(&path));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: ServiceConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.route.starts_with('/') {
            return Err(ServiceError::Config(format!(
                "route must start with '/': {}",
                self.route
            )));
        }
        if self.route == "/health" {
            return Err(ServiceError::Config(
                "route conflicts with the health check".to_string(),
            ));
        }
        if matches!(self.auth.function_key.as_deref(), Some("")) {
            return Err(ServiceError::Config(
                "function_key must not be empty; remove it to disable auth".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
