use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Provider API key. Empty means the mailer runs unconfigured and the
    /// submission endpoint answers in degraded mode.
    pub api_key: String,
    pub api_base_url: String,
    pub from_address: String,
    /// Operator inbox that receives the demo-request notifications.
    pub notification_address: String,
    pub send_timeout_seconds: u64,
    /// When true, an empty `api_key` is a startup error instead of a silent
    /// degraded mode.
    pub require_delivery: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            email: EmailConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            shutdown_timeout_seconds: 10,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://api.resend.com".to_string(),
            from_address: "StaySmart Demo <no-reply@staysmart.example>".to_string(),
            notification_address: "sales@staysmart.example".to_string(),
            send_timeout_seconds: 10,
            require_delivery: false,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "https://staysmart.example".to_string(),
            ],
            max_age_seconds: 3600,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.email.api_base_url.is_empty() {
            return Err(ConfigError::Message(
                "Email API base URL cannot be empty".to_string(),
            ));
        }

        if !self.email.from_address.contains('@') {
            return Err(ConfigError::Message(
                "Email from address must contain an @".to_string(),
            ));
        }

        if !self.email.notification_address.contains('@') {
            return Err(ConfigError::Message(
                "Notification address must contain an @".to_string(),
            ));
        }

        if self.email.send_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Email send timeout must be greater than 0".to_string(),
            ));
        }

        if self.email.api_key.is_empty() {
            if self.email.require_delivery {
                return Err(ConfigError::Message(
                    "Email API key is required when require_delivery is enabled".to_string(),
                ));
            }
            tracing::warn!(
                "No email API key configured - demo requests will be accepted without notification"
            );
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Message(
                "At least one CORS origin must be allowed".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
