use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment; `dev` turns on live reload in the index page.
    #[serde(default = "default_env")]
    pub env: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_heartbeat_interval_ms")]
    pub heartbeat_interval_ms: u64,

    /// Outbound queue capacity for each chat peer.
    #[serde(default = "default_chat_buffer")]
    pub chat_buffer: usize,

    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: String,
}

fn default_port() -> u16 {
    8080
}

fn default_env() -> String {
    "production".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_heartbeat_interval_ms() -> u64 {
    1000
}

fn default_chat_buffer() -> usize {
    64
}

fn default_cors_allowed_origins() -> String {
    "http://localhost:8080,http://127.0.0.1:8080".to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        let settings: Config = config.try_deserialize()?;

        Ok(settings)
    }

    pub fn is_dev(&self) -> bool {
        self.env.eq_ignore_ascii_case("dev")
    }

    pub fn heartbeat_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.heartbeat_interval_ms.max(1))
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            env: default_env(),
            static_dir: default_static_dir(),
            heartbeat_interval_ms: default_heartbeat_interval_ms(),
            chat_buffer: default_chat_buffer(),
            cors_allowed_origins: default_cors_allowed_origins(),
        }
    }
}
