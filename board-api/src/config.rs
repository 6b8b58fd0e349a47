use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub board: Option<BoardConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            server: Some(ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }),
            board: Some(BoardConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BoardConfig {
    /// Start with the demo team, projects and tasks
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
    /// Undrained notifications kept in memory; the oldest are dropped first
    #[serde(default = "default_notification_limit")]
    pub notification_limit: usize,
}

fn default_seed_sample_data() -> bool {
    true
}

fn default_notification_limit() -> usize {
    task_board::DEFAULT_NOTIFICATION_LIMIT
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
            notification_limit: default_notification_limit(),
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[cors]
allowed_origins = ["http://localhost:3000"]

[server]
host = "127.0.0.1"
port = 8080

[board]
# Start with the demo team, projects and tasks
seed_sample_data = true
# Undrained notifications kept in memory
notification_limit = 200
"#;

impl ApiConfig {
    /// Load the config file, writing the default one first if it is missing
    pub fn load(path: Option<PathBuf>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = path.unwrap_or_else(get_config_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: ApiConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or(ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        })
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("ops-board").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
