use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    // Cache store
    pub redis_url: String,
    // Object store
    pub minio_address: String,
    pub minio_port: u16,
    pub minio_access_key: String,
    pub minio_secret_key: String,
    pub minio_bucket: String,
    // Upstream synthesis
    pub tiktok_session_id: Option<String>,
    // Duration probe
    pub ffprobe_path: String,
    pub temp_dir: PathBuf,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            cors_origins: env::var("CORS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(", ")
                .map(str::to_string)
                .collect(),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            minio_address: env::var("MINIO_ADDRESS").unwrap_or_else(|_| "localhost".to_string()),
            minio_port: env::var("MINIO_PORT")
                .unwrap_or_else(|_| "9000".to_string())
                .parse()?,
            minio_access_key: env::var("MINIO_ACCESS_KEY").unwrap_or_default(),
            minio_secret_key: env::var("MINIO_SECRET_KEY").unwrap_or_default(),
            minio_bucket: env::var("MINIO_BUCKET").unwrap_or_else(|_| "tiktoktts".to_string()),
            tiktok_session_id: env::var("TIKTOK_SESSION_ID").ok(),
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
            temp_dir: env::var("TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir().join("tiktok-tts-proxy")),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
