//! Application configuration management.
//!
//! Loads configuration from environment variables. The three folder paths
//! have no defaults: the server refuses to start without them.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global configuration instance.
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Folder containing `.mp3` files (read-only).
    pub audio_folder: PathBuf,
    /// Folder containing lyrics text files (read-only).
    pub lyrics_folder: PathBuf,
    /// Folder where alignment files are written.
    pub alignment_folder: PathBuf,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json or pretty).
    pub log_format: LogFormat,
    /// Allowed CORS origins (comma-separated, or * for all).
    pub cors_origins: Vec<String>,
}

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable colored output.
    Pretty,
    /// JSON structured logging for production.
    Json,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if a required variable is missing or a value is invalid.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        let audio_folder = PathBuf::from(
            std::env::var("AUDIO_FOLDER").expect("AUDIO_FOLDER must be set"),
        );

        let lyrics_folder = PathBuf::from(
            std::env::var("LYRICS_FOLDER").expect("LYRICS_FOLDER must be set"),
        );

        let alignment_folder = PathBuf::from(
            std::env::var("ALIGNMENT_FOLDER").expect("ALIGNMENT_FOLDER must be set"),
        );

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port,
            audio_folder,
            lyrics_folder,
            alignment_folder,
            log_level,
            log_format,
            cors_origins,
        }
    }

    /// Validate the configuration.
    ///
    /// Audio and lyrics folders must exist; the alignment folder is created
    /// if absent.
    ///
    /// # Errors
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, folder) in [
            ("Audio", &self.audio_folder),
            ("Lyrics", &self.lyrics_folder),
        ] {
            if !folder.exists() {
                return Err(ConfigError::FolderNotFound(
                    name,
                    folder.display().to_string(),
                ));
            }
            if !folder.is_dir() {
                return Err(ConfigError::NotADirectory(
                    name,
                    folder.display().to_string(),
                ));
            }
        }

        if !self.alignment_folder.exists() {
            std::fs::create_dir_all(&self.alignment_folder).map_err(|e| {
                ConfigError::AlignmentFolderCreationFailed(
                    self.alignment_folder.display().to_string(),
                    e,
                )
            })?;
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} folder not found: {1}")]
    FolderNotFound(&'static str, String),

    #[error("{0} folder is not a directory: {1}")]
    NotADirectory(&'static str, String),

    #[error("Failed to create alignment folder '{0}': {1}")]
    AlignmentFolderCreationFailed(String, std::io::Error),
}

/// Initialize the global configuration.
///
/// Should be called once at application startup.
pub fn init() -> &'static Config {
    CONFIG.get_or_init(|| {
        dotenvy::dotenv().ok();
        Config::from_env()
    })
}
