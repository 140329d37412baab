use crate::constants::{DEFAULT_LOG_FILE_NAME, endpoints, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::{prompt_for_password, prompt_for_username};
use validation::validate_config;

/// Service endpoints. The schedule and game feed URLs are templates: the
/// request URL is `prefix + value + suffix`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Endpoints {
    pub login_url: String,
    pub games_url_prefix: String,
    pub games_url_suffix: String,
    pub teams_url: String,
    pub game_feed_prefix: String,
    pub game_feed_suffix: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            login_url: endpoints::LOGIN_URL.to_string(),
            games_url_prefix: endpoints::GAMES_URL_PREFIX.to_string(),
            games_url_suffix: endpoints::GAMES_URL_SUFFIX.to_string(),
            teams_url: endpoints::TEAMS_URL.to_string(),
            game_feed_prefix: endpoints::GAME_FEED_PREFIX.to_string(),
            game_feed_suffix: endpoints::GAME_FEED_SUFFIX.to_string(),
        }
    }
}

impl Endpoints {
    /// Points every endpoint at `base`, keeping the default path layout.
    /// Used to run against a local mock of the service.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Endpoints {
            login_url: format!("{base}/mlsmdl/secure/login"),
            games_url_prefix: format!("{base}/iphone/v5/prod/games_for_week_"),
            games_url_suffix: endpoints::GAMES_URL_SUFFIX.to_string(),
            teams_url: format!("{base}/iphone/v5/prod/teams_2013.js"),
            game_feed_prefix: format!("{base}/mobile/feeds/game/2011/"),
            game_feed_suffix: endpoints::GAME_FEED_SUFFIX.to_string(),
        }
    }
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Account name used by `--login`. Prompted for when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for service requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    #[serde(default)]
    pub endpoints: Endpoints,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            username: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            endpoints: Endpoints::default(),
        }
    }
}

/// Username and password for a login call.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file is not an error: built-in defaults are used and nothing is written.
    ///
    /// # Environment Variables
    /// - `MLS_LIVE_USERNAME` - Override username
    /// - `MLS_LIVE_LOG_FILE` - Override log file path
    /// - `MLS_LIVE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Overrides fields with values from the environment, when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(username) = std::env::var(env_vars::USERNAME) {
            self.username = Some(username);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.endpoints,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Resolves login credentials: the configured username (or a prompt),
    /// and the password from `MLS_LIVE_PASSWORD` (or a prompt).
    /// Passwords are never read from or written to the config file.
    pub async fn credentials(&self) -> Result<Credentials, AppError> {
        let username = match &self.username {
            Some(name) if !name.is_empty() => name.clone(),
            _ => prompt_for_username().await?,
        };
        let password = match std::env::var(env_vars::PASSWORD) {
            Ok(password) => password,
            Err(_) => prompt_for_password().await?,
        };

        if username.is_empty() {
            return Err(AppError::config_error("Username cannot be empty"));
        }

        Ok(Credentials { username, password })
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Username:");
        println!("{}", config.username.as_deref().unwrap_or("(not set)"));
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Endpoints:");
        println!("login:    {}", config.endpoints.login_url);
        println!(
            "games:    {}<YYYY-MM-DD>{}",
            config.endpoints.games_url_prefix, config.endpoints.games_url_suffix
        );
        println!("teams:    {}", config.endpoints.teams_url);
        println!(
            "feed:     {}<GAME_ID>{}",
            config.endpoints.game_feed_prefix, config.endpoints.game_feed_suffix
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{DEFAULT_LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
