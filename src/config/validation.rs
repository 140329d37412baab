use super::Endpoints;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every endpoint URL (and URL prefix) must be non-empty and start with http:// or https://
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    endpoints: &Endpoints,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    let urls = [
        ("login_url", &endpoints.login_url),
        ("games_url_prefix", &endpoints.games_url_prefix),
        ("teams_url", &endpoints.teams_url),
        ("game_feed_prefix", &endpoints.game_feed_prefix),
    ];

    for (name, url) in urls {
        if url.is_empty() {
            return Err(AppError::config_error(format!("{name} cannot be empty")));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "{name} must start with http:// or https:// (got '{url}')"
            )));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
