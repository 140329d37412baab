use super::http_client::create_http_client_with_timeout;
use crate::config::{Config, Endpoints};
use crate::error::AppError;
use reqwest::Client;

/// An authenticated (or not yet authenticated) conversation with the service.
///
/// Holds the HTTP client whose cookie jar carries the login cookies, and the
/// endpoint templates every operation builds its URL from. Pass the same
/// session to `login` and to every fetch that needs the login.
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    endpoints: Endpoints,
}

impl Session {
    /// Builds a session from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::with_endpoints(config.endpoints.clone(), config.http_timeout_seconds)
    }

    pub fn with_endpoints(endpoints: Endpoints, timeout_seconds: u64) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(timeout_seconds)?;
        Ok(Self { client, endpoints })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
