//! Builder for creating and configuring ApiClient instances.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::ApiClient;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Default backend address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Builder for creating and configuring [`ApiClient`] instances.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: Option<String>,
    session_path: Option<PathBuf>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            session_path: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the backend base URL.
    ///
    /// If not specified, uses [`DEFAULT_BASE_URL`]. A trailing slash is
    /// stripped so path concatenation stays predictable.
    pub fn with_base_url(mut self, url: Option<impl Into<String>>) -> Self {
        if let Some(url) = url {
            self.base_url = Some(url.into());
        }
        self
    }

    /// Sets a custom session file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/inventaris/session.json` or
    /// `~/.local/share/inventaris/session.json`
    pub fn with_session_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured client instance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the base URL is unusable and
    /// [`ApiError::XdgDirectory`] if no session path could be resolved.
    pub fn build(self) -> Result<ApiClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::Configuration {
                message: format!("Base URL must start with http:// or https://: {base_url}"),
            });
        }

        let sessions = match self.session_path {
            Some(path) => SessionStore::new(path),
            None => SessionStore::default_location()?,
        };

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(ApiClient::new(http, base_url, sessions))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
