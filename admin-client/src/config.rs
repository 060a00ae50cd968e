//! Client configuration

use std::time::Duration;

/// Configuration for talking to the dashboard backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds (list fetches and CRUD calls)
    pub timeout: u64,

    /// Timeout in seconds for a sequence shift
    pub shift_timeout: u64,

    /// Quiet period before a search term is applied, in milliseconds
    pub search_debounce_ms: u64,

    /// Initial page size of list screens (-1 = unpaged)
    pub page_size: i32,
}

impl ClientConfig {
    /// Create a new client configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            shift_timeout: 10,
            search_debounce_ms: 50,
            page_size: 10,
        }
    }

    /// Load configuration from `ADMIN_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::new("http://localhost:8080/api");
        Self {
            base_url: std::env::var("ADMIN_API_URL").unwrap_or(defaults.base_url),
            token: std::env::var("ADMIN_API_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout: std::env::var("ADMIN_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout),
            shift_timeout: std::env::var("ADMIN_SHIFT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.shift_timeout),
            search_debounce_ms: std::env::var("ADMIN_SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.search_debounce_ms),
            page_size: std::env::var("ADMIN_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_size),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the sequence shift timeout
    pub fn with_shift_timeout(mut self, seconds: u64) -> Self {
        self.shift_timeout = seconds;
        self
    }

    /// Set the search debounce window
    pub fn with_search_debounce_ms(mut self, millis: u64) -> Self {
        self.search_debounce_ms = millis;
        self
    }

    /// Set the initial page size
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn shift_timeout(&self) -> Duration {
        Duration::from_secs(self.shift_timeout)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
