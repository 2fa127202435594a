use std::time::Duration;

/// Default base URL for NCBI E-utilities
const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default HTTP request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the PubMed client
///
/// # Example
///
/// ```
/// use paperscout::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-tool/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the E-utilities base URL
    ///
    /// Mainly useful for pointing the client at a mock server in tests.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the HTTP request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get the effective base URL (custom or NCBI default)
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get the effective User-Agent string
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("paperscout/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
