use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which canonical page variant the fetcher tries first.
///
/// The second variant is attempted when the first fails or returns a
/// suspiciously short body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackOrder {
    DesktopFirst,
    MobileFirst,
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Credential for the report-generation API. Optional at startup: its
    /// absence is reported per request as a validation error.
    pub openai_api_key: Option<String>,
    pub report_base_url: String,
    pub report_model: String,
    pub report_timeout_secs: u64,
    pub fetch_timeout_secs: u64,
    /// Bodies shorter than this are treated as bot-block shells and trigger
    /// the fallback variant.
    pub fetch_min_body_bytes: usize,
    pub fetch_fallback_order: FallbackOrder,
    pub keyword_cap: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("report_base_url", &self.report_base_url)
            .field("report_model", &self.report_model)
            .field("report_timeout_secs", &self.report_timeout_secs)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_min_body_bytes", &self.fetch_min_body_bytes)
            .field("fetch_fallback_order", &self.fetch_fallback_order)
            .field("keyword_cap", &self.keyword_cap)
            .finish()
    }
}
