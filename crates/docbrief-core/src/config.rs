use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
}

/// Process-wide configuration, read from the environment once at startup
/// and immutable afterwards. Every component receives the values it needs
/// at construction; nothing reads the environment during request handling.
#[derive(Debug, Clone)]
pub struct Config {
    /// Static secret callers must present as a bearer token on `/upload`.
    pub auth_token: String,
    /// Credential for the language-model completion service.
    pub openai_api_key: String,
    /// Optional completion-service base URL override (proxies, tests).
    pub openai_base_url: Option<String>,
    /// Downstream endpoint that receives finished summaries.
    pub external_api_url: String,
    /// Bearer token presented to the downstream endpoint.
    pub external_api_token: String,
}

impl Config {
    /// Load configuration from the process environment. A missing required
    /// variable is a fatal startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            auth_token: require("AUTH_TOKEN")?,
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            external_api_url: require("EXTERNAL_API_URL")?,
            external_api_token: require("EXTERNAL_API_TOKEN")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
