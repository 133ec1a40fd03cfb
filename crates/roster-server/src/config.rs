use roster_core::AppError;
use roster_core::auth::DEFAULT_TOKENS;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Bearer tokens accepted by the authentication middleware.
    pub api_tokens: Vec<String>,
    /// Serve Swagger UI and the OpenAPI document.
    pub api_docs: bool,
    /// Start with the two demo users instead of an empty store.
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            api_tokens: DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
            api_docs: false,
            seed_demo: true,
        }
    }
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `ROSTER_PORT` (optional, defaults to 3000)
    /// - `ROSTER_API_TOKENS` (optional, comma-separated allow-list)
    /// - `ROSTER_API_DOCS` (optional, defaults to false)
    /// - `ROSTER_SEED_DEMO` (optional, defaults to true)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("ROSTER_PORT") {
            None => defaults.port,
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "Invalid ROSTER_PORT '{raw}': must be an integer between 0 and 65535"
                ))
            })?,
        };

        let api_tokens = match lookup("ROSTER_API_TOKENS") {
            None => defaults.api_tokens,
            Some(raw) => {
                let tokens: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
                if tokens.is_empty() {
                    return Err(AppError::Config(
                        "ROSTER_API_TOKENS is set but contains no tokens".into(),
                    ));
                }
                tokens
            }
        };

        let api_docs = match lookup("ROSTER_API_DOCS") {
            None => defaults.api_docs,
            Some(raw) => parse_flag("ROSTER_API_DOCS", &raw)?,
        };

        let seed_demo = match lookup("ROSTER_SEED_DEMO") {
            None => defaults.seed_demo,
            Some(raw) => parse_flag("ROSTER_SEED_DEMO", &raw)?,
        };

        Ok(Self {
            port,
            api_tokens,
            api_docs,
            seed_demo,
        })
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "Invalid {name} '{raw}': expected true or false"
        ))),
    }
}
