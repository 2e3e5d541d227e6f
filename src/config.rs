//! Application configuration loaded from environment variables.
//!
//! Credentials **must** be provided via environment variables (or the
//! OS keychain, see [`crate::credentials`]):
//! - `DOMPET_API_KEY` — merchant API key
//! - `DOMPET_API_SECRET` — merchant API secret used for request signing
//!
//! An optional `DOMPET_API_URL` overrides the default platform endpoint
//! and `DOMPET_MUTATION_LIMIT` sets how many mutation records the
//! dashboard fetches per load (the window all client-side filtering and
//! pagination operates on).

/// Default platform REST endpoint.
const DEFAULT_API_URL: &str = "https://api.lapaktopup.example/v1";

/// Default mutation history window size.
const DEFAULT_MUTATION_LIMIT: usize = 100;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// Platform API configuration values.
#[derive(Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// Number of mutation records fetched per load.
    pub mutation_limit: usize,
}

/// Loads the application configuration from environment variables.
///
/// The endpoint defaults to the public platform URL and can be
/// overridden with `DOMPET_API_URL`. API credentials are optional at
/// this layer (the client rejects missing ones) but when one is set
/// both must be present.
///
/// # Errors
///
/// Returns [`DompetError::Config`](crate::DompetError::Config) if only
/// one of the two credential variables is set, or if
/// `DOMPET_MUTATION_LIMIT` is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url =
        non_empty_var("DOMPET_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let api_key = non_empty_var("DOMPET_API_KEY");
    let api_secret = non_empty_var("DOMPET_API_SECRET");

    match (&api_key, &api_secret) {
        (Some(_), None) => {
            return Err(crate::DompetError::Config(
                "DOMPET_API_KEY is set but DOMPET_API_SECRET is missing".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(crate::DompetError::Config(
                "DOMPET_API_SECRET is set but DOMPET_API_KEY is missing".to_string(),
            ));
        }
        _ => {}
    }

    let mutation_limit = match non_empty_var("DOMPET_MUTATION_LIMIT") {
        Some(raw) => match raw.parse::<usize>() {
            Ok(limit) if limit > 0 => limit,
            _ => {
                return Err(crate::DompetError::Config(format!(
                    "DOMPET_MUTATION_LIMIT must be a positive integer, got {raw:?}"
                )));
            }
        },
        None => DEFAULT_MUTATION_LIMIT,
    };

    Ok(AppConfig {
        api: ApiConfig {
            base_url,
            api_key,
            api_secret,
            mutation_limit,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
