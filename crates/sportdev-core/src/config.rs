//! Startup configuration for the two hosted services.
//!
//! Both services are opaque endpoint/key pairs supplied at build time, the
//! same way the original deployment injected them into the bundle. Nothing in
//! here is behavior; the clients never inspect the values beyond sending them.

/// Default generative model used by the coaching service.
pub const DEFAULT_COACH_MODEL: &str = "gemini-3-pro-preview";

/// Default endpoint for the generative language API.
pub const DEFAULT_COACH_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Credentials and endpoint for the generative coaching service.
#[derive(Debug, Clone)]
pub struct CoachConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl CoachConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_COACH_MODEL.to_string(),
            endpoint: DEFAULT_COACH_ENDPOINT.to_string(),
        }
    }
}

/// Project endpoint/key pair for the account and persistence service.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub project_url: String,
    pub anon_key: String,
}

impl AccountConfig {
    pub fn new(project_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            project_url: project_url.into(),
            anon_key: anon_key.into(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub coach: CoachConfig,
    pub account: AccountConfig,
}

impl AppConfig {
    /// Capture configuration from the build environment.
    ///
    /// Missing variables yield empty strings rather than failing: a missing
    /// key degrades to service faults at call time, which the sessions already
    /// turn into user-visible fallback text.
    pub fn from_env() -> Self {
        Self {
            coach: CoachConfig::new(option_env!("GEMINI_API_KEY").unwrap_or_default()),
            account: AccountConfig::new(
                option_env!("SUPABASE_URL").unwrap_or_default(),
                option_env!("SUPABASE_ANON_KEY").unwrap_or_default(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coach_config_defaults() {
        let config = CoachConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, DEFAULT_COACH_MODEL);
        assert!(config.endpoint.starts_with("https://"));
    }

    #[test]
    fn test_from_env_never_panics() {
        let config = AppConfig::from_env();
        assert_eq!(config.coach.model, DEFAULT_COACH_MODEL);
    }
}
