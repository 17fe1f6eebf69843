//! Bearer token resolution.
//!
//! The token is resolved once at startup and handed to the search client
//! wrapped in [`SecureString`] so it never ends up in logs.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of token resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Token resolved successfully.
    Configured(SecureString),
    /// Token is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the bearer token.
    ///
    /// The environment variable named by `token_env` takes precedence over
    /// the `token` field. Empty values count as missing.
    pub fn resolve_credential(&self) -> CredentialStatus {
        let from_env = std::env::var(&self.token_env)
            .ok()
            .filter(|value| !value.trim().is_empty());

        if let Some(token) = from_env {
            return CredentialStatus::Configured(SecureString::new(token));
        }

        match self.token.as_deref() {
            Some(token) if !token.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(token.to_string()))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!("{} is not set and api.token is empty", self.token_env),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_with(token_env: &str, token: Option<&str>) -> ApiConfig {
        ApiConfig {
            token_env: token_env.to_string(),
            token: token.map(str::to_string),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-token".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-token"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-token"));

        assert_eq!(secret.expose(), "my-secret-token");
    }

    #[test]
    fn test_file_token_used_when_env_missing() {
        let api = api_with("MOVIESEARCH_TEST_UNSET_VAR_1", Some("file-token"));
        match api.resolve_credential() {
            CredentialStatus::Configured(token) => assert_eq!(token.expose(), "file-token"),
            other => panic!("Expected Configured, got {:?}", other),
        }
    }

    #[test]
    fn test_env_token_wins() {
        let var = "MOVIESEARCH_TEST_TOKEN_ENV_WINS";
        std::env::set_var(var, "env-token");
        let api = api_with(var, Some("file-token"));
        match api.resolve_credential() {
            CredentialStatus::Configured(token) => assert_eq!(token.expose(), "env-token"),
            other => panic!("Expected Configured, got {:?}", other),
        }
        std::env::remove_var(var);
    }

    #[test]
    fn test_blank_token_is_unconfigured() {
        let api = api_with("MOVIESEARCH_TEST_UNSET_VAR_2", Some("   "));
        assert!(matches!(
            api.resolve_credential(),
            CredentialStatus::Unconfigured { .. }
        ));
    }
}
