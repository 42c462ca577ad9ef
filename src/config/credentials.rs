//! API key resolution from configuration and environment.
//!
//! The key is never compiled in: it comes from `api.api_key` in the config
//! file or, when that is absent, from the environment variable named by
//! `api.api_key_env`.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building requests.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the API.
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

/// Result of resolving the API key.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured(SecureString),
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the API key: config value first, then the environment.
    ///
    /// Called on demand and not cached.
    pub fn resolve_api_key(&self) -> CredentialStatus {
        if let Some(key) = self.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key));
            }
        }

        if self.api_key_env.is_empty() {
            return CredentialStatus::Unconfigured {
                reason: "api.api_key is not set and api.api_key_env is empty".to_string(),
            };
        }

        match std::env::var(&self.api_key_env) {
            Ok(value) if !value.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(value.trim()))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!(
                    "api.api_key is not set and environment variable {} is empty",
                    self.api_key_env
                ),
            },
        }
    }
}
