//! Configuration loading, validation and credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, FeedConfig, FeedMode};
