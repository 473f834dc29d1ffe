//! Process configuration.
//!
//! Loaded once at startup and passed into client construction; the core
//! logic never touches the environment.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the service-account key file.
pub const SERVICE_ACCOUNT_PATH_VAR: &str = "SERVICE_ACCOUNT_PATH";
/// Environment variable naming the delegated subject.
pub const SUBJECT_EMAIL_VAR: &str = "SUBJECT_EMAIL";

/// Missing connection parameters. Fatal at startup, never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} env var required")]
    MissingVar(&'static str),
}

/// Connection and identity parameters for the remote services.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the service-account key JSON.
    pub service_account_path: PathBuf,
    /// User to impersonate via domain-wide delegation.
    pub subject_email: String,
}

impl Config {
    /// Load from the environment; explicit values win over env vars.
    pub fn load(
        service_account: Option<PathBuf>,
        subject: Option<String>,
    ) -> Result<Self, ConfigError> {
        let service_account_path = match service_account {
            Some(path) => path,
            None => env::var(SERVICE_ACCOUNT_PATH_VAR)
                .map(PathBuf::from)
                .map_err(|_| ConfigError::MissingVar(SERVICE_ACCOUNT_PATH_VAR))?,
        };
        let subject_email = match subject {
            Some(subject) => subject,
            None => env::var(SUBJECT_EMAIL_VAR)
                .map_err(|_| ConfigError::MissingVar(SUBJECT_EMAIL_VAR))?,
        };
        Ok(Self { service_account_path, subject_email })
    }
}
