//! Error types for the object pool
//!
//! Pool operations themselves cannot fail; these errors come from building
//! a [`PoolConfiguration`](crate::PoolConfiguration) out of external input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Invalid pool configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Environment variable {key} has invalid value {value:?}, expected a non-negative integer")]
    InvalidEnvironment { key: String, value: String },
}

impl From<toml::de::Error> for PoolError {
    fn from(err: toml::de::Error) -> Self {
        PoolError::InvalidConfiguration(err.message().to_string())
    }
}

pub type PoolResult<T> = Result<T, PoolError>;
