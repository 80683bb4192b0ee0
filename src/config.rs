//! Pool configuration options

use serde::Deserialize;

use crate::errors::{PoolError, PoolResult};

/// Environment variable that overrides [`PoolConfiguration::max_pool_size`].
pub const MAX_SIZE_ENV: &str = "BOUNDED_POOL_MAX_SIZE";

/// Configuration for object pool behavior
///
/// # Examples
///
/// ```
/// use bounded_objectpool::PoolConfiguration;
///
/// let config = PoolConfiguration::new()
///     .with_max_pool_size(16);
///
/// assert_eq!(config.max_pool_size, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfiguration {
    /// Maximum number of idle objects the pool retains for reuse
    pub max_pool_size: usize,
}

impl Default for PoolConfiguration {
    fn default() -> Self {
        Self { max_pool_size: 100 }
    }
}

impl PoolConfiguration {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum pool size
    ///
    /// Zero is allowed and turns the pool into "always allocate, always discard".
    pub fn with_max_pool_size(mut self, size: usize) -> Self {
        self.max_pool_size = size;
        self
    }

    /// Parse a configuration from TOML. Missing keys keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_objectpool::PoolConfiguration;
    ///
    /// let config = PoolConfiguration::from_toml_str("max_pool_size = 2").unwrap();
    /// assert_eq!(config.max_pool_size, 2);
    ///
    /// assert!(PoolConfiguration::from_toml_str("max_pool_size = -1").is_err());
    /// ```
    pub fn from_toml_str(input: &str) -> PoolResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> PoolResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> PoolResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(MAX_SIZE_ENV) {
            self.max_pool_size = raw.trim().parse().map_err(|_| PoolError::InvalidEnvironment {
                key: MAX_SIZE_ENV.to_string(),
                value: raw.clone(),
            })?;
        }
        Ok(self)
    }
}
