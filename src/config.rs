//! Server configuration.
//!
//! The service has no config file and reads no environment variables apart from
//! `RUST_LOG`. [`ServerConfig::default`] is what the binary runs with; tests build their
//! own value with a temp data path and port 0.

use std::path::PathBuf;

pub use crate::framework::FailurePolicy;

/// Listen on every interface, port 3000.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/products.json";

/// Capacity of the actor's request channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_address: String,
    /// The JSON file holding the product collection.
    pub data_path: PathBuf,
    /// What happens when the data file cannot be read or written.
    pub failure_policy: FailurePolicy,
    pub channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            failure_policy: FailurePolicy::default(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.data_path, PathBuf::from("data/products.json"));
        assert_eq!(config.failure_policy, FailurePolicy::Strict);
        assert_eq!(config.channel_capacity, 32);
    }
}
