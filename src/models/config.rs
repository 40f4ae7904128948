//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Directory where uploaded logos are stored; served under `/media`.
    pub media_root: String,
    /// Key material for the flash-message cookie store (>= 64 bytes).
    pub secret: String,
}
