//! Tile server configuration.

use serde::{Deserialize, Serialize};

const fn default_port() -> u16 {
    5000
}

const fn default_max_tiles() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Port the tile endpoint binds.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tiles handed out per request at most.
    #[serde(default = "default_max_tiles")]
    pub max_tiles: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            max_tiles: default_max_tiles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_the_platform_expectations() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_tiles, 50);
    }
}
