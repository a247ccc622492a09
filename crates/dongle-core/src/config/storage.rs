//! Data store configuration.

use serde::{Deserialize, Serialize};

/// Where the dongle document lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which document store backs the service.
    #[serde(default)]
    pub provider: StorageProviderKind,
    /// Path of the JSON document (used by the `local` provider).
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProviderKind::default(),
            data_file: default_data_file(),
        }
    }
}

/// Document store provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageProviderKind {
    /// Pretty-printed JSON file on local disk.
    #[default]
    Local,
    /// Process memory; contents are lost on restart.
    Memory,
}

impl std::fmt::Display for StorageProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

fn default_data_file() -> String {
    "data/dongles.json".to_string()
}
