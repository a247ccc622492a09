//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder password shipped in the defaults; the server warns when it is in use.
pub const DEFAULT_SHARED_PASSWORD: &str = "changeme";

/// Shared-secret login configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The single password every user logs in with.
    #[serde(default = "default_shared_password")]
    pub shared_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            shared_password: default_shared_password(),
        }
    }
}

impl AuthConfig {
    /// Whether the shipped placeholder password is still configured.
    pub fn uses_default_password(&self) -> bool {
        self.shared_password == DEFAULT_SHARED_PASSWORD
    }
}

fn default_shared_password() -> String {
    DEFAULT_SHARED_PASSWORD.to_string()
}
