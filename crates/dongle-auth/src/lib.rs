//! # dongle-auth
//!
//! The single shared-secret gate in front of the tracker API.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing of the configured shared password
//! - `session`: Expiring session tokens issued on login

pub mod password;
pub mod session;

pub use password::SharedSecret;
pub use session::{Session, SessionManager, SessionStore};
