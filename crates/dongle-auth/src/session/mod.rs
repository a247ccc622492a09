//! Session lifecycle: token issue, validation and revocation.

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{Session, SessionStore};
