//! Route handlers organized by domain.

pub mod auth;
pub mod dongle;
pub mod health;
pub mod history;
pub mod status;
