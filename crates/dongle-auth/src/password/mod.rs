//! Shared password verification.

pub mod secret;

pub use secret::SharedSecret;
