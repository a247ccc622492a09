//! Dongle domain entities.

pub mod model;
pub mod seed;

pub use model::{Dongle, DongleState};
pub use seed::default_pool;
