//! Dongle checkout/checkin services.

pub mod service;
pub mod transition;

pub use service::{DongleService, StatusSnapshot};
pub use transition::Transition;
