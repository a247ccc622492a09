//! History query and maintenance services.

pub mod service;

pub use service::HistoryService;
