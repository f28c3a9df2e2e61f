//! Data models: template definitions, transaction records, configuration.

pub mod config;
pub mod template;
pub mod transaction;
