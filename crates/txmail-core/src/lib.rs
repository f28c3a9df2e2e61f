//! Core library for bank transaction notification parsing.
//!
//! This crate provides:
//! - Institution templates with identifier substrings and ordered field patterns
//! - Classification of message bodies by institution
//! - Field extraction (amount, transaction id, counterparty, fee, VAT, account, balance)
//! - Locale-tolerant amount normalization to exact decimals

pub mod catalog;
pub mod error;
pub mod extract;
pub mod models;

pub use catalog::{Template, TemplateCatalog};
pub use error::{CatalogError, Result, TxmailError};
pub use extract::{Classification, Classifier, FieldExtractor, TemplateParser, TransactionParser};
pub use extract::{format_amount, normalize_amount};
pub use models::config::TxmailConfig;
pub use models::template::{Field, TemplateDef};
pub use models::transaction::{Direction, FieldValue, TransactionRecord};
