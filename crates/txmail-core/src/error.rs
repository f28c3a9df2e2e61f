//! Error types for the txmail-core library.
//!
//! Parsing never fails: an unrecognized body is `None` and a missing field is
//! a sentinel. The only errors live at catalog construction and config loading.

use thiserror::Error;

use crate::models::template::Field;

/// Main error type for the txmail library.
#[derive(Error, Debug)]
pub enum TxmailError {
    /// Template catalog could not be built.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors detected while compiling template definitions into a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Template declares no identifiers.
    #[error("template {template} has no identifiers")]
    NoIdentifiers { template: String },

    /// Identifier is empty or whitespace and would match every text.
    #[error("template {template} has a blank identifier")]
    BlankIdentifier { template: String },

    /// Field is declared with an empty pattern list.
    #[error("template {template}: field {field} has no patterns")]
    NoPatterns { template: String, field: Field },

    /// Pattern does not compile.
    #[error("template {template}: invalid pattern for {field}: {pattern}")]
    InvalidPattern {
        template: String,
        field: Field,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Pattern must have exactly one capturing group.
    #[error("template {template}: pattern for {field} has {found} capture groups, expected 1: {pattern}")]
    CaptureGroups {
        template: String,
        field: Field,
        pattern: String,
        found: usize,
    },

    /// Two templates share a name.
    #[error("duplicate template name: {0}")]
    DuplicateTemplate(String),
}

/// Result type for the txmail library.
pub type Result<T> = std::result::Result<T, TxmailError>;
