//! Declarative template definitions.
//!
//! A [`TemplateDef`] is the uncompiled, serializable form of an institution
//! template. It is what users write in the config file; the catalog compiles
//! it into a [`crate::catalog::Template`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named piece of transaction data sought in a notification body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Transaction amount.
    Amount,
    /// Bank-side transaction or reference id.
    TransactionId,
    /// Other party of the transfer.
    Counterparty,
    /// Service charge.
    Fee,
    /// VAT charged on the fee.
    Vat,
    /// Masked account number.
    Account,
    /// Balance after the transaction.
    Balance,
}

impl Field {
    /// All known fields, in record order.
    pub const ALL: [Field; 7] = [
        Field::Amount,
        Field::TransactionId,
        Field::Counterparty,
        Field::Fee,
        Field::Vat,
        Field::Account,
        Field::Balance,
    ];

    /// Whether values of this field are normalized to decimals.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Amount | Field::Fee | Field::Vat | Field::Balance)
    }

    /// Field name as used in configuration and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Amount => "amount",
            Field::TransactionId => "transaction_id",
            Field::Counterparty => "counterparty",
            Field::Fee => "fee",
            Field::Vat => "vat",
            Field::Account => "account",
            Field::Balance => "balance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s.trim())
            .ok_or_else(|| format!("unknown field: {}", s))
    }
}

// Serialized as plain strings so fields work as JSON object keys.
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Uncompiled template: identifiers plus ordered patterns per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDef {
    /// Institution name reported on matching records.
    pub name: String,

    /// Substrings whose case-insensitive presence selects this template.
    pub identifiers: Vec<String>,

    /// Patterns per field, tried in order. Each has exactly one capture group.
    pub fields: BTreeMap<Field, Vec<String>>,
}

impl TemplateDef {
    /// Start a definition with a name and identifiers.
    pub fn new<I, S>(name: impl Into<String>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            fields: BTreeMap::new(),
        }
    }

    /// Append patterns for a field, after any already declared.
    pub fn with_field<I, S>(mut self, field: Field, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .entry(field)
            .or_default()
            .extend(patterns.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert!("iban".parse::<Field>().is_err());
    }

    #[test]
    fn test_numeric_fields() {
        let numeric: Vec<Field> = Field::ALL.into_iter().filter(Field::is_numeric).collect();
        assert_eq!(
            numeric,
            vec![Field::Amount, Field::Fee, Field::Vat, Field::Balance]
        );
    }

    #[test]
    fn test_template_def_from_json() {
        let json = r#"{
            "name": "Awash",
            "identifiers": ["Awash Bank"],
            "fields": {
                "amount": ["credited with ETB\\s*([\\d,.]+)"],
                "transaction_id": ["Ref:\\s*([A-Z0-9]+)", "Txn\\s*([A-Z0-9]+)"]
            }
        }"#;

        let def: TemplateDef = serde_json::from_str(json).unwrap();

        let expected = TemplateDef::new("Awash", ["Awash Bank"])
            .with_field(Field::Amount, [r"credited with ETB\s*([\d,.]+)"])
            .with_field(Field::TransactionId, [r"Ref:\s*([A-Z0-9]+)", r"Txn\s*([A-Z0-9]+)"]);
        assert_eq!(def, expected);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let json = r#"{"name": "X", "identifiers": ["x"], "fields": {"iban": ["(\\d+)"]}}"#;
        let err = serde_json::from_str::<TemplateDef>(json).unwrap_err();
        assert!(err.to_string().contains("unknown field: iban"));
    }
}
