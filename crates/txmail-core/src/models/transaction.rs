//! Transaction record produced from a recognized notification.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::template::Field;

/// Money flow direction relative to the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Money received.
    Credit,
    /// Money spent or sent.
    Debit,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Debit
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Credit => f.write_str("credit"),
            Direction::Debit => f.write_str("debit"),
        }
    }
}

/// Value of an extracted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Raw captured text (ids, names, account numbers).
    Text(String),
    /// Normalized numeric value.
    Amount(Decimal),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Amount(_) => None,
        }
    }

    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            FieldValue::Amount(d) => Some(*d),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Amount(d) => write!(f, "{}", d),
        }
    }
}

/// A parsed transaction notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    /// Name of the matched template.
    pub institution: String,

    /// Credit or debit.
    pub direction: Direction,

    /// Extracted fields. Numeric fields declared by the template are always
    /// present; text fields only when a pattern matched.
    pub fields: BTreeMap<Field, FieldValue>,

    /// Leading slice of the input body.
    pub raw_excerpt: String,

    /// Message subject, attached by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl TransactionRecord {
    /// Attach the message subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Text value of a field, if present.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Numeric value of a field, if present.
    pub fn decimal(&self, field: Field) -> Option<Decimal> {
        self.get(field).and_then(FieldValue::as_amount)
    }

    /// Transaction amount, zero when not found.
    pub fn amount(&self) -> Decimal {
        self.decimal(Field::Amount).unwrap_or_default()
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.text(Field::TransactionId)
    }

    pub fn counterparty(&self) -> Option<&str> {
        self.text(Field::Counterparty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TransactionRecord {
        let mut fields = BTreeMap::new();
        fields.insert(Field::Amount, FieldValue::Amount(Decimal::new(150000, 2)));
        fields.insert(Field::TransactionId, FieldValue::Text("AB12XY".to_string()));
        TransactionRecord {
            institution: "CBE".to_string(),
            direction: Direction::Debit,
            fields,
            raw_excerpt: "You have transferred".to_string(),
            subject: None,
        }
    }

    #[test]
    fn test_accessors() {
        let record = record();
        assert_eq!(record.amount(), Decimal::new(1500, 0));
        assert_eq!(record.transaction_id(), Some("AB12XY"));
        assert_eq!(record.counterparty(), None);
        assert_eq!(record.decimal(Field::TransactionId), None);
    }

    #[test]
    fn test_serialize() {
        let record = record().with_subject("Debit alert");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["institution"], "CBE");
        assert_eq!(json["direction"], "debit");
        assert_eq!(json["fields"]["amount"], "1500.00");
        assert_eq!(json["fields"]["transaction_id"], "AB12XY");
        assert_eq!(json["subject"], "Debit alert");
    }

    #[test]
    fn test_subject_omitted_when_absent() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json.get("subject").is_none());
    }
}
