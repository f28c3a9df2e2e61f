//! Institution classification by identifier substrings.

use tracing::debug;

use crate::catalog::{Template, TemplateCatalog};

/// Outcome of classifying a notification body.
#[derive(Debug, Clone, Copy)]
pub enum Classification<'a> {
    /// First template in catalog order with an identifier present.
    Matched(&'a Template),
    /// No template identified the text.
    Unmatched,
}

impl<'a> Classification<'a> {
    pub fn template(&self) -> Option<&'a Template> {
        match *self {
            Classification::Matched(t) => Some(t),
            Classification::Unmatched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Classification::Matched(_))
    }
}

/// Selects a template by case-insensitive identifier presence.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a TemplateCatalog,
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Return the first template whose identifiers occur in `text`.
    pub fn classify(&self, text: &str) -> Classification<'a> {
        let lowered = text.to_lowercase();

        match self.catalog.iter().find(|t| t.identifies(&lowered)) {
            Some(template) => {
                debug!("Classified text as {}", template.name());
                Classification::Matched(template)
            }
            None => {
                debug!("No template identifies {} characters of text", text.len());
                Classification::Unmatched
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::{Field, TemplateDef};

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::new([
            TemplateDef::new("Specific", ["Awash Bank Mobile"])
                .with_field(Field::Amount, [r"ETB\s*([\d,.]+)"]),
            TemplateDef::new("Generic", ["awash"]).with_field(Field::Amount, [r"Birr\s*([\d,.]+)"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_case_insensitive_match() {
        let catalog = catalog();
        let classifier = Classifier::new(&catalog);

        let result = classifier.classify("<p>AWASH bank MOBILE</p> payment");
        assert_eq!(result.template().map(Template::name), Some("Specific"));
    }

    #[test]
    fn test_catalog_order_wins() {
        let catalog = catalog();
        let classifier = Classifier::new(&catalog);

        // Both identifiers are present; the earlier template is chosen
        let result = classifier.classify("awash bank mobile alert from awash");
        assert_eq!(result.template().map(Template::name), Some("Specific"));

        let result = classifier.classify("awash alert");
        assert_eq!(result.template().map(Template::name), Some("Generic"));
    }

    #[test]
    fn test_unmatched() {
        let catalog = catalog();
        let result = Classifier::new(&catalog).classify("Your parcel has shipped");
        assert!(!result.is_matched());
        assert!(result.template().is_none());
    }

    #[test]
    fn test_empty_catalog_never_matches() {
        let catalog = TemplateCatalog::new(Vec::new()).unwrap();
        assert!(!Classifier::new(&catalog).classify("cbe telebirr").is_matched());
    }

    #[test]
    fn test_builtin_generic_short_code() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let classifier = Classifier::new(&catalog);

        // "127" is a Telebirr identifier, CBE still wins when both appear
        let result = classifier.classify("CBE: call 127 for help");
        assert_eq!(result.template().map(Template::name), Some("CBE"));

        let result = classifier.classify("Dial *127# to check your balance");
        assert_eq!(result.template().map(Template::name), Some("Telebirr"));
    }
}
