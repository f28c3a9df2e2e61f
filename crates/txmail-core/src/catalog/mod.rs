//! Template catalog: compiled institution templates in precedence order.

mod builtin;

pub use builtin::builtin_templates;

use std::collections::{BTreeMap, HashSet};

use regex::{Match, Regex};
use tracing::info;

use crate::error::CatalogError;
use crate::models::config::TxmailConfig;
use crate::models::template::{Field, TemplateDef};

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// A compiled field pattern with exactly one capture group.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    fn compile(template: &str, field: Field, source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|e| CatalogError::InvalidPattern {
            template: template.to_string(),
            field,
            pattern: source.to_string(),
            source: e,
        })?;

        // captures_len counts the implicit whole-match group.
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(CatalogError::CaptureGroups {
                template: template.to_string(),
                field,
                pattern: source.to_string(),
                found,
            });
        }

        Ok(Self { regex })
    }

    /// Pattern source text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the first match and return `(whole match, capture group)`.
    pub fn find_capture<'t>(&self, text: &'t str) -> Option<(Match<'t>, Match<'t>)> {
        let caps = self.regex.captures(text)?;
        Some((caps.get(0)?, caps.get(1)?))
    }
}

/// A compiled institution template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    identifiers: Vec<String>,
    /// Lowercased identifiers for classification.
    needles: Vec<String>,
    fields: BTreeMap<Field, Vec<Pattern>>,
}

impl Template {
    /// Compile a definition, validating identifiers and patterns.
    pub fn compile(def: &TemplateDef) -> Result<Self> {
        if def.identifiers.is_empty() {
            return Err(CatalogError::NoIdentifiers {
                template: def.name.clone(),
            });
        }
        if def.identifiers.iter().any(|id| id.trim().is_empty()) {
            return Err(CatalogError::BlankIdentifier {
                template: def.name.clone(),
            });
        }

        let mut fields = BTreeMap::new();
        for (&field, sources) in &def.fields {
            if sources.is_empty() {
                return Err(CatalogError::NoPatterns {
                    template: def.name.clone(),
                    field,
                });
            }
            let patterns = sources
                .iter()
                .map(|s| Pattern::compile(&def.name, field, s))
                .collect::<Result<Vec<_>>>()?;
            fields.insert(field, patterns);
        }

        Ok(Self {
            name: def.name.clone(),
            identifiers: def.identifiers.clone(),
            needles: def.identifiers.iter().map(|id| id.to_lowercase()).collect(),
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Declared fields with their ordered patterns.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &[Pattern])> {
        self.fields.iter().map(|(f, p)| (*f, p.as_slice()))
    }

    /// Ordered patterns for a field, if declared.
    pub fn patterns(&self, field: Field) -> Option<&[Pattern]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    /// Whether any identifier occurs in `lowered`, which must already be lowercase.
    pub fn identifies(&self, lowered: &str) -> bool {
        self.needles.iter().any(|needle| lowered.contains(needle.as_str()))
    }

    /// Convert back to the declarative form.
    pub fn to_def(&self) -> TemplateDef {
        TemplateDef {
            name: self.name.clone(),
            identifiers: self.identifiers.clone(),
            fields: self
                .fields
                .iter()
                .map(|(f, p)| (*f, p.iter().map(|p| p.as_str().to_string()).collect()))
                .collect(),
        }
    }
}

/// Ordered, immutable set of templates. Earlier templates win classification.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Compile a list of definitions, preserving order.
    pub fn new<I>(defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = TemplateDef>,
    {
        let mut seen = HashSet::new();
        let mut templates = Vec::new();

        for def in defs {
            if !seen.insert(def.name.clone()) {
                return Err(CatalogError::DuplicateTemplate(def.name));
            }
            templates.push(Template::compile(&def)?);
        }

        info!(
            "Compiled template catalog: {}",
            templates.iter().map(Template::name).collect::<Vec<_>>().join(", ")
        );

        Ok(Self { templates })
    }

    /// The built-in institution templates.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_templates())
    }

    /// User templates from the config, followed by the built-ins if enabled.
    pub fn from_config(config: &TxmailConfig) -> Result<Self> {
        let mut defs = config.templates.clone();
        if config.extraction.include_builtin_templates {
            defs.extend(builtin_templates());
        }
        Self::new(defs)
    }

    /// Templates in precedence order.
    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateCatalog {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn def(name: &str) -> TemplateDef {
        TemplateDef::new(name, [name.to_lowercase()])
            .with_field(Field::Amount, [r"ETB\s*([\d,.]+)"])
    }

    #[test]
    fn test_builtin_order() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let names: Vec<&str> = catalog.iter().map(Template::name).collect();
        assert_eq!(names, vec!["CBE", "Telebirr", "BOA", "Dashen", "Bunna"]);
    }

    #[test]
    fn test_builtin_templates_declare_amount() {
        let catalog = TemplateCatalog::builtin().unwrap();
        for template in &catalog {
            assert!(
                template.patterns(Field::Amount).is_some(),
                "{} has no amount patterns",
                template.name()
            );
        }
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let bad = TemplateDef::new("Bad", ["bad"]).with_field(Field::Amount, [r"ETB\s*(\d+"]);
        let err = TemplateCatalog::new([bad]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { field: Field::Amount, .. }));
    }

    #[test]
    fn test_capture_group_count_enforced() {
        let none = TemplateDef::new("None", ["none"]).with_field(Field::Amount, [r"ETB\s*\d+"]);
        let err = TemplateCatalog::new([none]).unwrap_err();
        assert!(matches!(err, CatalogError::CaptureGroups { found: 0, .. }));

        let two = TemplateDef::new("Two", ["two"]).with_field(Field::Fee, [r"(fee)\s*(\d+)"]);
        let err = TemplateCatalog::new([two]).unwrap_err();
        assert!(matches!(err, CatalogError::CaptureGroups { found: 2, .. }));

        let non_capturing = TemplateDef::new("Ok", ["ok"])
            .with_field(Field::Fee, [r"(?:fee|charge)\s*(\d+)"]);
        assert!(TemplateCatalog::new([non_capturing]).is_ok());
    }

    #[test]
    fn test_identifier_validation() {
        let empty = TemplateDef::new("Empty", Vec::<String>::new());
        assert!(matches!(
            TemplateCatalog::new([empty]).unwrap_err(),
            CatalogError::NoIdentifiers { .. }
        ));

        let blank = TemplateDef::new("Blank", ["cbe", "  "]);
        assert!(matches!(
            TemplateCatalog::new([blank]).unwrap_err(),
            CatalogError::BlankIdentifier { .. }
        ));
    }

    #[test]
    fn test_field_without_patterns() {
        let def = TemplateDef::new("X", ["x"]).with_field(Field::Vat, Vec::<String>::new());
        assert!(matches!(
            TemplateCatalog::new([def]).unwrap_err(),
            CatalogError::NoPatterns { field: Field::Vat, .. }
        ));
    }

    #[test]
    fn test_duplicate_names() {
        let err = TemplateCatalog::new([def("Awash"), def("Awash")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTemplate(name) if name == "Awash"));
    }

    #[test]
    fn test_from_config_puts_user_templates_first() {
        let mut config = TxmailConfig::default();
        config.templates.push(def("Awash"));

        let catalog = TemplateCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.list()[0].name(), "Awash");

        config.extraction.include_builtin_templates = false;
        let catalog = TemplateCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_to_def_round_trip() {
        let original = def("Awash").with_field(Field::TransactionId, [r"Ref\s*(\w+)", r"Txn\s*(\w+)"]);
        let template = Template::compile(&original).unwrap();
        assert_eq!(template.to_def(), original);
    }

    #[test]
    fn test_identifies_is_case_insensitive_on_identifiers() {
        let template = Template::compile(
            &TemplateDef::new("CBE", ["Commercial Bank of Ethiopia"]),
        )
        .unwrap();
        assert!(template.identifies("dear customer of commercial bank of ethiopia"));
        assert!(!template.identifies("dear customer"));
    }
}
