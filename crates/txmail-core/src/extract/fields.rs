//! Ordered-alternative field extraction.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::catalog::{Pattern, Template};
use crate::models::template::Field;

use super::ExtractionMatch;

/// Raw captured value per declared field; `None` when no pattern matched.
pub type RawFields = BTreeMap<Field, Option<String>>;

/// Runs a template's field patterns against text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every field the template declares.
    pub fn extract(&self, template: &Template, text: &str) -> RawFields {
        self.extract_matches(template, text)
            .into_iter()
            .map(|(field, hit)| (field, hit.map(|m| m.value)))
            .collect()
    }

    /// Like [`extract`](Self::extract), keeping which pattern won and where.
    pub fn extract_matches(
        &self,
        template: &Template,
        text: &str,
    ) -> BTreeMap<Field, Option<ExtractionMatch<String>>> {
        template
            .fields()
            .map(|(field, patterns)| {
                let hit = self.extract_field(patterns, text);
                match &hit {
                    Some(m) => debug!(
                        "{}: {} = {:?} (pattern #{})",
                        template.name(),
                        field,
                        m.value,
                        m.pattern_index
                    ),
                    None => trace!("{}: {} not found", template.name(), field),
                }
                (field, hit)
            })
            .collect()
    }

    /// Try patterns in order; the first non-empty capture wins.
    pub fn extract_field(&self, patterns: &[Pattern], text: &str) -> Option<ExtractionMatch<String>> {
        patterns.iter().enumerate().find_map(|(index, pattern)| {
            let (whole, group) = pattern.find_capture(text)?;
            let value = group.as_str().trim();
            if value.is_empty() {
                return None;
            }
            Some(
                ExtractionMatch::new(value.to_string(), index, whole.as_str())
                    .with_position(whole.start(), whole.end()),
            )
        })
    }
}
