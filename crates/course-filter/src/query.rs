//! Directus Query Builder
//!
//! Builds the query string attached to `/items/<collection>` requests.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

/// Characters kept verbatim in query values (field lists stay readable)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'*')
    .remove(b',');

/// Fields needed to render and filter a course
pub const COURSE_FIELDS: &[&str] = &[
    "id",
    "status",
    "course_type",
    "duration",
    "translations.*",
    "main_competences.competences_id.id",
    "competences.competences_id.id",
    "competences.competences_id.parent_competence",
];

/// Fields needed for the competence sidebar
pub const COMPETENCE_FIELDS: &[&str] = &[
    "id",
    "parent_competence",
    "color",
    "color_dark",
    "translations.*",
];

#[derive(Debug, Clone, Default)]
pub struct DirectusQuery {
    fields: Vec<String>,
    filter: Option<Value>,
    limit: Option<u32>,
    sort: Vec<String>,
}

impl DirectusQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Prefix every field with `relation.` (e.g. for a singleton's nested course)
    pub fn nested_fields(mut self, relation: &str, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| format!("{}.{}", relation, f)).collect();
        self
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, field: &str) -> Self {
        self.sort.push(field.to_string());
        self
    }

    /// Encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if !self.fields.is_empty() {
            params.push(("fields", self.fields.join(",")));
        }
        if let Some(filter) = &self.filter {
            params.push(("filter", filter.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if !self.sort.is_empty() {
            params.push(("sort", self.sort.join(",")));
        }
        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
