//! Catalog Models
//!
//! Data structures matching the Directus `courses` and `competences` collections.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Course type (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    /// Single training course
    Formation,
    /// Learning path made of several courses
    Parcours,
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Formation => "Formation",
            CourseType::Parcours => "Parcours",
        }
    }

    /// Unrecognised values yield `None` and are ignored by every filter.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Formation" => Some(CourseType::Formation),
            "Parcours" => Some(CourseType::Parcours),
            _ => None,
        }
    }
}

/// Localised course text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseTranslation {
    #[serde(default)]
    pub languages_code: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Directus ids may be numeric; they are always handled as strings
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Raw type value; see [`Course::kind`]
    #[serde(default)]
    pub course_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "de_vec_or_null")]
    pub translations: Vec<CourseTranslation>,
    /// Authoritative associations, each pointing at a top-level competence
    #[serde(default)]
    pub main_competences: Option<Vec<CompetenceLink>>,
    /// Legacy associations, possibly pointing at a sub-competence
    #[serde(default)]
    pub competences: Option<Vec<CompetenceLink>>,
}

/// Which association shape is authoritative for a course
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associations<'a> {
    Main(&'a [CompetenceLink]),
    Legacy(&'a [CompetenceLink]),
    None,
}

impl<'a> Associations<'a> {
    pub fn uses_main_shape(&self) -> bool {
        matches!(self, Associations::Main(_))
    }

    pub fn links(&self) -> &'a [CompetenceLink] {
        match self {
            Associations::Main(links) | Associations::Legacy(links) => links,
            Associations::None => &[],
        }
    }
}

impl Course {
    pub fn new(id: impl Into<String>, course_type: Option<CourseType>) -> Self {
        Self {
            id: id.into(),
            course_type: course_type.map(|t| t.as_str().to_string()),
            status: None,
            duration: None,
            translations: Vec::new(),
            main_competences: None,
            competences: None,
        }
    }

    /// Recognised course type, if any
    pub fn kind(&self) -> Option<CourseType> {
        self.course_type.as_deref().and_then(CourseType::parse)
    }

    /// Resolve the association shape once.
    ///
    /// Any non-empty `main_competences` list wins over `competences`.
    pub fn associations(&self) -> Associations<'_> {
        match (&self.main_competences, &self.competences) {
            (Some(main), _) if !main.is_empty() => Associations::Main(main.as_slice()),
            (_, Some(legacy)) => Associations::Legacy(legacy.as_slice()),
            _ => Associations::None,
        }
    }

    /// Translation for `lang`, falling back to the first one
    pub fn translation(&self, lang: &str) -> Option<&CourseTranslation> {
        self.translations
            .iter()
            .find(|t| t.languages_code == lang)
            .or_else(|| self.translations.first())
    }

    pub fn title(&self, lang: &str) -> &str {
        self.translation(lang)
            .and_then(|t| t.title.as_deref())
            .unwrap_or_default()
    }

    pub fn subtitle(&self, lang: &str) -> Option<&str> {
        self.translation(lang).and_then(|t| t.subtitle.as_deref())
    }

    pub fn description(&self, lang: &str) -> Option<&str> {
        self.translation(lang).and_then(|t| t.description.as_deref())
    }
}

/// Junction row between a course and a competence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompetenceLink {
    #[serde(default, deserialize_with = "de_competence_ref")]
    pub competences_id: Option<Competence>,
}

impl CompetenceLink {
    pub fn to(competence: Competence) -> Self {
        Self {
            competences_id: Some(competence),
        }
    }
}

/// Parent reference of a competence.
///
/// `Unknown` (field not loaded) and `TopLevel` (explicit null) are distinct:
/// only the latter lets a legacy association resolve to the competence itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParentRef {
    #[default]
    Unknown,
    TopLevel,
    Parent(String),
}

impl ParentRef {
    pub fn is_unknown(&self) -> bool {
        matches!(self, ParentRef::Unknown)
    }
}

impl<'de> Deserialize<'de> for ParentRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => ParentRef::TopLevel,
            Value::Object(map) => match map.get("id").and_then(scalar_to_string) {
                Some(id) => ParentRef::Parent(id),
                // expanded parent without its id behaves like an unloaded one
                None => ParentRef::Unknown,
            },
            other => match scalar_to_string(&other) {
                Some(id) => ParentRef::Parent(id),
                None => ParentRef::Unknown,
            },
        })
    }
}

impl Serialize for ParentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParentRef::Parent(id) => serializer.serialize_str(id),
            ParentRef::TopLevel | ParentRef::Unknown => serializer.serialize_none(),
        }
    }
}

/// Localised competence label
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompetenceTranslation {
    #[serde(default)]
    pub languages_code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A taxonomy node (top-level or sub-competence)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Competence {
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "ParentRef::is_unknown")]
    pub parent_competence: ParentRef,
    #[serde(default, deserialize_with = "de_vec_or_null")]
    pub translations: Vec<CompetenceTranslation>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub color_dark: Option<String>,
}

/// Display colours, always `#`-prefixed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetenceColors {
    pub light: String,
    pub dark: String,
}

impl Competence {
    pub fn new(id: impl Into<String>, parent: ParentRef) -> Self {
        Self {
            id: Some(id.into()),
            parent_competence: parent,
            ..Default::default()
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_competence == ParentRef::TopLevel
    }

    pub fn label(&self, lang: &str) -> &str {
        self.translations
            .iter()
            .find(|t| t.languages_code == lang)
            .or_else(|| self.translations.first())
            .and_then(|t| t.name.as_deref())
            .unwrap_or_default()
    }

    /// Light/dark pair; a missing dark variant reuses the light one.
    pub fn colors(&self) -> Option<CompetenceColors> {
        let light = self.color.as_deref().and_then(normalize_hex)?;
        let dark = self
            .color_dark
            .as_deref()
            .and_then(normalize_hex)
            .unwrap_or_else(|| light.clone());
        Some(CompetenceColors { light, dark })
    }
}

/// Prefix a colour with `#` when the CMS stored it bare
pub fn normalize_hex(color: &str) -> Option<String> {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('#') {
        Some(trimmed.to_string())
    } else {
        Some(format!("#{}", trimmed))
    }
}

/// Directus `{ "data": ... }` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct DirectusResponse<T> {
    pub data: T,
}

/// The `weekly_course` singleton
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeeklyCourse {
    #[serde(default)]
    pub course: Option<Course>,
}

// ========================
// Lenient field decoders
// ========================

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(&value).ok_or_else(|| de::Error::custom(format!("invalid id: {}", value)))
}

fn de_opt_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_to_string(&Value::deserialize(deserializer)?))
}

fn de_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Junction targets come back either expanded or as a bare id
fn de_competence_ref<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Competence>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value @ Value::Object(_) => serde_json::from_value(value).map(Some).map_err(de::Error::custom),
        other => Ok(scalar_to_string(&other).map(|id| Competence {
            id: Some(id),
            ..Default::default()
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_type_parse() {
        assert_eq!(CourseType::parse("Formation"), Some(CourseType::Formation));
        assert_eq!(CourseType::parse("Parcours"), Some(CourseType::Parcours));
        assert_eq!(CourseType::parse("formation"), None);
        assert_eq!(CourseType::Parcours.as_str(), "Parcours");
    }

    #[test]
    fn test_numeric_ids_become_strings() {
        let course: Course = serde_json::from_value(json!({
            "id": 42,
            "course_type": "Formation",
            "duration": 90
        }))
        .unwrap();
        assert_eq!(course.id, "42");
        assert_eq!(course.kind(), Some(CourseType::Formation));
        assert_eq!(course.duration.as_deref(), Some("90"));
        assert!(course.translations.is_empty());
    }

    #[test]
    fn test_parent_ref_states() {
        let absent: Competence = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(absent.parent_competence, ParentRef::Unknown);

        let null: Competence = serde_json::from_value(json!({ "id": 1, "parent_competence": null })).unwrap();
        assert_eq!(null.parent_competence, ParentRef::TopLevel);
        assert!(null.is_top_level());

        let scalar: Competence = serde_json::from_value(json!({ "id": 2, "parent_competence": 1 })).unwrap();
        assert_eq!(scalar.parent_competence, ParentRef::Parent("1".to_string()));

        let expanded: Competence =
            serde_json::from_value(json!({ "id": 2, "parent_competence": { "id": "7" } })).unwrap();
        assert_eq!(expanded.parent_competence, ParentRef::Parent("7".to_string()));
    }

    #[test]
    fn test_link_accepts_bare_id() {
        let link: CompetenceLink = serde_json::from_value(json!({ "competences_id": 5 })).unwrap();
        let target = link.competences_id.unwrap();
        assert_eq!(target.id.as_deref(), Some("5"));
        assert_eq!(target.parent_competence, ParentRef::Unknown);

        let empty: CompetenceLink = serde_json::from_value(json!({ "competences_id": null })).unwrap();
        assert!(empty.competences_id.is_none());
    }

    #[test]
    fn test_associations_main_wins() {
        let mut course = Course::new("1", None);
        assert_eq!(course.associations(), Associations::None);

        course.competences = Some(vec![CompetenceLink::to(Competence::new("3", ParentRef::TopLevel))]);
        assert!(!course.associations().uses_main_shape());

        course.main_competences = Some(vec![]);
        assert!(!course.associations().uses_main_shape());

        course.main_competences = Some(vec![CompetenceLink::to(Competence::new("4", ParentRef::Unknown))]);
        assert!(course.associations().uses_main_shape());
        assert_eq!(course.associations().links().len(), 1);
    }

    #[test]
    fn test_translation_fallback() {
        let course: Course = serde_json::from_value(json!({
            "id": "1",
            "translations": [
                { "languages_code": "fr", "title": "Bonjour" },
                { "languages_code": "en", "title": "Hello", "subtitle": "Hi" }
            ]
        }))
        .unwrap();
        assert_eq!(course.title("en"), "Hello");
        assert_eq!(course.subtitle("en"), Some("Hi"));
        assert_eq!(course.title("de"), "Bonjour");
        assert_eq!(course.subtitle("fr"), None);
    }

    #[test]
    fn test_colors_are_normalized() {
        let mut competence = Competence::new("1", ParentRef::TopLevel);
        assert!(competence.colors().is_none());

        competence.color = Some("ff0000".to_string());
        competence.color_dark = Some("#330000".to_string());
        let colors = competence.colors().unwrap();
        assert_eq!(colors.light, "#ff0000");
        assert_eq!(colors.dark, "#330000");

        competence.color_dark = None;
        assert_eq!(competence.colors().unwrap().dark, "#ff0000");
        assert_eq!(normalize_hex("  "), None);
    }
}
