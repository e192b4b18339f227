//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Snapshot of a running world as reported by the host.
///
/// Never mutated locally; re-fetch to observe newer state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    /// Opaque identifier, unique per host
    pub id: String,
    /// Display name (not unique)
    pub name: String,
    /// Free-form description.
    /// `None` means the host omitted the field (or sent null), `Some("")` means present-but-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl World {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// How the user identifies the target world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldSelector {
    ById(String),
    ByName(String),
}

impl WorldSelector {
    /// Build a selector from the two mutually exclusive inputs.
    ///
    /// Exactly one of `id` and `name` must be set.
    pub fn from_parts(id: Option<String>, name: Option<String>) -> Result<Self, DomainError> {
        match (id, name) {
            (Some(id), None) => Ok(Self::ById(id)),
            (None, Some(name)) => Ok(Self::ByName(name)),
            (Some(_), Some(_)) => Err(DomainError::InvalidSelector(
                "both an id and a name were given".into(),
            )),
            (None, None) => Err(DomainError::InvalidSelector(
                "either an id or a name is required".into(),
            )),
        }
    }
}

impl std::fmt::Display for WorldSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ById(id) => write!(f, "id={id}"),
            Self::ByName(name) => write!(f, "name={name}"),
        }
    }
}

/// Rendering used for a resolved world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `name<TAB>id[<TAB>description]`
    #[default]
    Summary,
    /// Full JSON serialization
    Verbose,
}

impl OutputMode {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Summary
        }
    }
}

/// Case-insensitive name comparison.
///
/// Ordinal comparison after a per-character simple uppercase fold, independent of locale.
/// A character whose uppercase form is not a single character is compared unchanged,
/// so names of different character lengths never match. No trimming or normalization.
pub fn names_match(candidate: &str, wanted: &str) -> bool {
    candidate
        .chars()
        .map(fold_case)
        .eq(wanted.chars().map(fold_case))
}

fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Alpha", "ALPHA", true)]
    #[case("alpha", "Alpha", true)]
    #[case("Straße", "STRASSE", false)]
    #[case("Ärger", "ärger", true)]
    #[case("Alpha", "Alph", false)]
    #[case("Alpha", " Alpha", false)]
    #[case("", "", true)]
    #[case("\u{212A}elvin", "kelvin", false)]
    #[case("\u{0130}", "i\u{0307}", false)]
    #[case("\u{03C2}", "\u{03C3}", true)]
    #[case("stra\u{00DF}e", "STRA\u{00DF}E", true)]
    fn test_names_match(#[case] candidate: &str, #[case] wanted: &str, #[case] expected: bool) {
        assert_eq!(names_match(candidate, wanted), expected);
    }

    #[test]
    fn given_id_only_when_building_selector_then_by_id() {
        let selector = WorldSelector::from_parts(Some("w-1".into()), None).unwrap();
        assert_eq!(selector, WorldSelector::ById("w-1".into()));
    }

    #[test]
    fn given_name_only_when_building_selector_then_by_name() {
        let selector = WorldSelector::from_parts(None, Some("Hub".into())).unwrap();
        assert_eq!(selector, WorldSelector::ByName("Hub".into()));
    }

    #[test]
    fn given_both_or_neither_when_building_selector_then_invalid() {
        assert!(matches!(
            WorldSelector::from_parts(Some("w-1".into()), Some("Hub".into())),
            Err(DomainError::InvalidSelector(_))
        ));
        assert!(matches!(
            WorldSelector::from_parts(None, None),
            Err(DomainError::InvalidSelector(_))
        ));
    }

    #[test]
    fn given_missing_or_null_description_when_deserializing_then_none() {
        let absent: World = serde_json::from_str(r#"{"id":"w-1","name":"Hub"}"#).unwrap();
        let null: World =
            serde_json::from_str(r#"{"id":"w-1","name":"Hub","description":null}"#).unwrap();
        let empty: World =
            serde_json::from_str(r#"{"id":"w-1","name":"Hub","description":""}"#).unwrap();

        assert_eq!(absent.description, None);
        assert_eq!(null.description, None);
        assert_eq!(empty.description, Some(String::new()));
    }

    #[test]
    fn given_verbose_flag_when_mapping_then_output_mode() {
        assert_eq!(OutputMode::from_verbose(true), OutputMode::Verbose);
        assert_eq!(OutputMode::from_verbose(false), OutputMode::Summary);
    }
}
