//! Character Draft
//!
//! The builder-form shape of a character, validated. A draft carries no id
//! or owner; those are assigned by the store.

use crate::error::{CharacterError, CharacterResult};

pub const NAME_MAX_CHARS: usize = 100;
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 20;

/// Validated character fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDraft {
    name: String,
    race: Option<String>,
    class: Option<String>,
    subclass: Option<String>,
    background: Option<String>,
    level: u8,
}

impl CharacterDraft {
    /// Validate raw form input
    ///
    /// Optional fields are trimmed; blank ones become `None`.
    pub fn parse(
        name: &str,
        race: Option<&str>,
        class: Option<&str>,
        subclass: Option<&str>,
        background: Option<&str>,
        level: i64,
    ) -> CharacterResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CharacterError::Validation("name is required".into()));
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(CharacterError::Validation(format!(
                "name must be at most {NAME_MAX_CHARS} characters"
            )));
        }

        let level = u8::try_from(level)
            .ok()
            .filter(|l| (MIN_LEVEL..=MAX_LEVEL).contains(l))
            .ok_or_else(|| {
                CharacterError::Validation(format!(
                    "level must be between {MIN_LEVEL} and {MAX_LEVEL}"
                ))
            })?;

        let class = non_blank(class);
        let subclass = non_blank(subclass);
        if subclass.is_some() && class.is_none() {
            return Err(CharacterError::Validation(
                "subclass requires a class".into(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            race: non_blank(race),
            class,
            subclass,
            background: non_blank(background),
            level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Option<&str> {
        self.race.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn subclass(&self) -> Option<&str> {
        self.subclass.as_deref()
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, class: Option<&str>, subclass: Option<&str>, level: i64) -> CharacterResult<CharacterDraft> {
        CharacterDraft::parse(name, Some("srd_elf"), class, subclass, Some(""), level)
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let draft = CharacterDraft::parse("  Elara  ", Some(" "), Some(""), None, Some("\t"), 1).unwrap();

        assert_eq!(draft.name(), "Elara");
        assert_eq!(draft.race(), None);
        assert_eq!(draft.class(), None);
        assert_eq!(draft.background(), None);
    }

    #[test]
    fn test_name_bounds() {
        assert!(draft("", None, None, 1).is_err());
        assert!(draft("   ", None, None, 1).is_err());
        assert!(draft(&"a".repeat(100), None, None, 1).is_ok());
        assert!(draft(&"a".repeat(101), None, None, 1).is_err());
        // counted in characters, not bytes
        assert!(draft(&"é".repeat(100), None, None, 1).is_ok());
    }

    #[test]
    fn test_level_bounds() {
        for level in [0, 21, -1, 256] {
            assert!(
                matches!(draft("Elara", None, None, level), Err(CharacterError::Validation(_))),
                "{level}"
            );
        }
        assert_eq!(draft("Elara", None, None, 1).unwrap().level(), 1);
        assert_eq!(draft("Elara", None, None, 20).unwrap().level(), 20);
    }

    #[test]
    fn test_subclass_requires_class() {
        assert!(draft("Elara", None, Some("evocation"), 3).is_err());
        assert!(draft("Elara", Some(" "), Some("evocation"), 3).is_err());

        let draft = draft("Elara", Some("wizard"), Some("evocation"), 3).unwrap();
        assert_eq!(draft.subclass(), Some("evocation"));
    }
}
