//! Open5e v2 Wire Format
//!
//! Request builders for each collection and the decoding of raw payloads into
//! domain entities. Optional upstream fields default (empty text, empty lists,
//! `false`) so a sparse record never fails the whole listing.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Background, Class, NamedText, Race, ResourceRef, Spell};
use crate::domain::source::UpstreamRequest;
use crate::domain::value_objects::CatalogKey;
use crate::error::CatalogResult;

/// Default Open5e base URL (v2 API).
pub const DEFAULT_BASE_URL: &str = "https://api.open5e.com/v2";

// ============================================================================
// Requests
// ============================================================================

pub mod requests {
    use super::*;

    pub fn races(limit: u32) -> UpstreamRequest {
        UpstreamRequest::new("/species/").with_query("limit", limit)
    }

    pub fn race(key: &CatalogKey) -> UpstreamRequest {
        UpstreamRequest::new(format!("/species/{key}/"))
    }

    pub fn classes(limit: u32) -> UpstreamRequest {
        UpstreamRequest::new("/classes/").with_query("limit", limit)
    }

    pub fn class(key: &CatalogKey) -> UpstreamRequest {
        UpstreamRequest::new(format!("/classes/{key}/"))
    }

    pub fn backgrounds(limit: u32) -> UpstreamRequest {
        UpstreamRequest::new("/backgrounds/").with_query("limit", limit)
    }

    pub fn background(key: &CatalogKey) -> UpstreamRequest {
        UpstreamRequest::new(format!("/backgrounds/{key}/"))
    }

    pub fn spells_for_class(limit: u32, class_key: &CatalogKey, level: Option<u8>) -> UpstreamRequest {
        let request = UpstreamRequest::new("/spells/")
            .with_query("limit", limit)
            .with_query("classes__key", class_key);

        match level {
            Some(level) => request.with_query("level", level),
            None => request,
        }
    }
}

// ============================================================================
// Decoding
// ============================================================================

#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    results: Vec<T>,
}

/// Decode a `{ "results": [...] }` envelope
pub fn decode_list<R, T>(payload: serde_json::Value) -> CatalogResult<Vec<T>>
where
    R: DeserializeOwned,
    T: From<R>,
{
    let envelope: ListEnvelope<R> = serde_json::from_value(payload)?;
    Ok(envelope.results.into_iter().map(T::from).collect())
}

/// Decode a single-record body
pub fn decode_one<R, T>(payload: serde_json::Value) -> CatalogResult<T>
where
    R: DeserializeOwned,
    T: From<R>,
{
    let record: R = serde_json::from_value(payload)?;
    Ok(T::from(record))
}

/// `{ "key": ..., "name": ... }` or a bare key string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RefRecord {
    Object { key: String, name: Option<String> },
    Key(String),
}

impl From<RefRecord> for ResourceRef {
    fn from(record: RefRecord) -> Self {
        match record {
            RefRecord::Object { key, name } => {
                let name = name.unwrap_or_else(|| key.clone());
                ResourceRef { key, name }
            }
            RefRecord::Key(key) => ResourceRef {
                name: key.clone(),
                key,
            },
        }
    }
}

/// `{ "name": ... }` or a bare string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Label {
    Named { name: String },
    Plain(String),
}

impl Label {
    fn into_string(self) -> String {
        match self {
            Label::Named { name } | Label::Plain(name) => name,
        }
    }
}

/// `"D8"` (v2) or `8` (v1)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HitDie {
    Notation(String),
    Faces(u32),
}

impl HitDie {
    fn normalize(self) -> String {
        match self {
            HitDie::Notation(notation) => notation.trim().to_ascii_lowercase(),
            HitDie::Faces(faces) => format!("d{faces}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NamedRecord {
    name: String,
    #[serde(default)]
    desc: Option<String>,
}

impl From<NamedRecord> for NamedText {
    fn from(record: NamedRecord) -> Self {
        NamedText {
            name: record.name,
            desc: record.desc.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RaceRecord {
    key: String,
    name: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    is_subspecies: bool,
    #[serde(default)]
    subspecies_of: Option<RefRecord>,
    #[serde(default)]
    traits: Vec<NamedRecord>,
}

impl From<RaceRecord> for Race {
    fn from(record: RaceRecord) -> Self {
        Race {
            key: record.key,
            name: record.name,
            desc: record.desc.unwrap_or_default(),
            is_subspecies: record.is_subspecies,
            subspecies_of: record.subspecies_of.map(ResourceRef::from),
            traits: record.traits.into_iter().map(NamedText::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ClassRecord {
    key: String,
    name: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default, alias = "hit_die")]
    hit_dice: Option<HitDie>,
    #[serde(default)]
    saving_throws: Vec<Label>,
    #[serde(default)]
    subclass_of: Option<RefRecord>,
}

impl From<ClassRecord> for Class {
    fn from(record: ClassRecord) -> Self {
        Class {
            key: record.key,
            name: record.name,
            desc: record.desc.unwrap_or_default(),
            hit_die: record.hit_dice.map(HitDie::normalize).unwrap_or_default(),
            saving_throws: record
                .saving_throws
                .into_iter()
                .map(Label::into_string)
                .collect(),
            subclass_of: record.subclass_of.map(ResourceRef::from),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BackgroundRecord {
    key: String,
    name: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    benefits: Vec<NamedRecord>,
}

impl From<BackgroundRecord> for Background {
    fn from(record: BackgroundRecord) -> Self {
        Background {
            key: record.key,
            name: record.name,
            desc: record.desc.unwrap_or_default(),
            benefits: record.benefits.into_iter().map(NamedText::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SpellRecord {
    key: String,
    name: String,
    #[serde(default)]
    desc: Option<String>,
    level: u8,
    #[serde(default)]
    school: Option<Label>,
    #[serde(default)]
    casting_time: Option<String>,
    #[serde(default)]
    range_text: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    concentration: bool,
    #[serde(default)]
    classes: Vec<RefRecord>,
}

impl From<SpellRecord> for Spell {
    fn from(record: SpellRecord) -> Self {
        Spell {
            key: record.key,
            name: record.name,
            desc: record.desc.unwrap_or_default(),
            level: record.level,
            school: record.school.map(Label::into_string).unwrap_or_default(),
            casting_time: record.casting_time.unwrap_or_default(),
            range: record.range_text.unwrap_or_default(),
            duration: record.duration.unwrap_or_default(),
            concentration: record.concentration,
            classes: record.classes.into_iter().map(ResourceRef::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_paths() {
        let wizard = CatalogKey::parse("srd_wizard").unwrap();

        assert_eq!(requests::races(100).to_string(), "/species/?limit=100");
        assert_eq!(requests::class(&wizard).to_string(), "/classes/srd_wizard/");
        assert_eq!(
            requests::spells_for_class(200, &wizard, None).to_string(),
            "/spells/?limit=200&classes__key=srd_wizard"
        );
        assert_eq!(
            requests::spells_for_class(200, &wizard, Some(0)).to_string(),
            "/spells/?limit=200&classes__key=srd_wizard&level=0"
        );
    }

    #[test]
    fn test_decode_class_normalizes_hit_die_and_saves() {
        let payload = json!({
            "key": "srd_wizard",
            "name": "Wizard",
            "desc": "Scholarly magic-user",
            "hit_dice": "D6",
            "saving_throws": [{ "name": "Intelligence", "url": "" }, { "name": "Wisdom" }],
            "subclass_of": null
        });

        let class: Class = decode_one::<ClassRecord, Class>(payload).unwrap();
        assert_eq!(class.hit_die, "d6");
        assert_eq!(class.saving_throws, vec!["Intelligence", "Wisdom"]);
        assert!(!class.is_subclass());
    }

    #[test]
    fn test_decode_numeric_hit_die() {
        let payload = json!({ "key": "k", "name": "Fighter", "hit_die": 10 });
        let class: Class = decode_one::<ClassRecord, Class>(payload).unwrap();
        assert_eq!(class.hit_die, "d10");
    }

    #[test]
    fn test_decode_sparse_spell() {
        let payload = json!({
            "results": [{
                "key": "srd_fire-bolt",
                "name": "Fire Bolt",
                "level": 0,
                "school": { "name": "Evocation", "key": "evocation" },
                "classes": [{ "key": "srd_wizard", "name": "Wizard" }, "srd_sorcerer"]
            }]
        });

        let spells: Vec<Spell> = decode_list::<SpellRecord, Spell>(payload).unwrap();
        assert_eq!(spells.len(), 1);
        assert!(spells[0].is_cantrip());
        assert_eq!(spells[0].school, "Evocation");
        assert_eq!(spells[0].desc, "");
        assert!(spells[0].is_castable_by("srd_sorcerer"));
        assert_eq!(spells[0].classes[1].name, "srd_sorcerer");
    }

    #[test]
    fn test_missing_envelope_is_decode_error() {
        let result = decode_list::<RaceRecord, Race>(json!({ "count": 0 }));
        assert!(matches!(result, Err(crate::error::CatalogError::Decode(_))));
    }
}
