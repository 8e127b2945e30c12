//! Reference Entities
//!
//! Normalized shapes of the Open5e collections. These are never persisted;
//! they live for the duration of the request that fetched them.

use serde::Serialize;

/// Reference to another catalog record (`{ key, name }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub key: String,
    pub name: String,
}

/// Named block of rules text (racial trait, background benefit)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedText {
    pub name: String,
    pub desc: String,
}

/// Species record
///
/// Subspecies ("High Elf") share the collection with base races ("Elf");
/// only base races are selectable on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub key: String,
    pub name: String,
    pub desc: String,
    pub is_subspecies: bool,
    pub subspecies_of: Option<ResourceRef>,
    pub traits: Vec<NamedText>,
}

impl Race {
    pub fn is_selectable(&self) -> bool {
        !self.is_subspecies
    }
}

/// Class record
///
/// A record with `subclass_of` set is a subclass of that parent and is not
/// a top-level class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub key: String,
    pub name: String,
    pub desc: String,
    /// Lower-case die notation, e.g. `d8`
    pub hit_die: String,
    pub saving_throws: Vec<String>,
    pub subclass_of: Option<ResourceRef>,
}

impl Class {
    pub fn is_subclass(&self) -> bool {
        self.subclass_of.is_some()
    }

    /// Project into a [`Subclass`]; hands the record back unchanged when it
    /// is a top-level class.
    pub fn into_subclass(self) -> Result<Subclass, Class> {
        match self.subclass_of {
            Some(parent) => Ok(Subclass {
                key: self.key,
                name: self.name,
                desc: self.desc,
                parent,
            }),
            None => Err(self),
        }
    }
}

/// Subclass view of a [`Class`] record with a parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subclass {
    pub key: String,
    pub name: String,
    pub desc: String,
    pub parent: ResourceRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub key: String,
    pub name: String,
    pub desc: String,
    pub benefits: Vec<NamedText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub key: String,
    pub name: String,
    pub desc: String,
    /// 0 = cantrip
    pub level: u8,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub concentration: bool,
    pub classes: Vec<ResourceRef>,
}

impl Spell {
    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }

    pub fn is_castable_by(&self, class_key: &str) -> bool {
        self.classes.iter().any(|class| class.key == class_key)
    }
}
