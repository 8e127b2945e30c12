//! Domain Services
//!
//! Pure filtering/projection rules the upstream catalog does not apply
//! itself. Every function takes ownership of a decoded payload and keeps the
//! upstream order of whatever it retains.

use crate::domain::entities::{Class, Race, Spell, Subclass};

/// Base races only; subspecies are dropped, nothing is reordered
pub fn selectable_races(races: Vec<Race>) -> Vec<Race> {
    races.into_iter().filter(Race::is_selectable).collect()
}

/// Top-level classes only (no parent-class reference)
pub fn base_classes(classes: Vec<Class>) -> Vec<Class> {
    classes
        .into_iter()
        .filter(|class| !class.is_subclass())
        .collect()
}

/// Subclasses whose parent key equals `parent_key`, in upstream order
pub fn subclasses_of(classes: Vec<Class>, parent_key: &str) -> Vec<Subclass> {
    classes
        .into_iter()
        .filter_map(|class| class.into_subclass().ok())
        .filter(|subclass| subclass.parent.key == parent_key)
        .collect()
}

/// Spells castable by `class_key`, optionally restricted to one exact level
///
/// `None` applies no level filter at all (cantrips included).
pub fn spells_for_class(spells: Vec<Spell>, class_key: &str, level: Option<u8>) -> Vec<Spell> {
    spells
        .into_iter()
        .filter(|spell| spell.is_castable_by(class_key))
        .filter(|spell| level.is_none_or(|level| spell.level == level))
        .collect()
}
