//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

use crate::application::service::CharacterInput;

fn default_level() -> i64 {
    1
}

/// Body of `POST /characters` and `PUT /characters/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRequest {
    pub name: String,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub subclass: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default = "default_level")]
    pub level: i64,
}

impl From<CharacterRequest> for CharacterInput {
    fn from(req: CharacterRequest) -> Self {
        Self {
            name: req.name,
            race: req.race,
            class: req.class,
            subclass: req.subclass,
            background: req.background,
            level: req.level,
        }
    }
}
