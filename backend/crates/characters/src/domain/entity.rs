//! Character Entity

use chrono::{DateTime, Utc};
use kernel::id::CharacterId;
use serde::Serialize;

use crate::domain::draft::CharacterDraft;

/// A stored character
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    /// Session subject that owns this record
    pub user_id: String,
    pub name: String,
    pub race: Option<String>,
    pub class: Option<String>,
    pub subclass: Option<String>,
    pub background: Option<String>,
    pub level: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// New record for `user_id` from a validated draft
    pub fn new(user_id: &str, draft: &CharacterDraft) -> Self {
        let now = Utc::now();

        Self {
            id: CharacterId::new(),
            user_id: user_id.to_string(),
            name: draft.name().to_string(),
            race: draft.race().map(str::to_string),
            class: draft.class().map(str::to_string),
            subclass: draft.subclass().map(str::to_string),
            background: draft.background().map(str::to_string),
            level: draft.level(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields and bump `updated_at`
    pub fn apply(&mut self, draft: &CharacterDraft) {
        self.name = draft.name().to_string();
        self.race = draft.race().map(str::to_string);
        self.class = draft.class().map(str::to_string);
        self.subclass = draft.subclass().map(str::to_string);
        self.background = draft.background().map(str::to_string);
        self.level = draft.level();
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
