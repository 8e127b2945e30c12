//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every operation is scoped by the owning user.

use kernel::id::CharacterId;

use crate::domain::draft::CharacterDraft;
use crate::domain::entity::Character;
use crate::error::CharacterResult;

/// Character repository trait
#[trait_variant::make(CharacterRepository: Send)]
pub trait LocalCharacterRepository {
    /// All characters of a user, newest first
    async fn list_for_user(&self, user_id: &str) -> CharacterResult<Vec<Character>>;

    async fn find(&self, user_id: &str, id: CharacterId) -> CharacterResult<Option<Character>>;

    async fn create(&self, user_id: &str, draft: &CharacterDraft) -> CharacterResult<Character>;

    /// `None` when no such character belongs to the user
    async fn update(
        &self,
        user_id: &str,
        id: CharacterId,
        draft: &CharacterDraft,
    ) -> CharacterResult<Option<Character>>;

    /// `false` when no such character belongs to the user
    async fn delete(&self, user_id: &str, id: CharacterId) -> CharacterResult<bool>;
}
