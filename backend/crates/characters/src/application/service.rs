//! Character Use Cases
//!
//! Validates raw form input and runs it against the repository on behalf of
//! one user. Rows owned by someone else are indistinguishable from missing
//! ones.

use std::sync::Arc;

use kernel::id::CharacterId;

use crate::domain::draft::CharacterDraft;
use crate::domain::entity::Character;
use crate::domain::repository::CharacterRepository;
use crate::error::{CharacterError, CharacterResult};

/// Unvalidated builder-form input
#[derive(Debug, Clone, Default)]
pub struct CharacterInput {
    pub name: String,
    pub race: Option<String>,
    pub class: Option<String>,
    pub subclass: Option<String>,
    pub background: Option<String>,
    pub level: i64,
}

impl CharacterInput {
    pub fn validate(&self) -> CharacterResult<CharacterDraft> {
        CharacterDraft::parse(
            &self.name,
            self.race.as_deref(),
            self.class.as_deref(),
            self.subclass.as_deref(),
            self.background.as_deref(),
            self.level,
        )
    }
}

pub struct CharacterService<R>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> Clone for CharacterService<R>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R> CharacterService<R>
where
    R: CharacterRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user_id: &str) -> CharacterResult<Vec<Character>> {
        self.repo.list_for_user(user_id).await
    }

    pub async fn get(&self, user_id: &str, id: CharacterId) -> CharacterResult<Character> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(CharacterError::NotFound(id))
    }

    pub async fn create(&self, user_id: &str, input: &CharacterInput) -> CharacterResult<Character> {
        let draft = input.validate()?;
        let character = self.repo.create(user_id, &draft).await?;

        tracing::info!(
            user_id = %user_id,
            character_id = %character.id,
            level = character.level,
            "Character created"
        );

        Ok(character)
    }

    pub async fn update(
        &self,
        user_id: &str,
        id: CharacterId,
        input: &CharacterInput,
    ) -> CharacterResult<Character> {
        let draft = input.validate()?;
        let character = self
            .repo
            .update(user_id, id, &draft)
            .await?
            .ok_or(CharacterError::NotFound(id))?;

        tracing::info!(user_id = %user_id, character_id = %id, "Character updated");

        Ok(character)
    }

    pub async fn delete(&self, user_id: &str, id: CharacterId) -> CharacterResult<()> {
        if !self.repo.delete(user_id, id).await? {
            return Err(CharacterError::NotFound(id));
        }

        tracing::info!(user_id = %user_id, character_id = %id, "Character deleted");

        Ok(())
    }
}
