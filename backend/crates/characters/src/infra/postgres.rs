//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::CharacterId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::draft::CharacterDraft;
use crate::domain::entity::Character;
use crate::domain::repository::CharacterRepository;
use crate::error::{CharacterError, CharacterResult};

/// PostgreSQL-backed character repository
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CharacterRepository for PgCharacterRepository {
    async fn list_for_user(&self, user_id: &str) -> CharacterResult<Vec<Character>> {
        let rows = sqlx::query_as::<_, CharacterRow>(
            r#"
            SELECT
                id,
                user_id,
                name,
                race,
                class,
                subclass,
                background,
                level,
                created_at,
                updated_at
            FROM characters
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CharacterRow::into_character).collect()
    }

    async fn find(&self, user_id: &str, id: CharacterId) -> CharacterResult<Option<Character>> {
        let row = sqlx::query_as::<_, CharacterRow>(
            r#"
            SELECT
                id,
                user_id,
                name,
                race,
                class,
                subclass,
                background,
                level,
                created_at,
                updated_at
            FROM characters
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(CharacterRow::into_character).transpose()
    }

    async fn create(&self, user_id: &str, draft: &CharacterDraft) -> CharacterResult<Character> {
        let character = Character::new(user_id, draft);

        sqlx::query(
            r#"
            INSERT INTO characters (
                id,
                user_id,
                name,
                race,
                class,
                subclass,
                background,
                level,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(character.id.as_uuid())
        .bind(&character.user_id)
        .bind(&character.name)
        .bind(&character.race)
        .bind(&character.class)
        .bind(&character.subclass)
        .bind(&character.background)
        .bind(i16::from(character.level))
        .bind(character.created_at)
        .bind(character.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(character)
    }

    async fn update(
        &self,
        user_id: &str,
        id: CharacterId,
        draft: &CharacterDraft,
    ) -> CharacterResult<Option<Character>> {
        let row = sqlx::query_as::<_, CharacterRow>(
            r#"
            UPDATE characters SET
                name = $3,
                race = $4,
                class = $5,
                subclass = $6,
                background = $7,
                level = $8,
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING
                id,
                user_id,
                name,
                race,
                class,
                subclass,
                background,
                level,
                created_at,
                updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id)
        .bind(draft.name())
        .bind(draft.race())
        .bind(draft.class())
        .bind(draft.subclass())
        .bind(draft.background())
        .bind(i16::from(draft.level()))
        .fetch_optional(&self.pool)
        .await?;

        row.map(CharacterRow::into_character).transpose()
    }

    async fn delete(&self, user_id: &str, id: CharacterId) -> CharacterResult<bool> {
        let deleted = sqlx::query("DELETE FROM characters WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: Uuid,
    user_id: String,
    name: String,
    race: Option<String>,
    class: Option<String>,
    subclass: Option<String>,
    background: Option<String>,
    level: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CharacterRow {
    fn into_character(self) -> CharacterResult<Character> {
        let level = u8::try_from(self.level)
            .map_err(|_| CharacterError::Internal(format!("Invalid level: {}", self.level)))?;

        Ok(Character {
            id: CharacterId::from_uuid(self.id),
            user_id: self.user_id,
            name: self.name,
            race: self.race,
            class: self.class,
            subclass: self.subclass,
            background: self.background,
            level,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
