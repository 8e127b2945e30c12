//! Reference Data Client
//!
//! Fetches Open5e collections and applies the filtering rules the upstream
//! does not provide (base races, top-level classes, subclasses by parent,
//! spells by class and level). One upstream request per call; every failure
//! is returned to the caller untouched.

use std::sync::Arc;

use crate::application::config::CatalogConfig;
use crate::domain::entities::{Background, Class, Race, Spell, Subclass};
use crate::domain::services;
use crate::domain::source::CatalogSource;
use crate::domain::value_objects::CatalogKey;
use crate::error::CatalogResult;
use crate::infra::open5e::{self, BackgroundRecord, ClassRecord, RaceRecord, SpellRecord, requests};

pub struct ReferenceDataClient<S>
where
    S: CatalogSource + Send + Sync + 'static,
{
    source: Arc<S>,
    config: Arc<CatalogConfig>,
}

impl<S> Clone for ReferenceDataClient<S>
where
    S: CatalogSource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S> ReferenceDataClient<S>
where
    S: CatalogSource + Send + Sync + 'static,
{
    pub fn new(source: Arc<S>, config: Arc<CatalogConfig>) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Selectable races (subspecies removed, upstream order kept)
    pub async fn list_races(&self) -> CatalogResult<Vec<Race>> {
        let payload = self
            .source
            .fetch(&requests::races(self.config.list_limit))
            .await?;
        let races = open5e::decode_list::<RaceRecord, Race>(payload)?;
        let total = races.len();

        let races = services::selectable_races(races);
        tracing::debug!(total, selectable = races.len(), "Listed races");

        Ok(races)
    }

    pub async fn get_race(&self, key: &str) -> CatalogResult<Race> {
        let key = CatalogKey::parse(key)?;
        let payload = self
            .source
            .fetch(&requests::race(&key))
            .await
            .map_err(|e| e.for_lookup("Race", key.as_str()))?;

        open5e::decode_one::<RaceRecord, Race>(payload)
    }

    /// Top-level classes (records without a parent-class reference)
    pub async fn list_classes(&self) -> CatalogResult<Vec<Class>> {
        let classes = self.fetch_all_classes().await?;
        let total = classes.len();

        let classes = services::base_classes(classes);
        tracing::debug!(total, base = classes.len(), "Listed classes");

        Ok(classes)
    }

    pub async fn get_class(&self, key: &str) -> CatalogResult<Class> {
        let key = CatalogKey::parse(key)?;
        let payload = self
            .source
            .fetch(&requests::class(&key))
            .await
            .map_err(|e| e.for_lookup("Class", key.as_str()))?;

        open5e::decode_one::<ClassRecord, Class>(payload)
    }

    /// Subclasses of `parent_key`, filtered client-side from the full class
    /// collection since Open5e has no subclass-by-parent endpoint
    ///
    /// The key never reaches an upstream path, so any string is accepted and
    /// one that matches no parent yields an empty list.
    pub async fn list_subclasses_by_parent(&self, parent_key: &str) -> CatalogResult<Vec<Subclass>> {
        let classes = self.fetch_all_classes().await?;

        let subclasses = services::subclasses_of(classes, parent_key);
        tracing::debug!(parent = parent_key, count = subclasses.len(), "Listed subclasses");

        Ok(subclasses)
    }

    pub async fn list_backgrounds(&self) -> CatalogResult<Vec<Background>> {
        let payload = self
            .source
            .fetch(&requests::backgrounds(self.config.list_limit))
            .await?;
        let backgrounds = open5e::decode_list::<BackgroundRecord, Background>(payload)?;
        tracing::debug!(count = backgrounds.len(), "Listed backgrounds");

        Ok(backgrounds)
    }

    pub async fn get_background(&self, key: &str) -> CatalogResult<Background> {
        let key = CatalogKey::parse(key)?;
        let payload = self
            .source
            .fetch(&requests::background(&key))
            .await
            .map_err(|e| e.for_lookup("Background", key.as_str()))?;

        open5e::decode_one::<BackgroundRecord, Background>(payload)
    }

    /// Spells castable by `class_key`; `level` restricts to one exact level
    ///
    /// The filter is sent upstream and re-applied locally.
    pub async fn list_spells_by_class(
        &self,
        class_key: &str,
        level: Option<u8>,
    ) -> CatalogResult<Vec<Spell>> {
        let class_key = CatalogKey::parse(class_key)?;
        let payload = self
            .source
            .fetch(&requests::spells_for_class(
                self.config.spell_limit,
                &class_key,
                level,
            ))
            .await?;
        let spells = open5e::decode_list::<SpellRecord, Spell>(payload)?;

        let spells = services::spells_for_class(spells, class_key.as_str(), level);
        tracing::debug!(class = %class_key, ?level, count = spells.len(), "Listed spells");

        Ok(spells)
    }

    async fn fetch_all_classes(&self) -> CatalogResult<Vec<Class>> {
        let payload = self
            .source
            .fetch(&requests::classes(self.config.list_limit))
            .await?;
        open5e::decode_list::<ClassRecord, Class>(payload)
    }
}
