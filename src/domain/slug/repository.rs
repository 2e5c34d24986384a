use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{EntityIdentity, EntityType, ScopeFilters};
use async_trait::async_trait;

/// Persistence-side collaborator consulted while resolving slugs.
#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// Whether another row of `entity_type` already uses `candidate`,
    /// compared case-insensitively, restricted to rows matching every scope
    /// filter and ignoring the row identified by `exclude`.
    async fn slug_exists(
        &self,
        entity_type: EntityType,
        candidate: &str,
        exclude: Option<&EntityIdentity>,
        scope: &ScopeFilters,
    ) -> DomainResult<bool>;

    /// Last persisted source text for the entity, if the row exists.
    async fn fetch_prior_source(
        &self,
        entity_type: EntityType,
        identity: &EntityIdentity,
    ) -> DomainResult<Option<String>>;

    /// Companion fields that make up the composite uniqueness scope.
    fn declared_scope_fields(&self, entity_type: EntityType) -> Vec<String>;
}
