// tests/support/mocks/slug_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use slugkeeper::domain::errors::{DomainError, DomainResult};
use slugkeeper::domain::slug::{
    EntityIdentity, EntityType, ScopeFilters, SlugError, SlugRepository,
};

/* -------------------------------- 保存済み行 -------------------------------- */

#[derive(Debug, Clone)]
pub struct StoredRow {
    pub entity_type: EntityType,
    pub id: EntityIdentity,
    pub slug: String,
    pub source: Option<String>,
    pub scope: ScopeFilters,
}

impl StoredRow {
    pub fn new(entity_type: EntityType, id: i64, slug: &str) -> Self {
        Self {
            entity_type,
            id: EntityIdentity::Integer(id),
            slug: slug.to_string(),
            source: None,
            scope: ScopeFilters::new(),
        }
    }

    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn scope(mut self, scope: ScopeFilters) -> Self {
        self.scope = scope;
        self
    }

    fn matches_scope(&self, scope: &ScopeFilters) -> bool {
        scope
            .iter()
            .all(|(field, value)| self.scope.get(field) == Some(value))
    }
}

/* -------------------------------- SlugRepository -------------------------------- */

/// インメモリのスラッグリポジトリ。プローブ順序を記録する。
#[derive(Default)]
pub struct InMemorySlugRepo {
    rows: Mutex<Vec<StoredRow>>,
    scope_fields: HashMap<EntityType, Vec<String>>,
    probes: Mutex<Vec<String>>,
    collide_all: AtomicBool,
    fail_checks: AtomicBool,
    fail_prior_lookup: AtomicBool,
    misconfigured: AtomicBool,
}

impl InMemorySlugRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(self, row: StoredRow) -> Self {
        self.rows.lock().unwrap().push(row);
        self
    }

    pub fn with_scope_fields(mut self, entity_type: EntityType, fields: &[&str]) -> Self {
        self.scope_fields.insert(
            entity_type,
            fields.iter().map(|f| (*f).to_string()).collect(),
        );
        self
    }

    /// Every candidate is reported as taken.
    pub fn collide_all(self) -> Self {
        self.collide_all.store(true, Ordering::SeqCst);
        self
    }

    /// Every existence check fails with a persistence error.
    pub fn failing_checks(self) -> Self {
        self.fail_checks.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_prior_lookup(self) -> Self {
        self.fail_prior_lookup.store(true, Ordering::SeqCst);
        self
    }

    /// Existence checks report a configuration error.
    pub fn misconfigured(self) -> Self {
        self.misconfigured.store(true, Ordering::SeqCst);
        self
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }

    pub fn probe_count(&self) -> usize {
        self.probes.lock().unwrap().len()
    }
}

#[async_trait]
impl SlugRepository for InMemorySlugRepo {
    async fn slug_exists(
        &self,
        entity_type: EntityType,
        candidate: &str,
        exclude: Option<&EntityIdentity>,
        scope: &ScopeFilters,
    ) -> DomainResult<bool> {
        self.probes.lock().unwrap().push(candidate.to_string());

        if self.misconfigured.load(Ordering::SeqCst) {
            return Err(SlugError::MisconfiguredProvider("no mapping".into()).into());
        }
        if self.fail_checks.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("database unavailable".into()));
        }
        if self.collide_all.load(Ordering::SeqCst) {
            return Ok(true);
        }

        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|row| {
            row.entity_type == entity_type
                && row.slug.eq_ignore_ascii_case(candidate)
                && exclude.is_none_or(|id| &row.id != id)
                && row.matches_scope(scope)
        }))
    }

    async fn fetch_prior_source(
        &self,
        entity_type: EntityType,
        identity: &EntityIdentity,
    ) -> DomainResult<Option<String>> {
        if self.fail_prior_lookup.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("database unavailable".into()));
        }

        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|row| row.entity_type == entity_type && &row.id == identity)
            .and_then(|row| row.source.clone()))
    }

    fn declared_scope_fields(&self, entity_type: EntityType) -> Vec<String> {
        self.scope_fields
            .get(&entity_type)
            .cloned()
            .unwrap_or_default()
    }
}
