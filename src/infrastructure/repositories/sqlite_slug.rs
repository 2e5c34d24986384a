// src/infrastructure/repositories/sqlite_slug.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    EntityIdentity, EntityType, ScopeFilters, ScopeValue, SlugError, SlugRepository,
};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;

fn validate_identifier(kind: &str, value: &str) -> DomainResult<String> {
    let valid = !value.is_empty()
        && value
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(value.to_string())
    } else {
        Err(DomainError::Validation(format!(
            "invalid {kind} identifier `{value}`"
        )))
    }
}

/// Where an entity type's slugs live: the table, its identity, slug and
/// source columns, and the columns backing each companion scope field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugTableMapping {
    table: String,
    id_column: String,
    slug_column: String,
    source_column: String,
    scope_columns: Vec<(String, String)>,
}

impl SlugTableMapping {
    pub fn new(
        table: &str,
        id_column: &str,
        slug_column: &str,
        source_column: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            table: validate_identifier("table", table)?,
            id_column: validate_identifier("column", id_column)?,
            slug_column: validate_identifier("column", slug_column)?,
            source_column: validate_identifier("column", source_column)?,
            scope_columns: Vec::new(),
        })
    }

    /// Declare a companion field narrowing uniqueness. Declaration order is
    /// the order scope filters are extracted and applied in.
    pub fn with_scope_field(mut self, field: &str, column: &str) -> DomainResult<Self> {
        let column = validate_identifier("column", column)?;
        self.scope_columns.push((field.to_string(), column));
        Ok(self)
    }

    pub fn scope_fields(&self) -> Vec<String> {
        self.scope_columns
            .iter()
            .map(|(field, _)| field.clone())
            .collect()
    }

    fn scope_column(&self, field: &str) -> Option<&str> {
        self.scope_columns
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, column)| column.as_str())
    }
}

fn push_identity(builder: &mut QueryBuilder<'_, Sqlite>, identity: &EntityIdentity) {
    match identity {
        EntityIdentity::Integer(value) => builder.push_bind(*value),
        EntityIdentity::Text(value) => builder.push_bind(value.clone()),
        EntityIdentity::Uuid(value) => builder.push_bind(value.to_string()),
    };
}

fn push_scope_value(builder: &mut QueryBuilder<'_, Sqlite>, value: &ScopeValue) {
    match value {
        ScopeValue::Text(value) => builder.push_bind(value.clone()),
        ScopeValue::Integer(value) => builder.push_bind(*value),
        ScopeValue::Bool(value) => builder.push_bind(*value),
    };
}

#[derive(Clone)]
pub struct SqliteSlugRepository {
    pool: Arc<SqlitePool>,
    mappings: HashMap<EntityType, SlugTableMapping>,
}

impl SqliteSlugRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            mappings: HashMap::new(),
        }
    }

    #[must_use]
    pub fn register(mut self, entity_type: EntityType, mapping: SlugTableMapping) -> Self {
        self.mappings.insert(entity_type, mapping);
        self
    }

    fn mapping(&self, entity_type: EntityType) -> DomainResult<&SlugTableMapping> {
        self.mappings.get(&entity_type).ok_or_else(|| {
            SlugError::MisconfiguredProvider(format!(
                "no slug table mapping registered for `{entity_type}`"
            ))
            .into()
        })
    }
}

#[async_trait]
impl SlugRepository for SqliteSlugRepository {
    async fn slug_exists(
        &self,
        entity_type: EntityType,
        candidate: &str,
        exclude: Option<&EntityIdentity>,
        scope: &ScopeFilters,
    ) -> DomainResult<bool> {
        let mapping = self.mapping(entity_type)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM ");
        builder.push(&mapping.table);
        builder.push(" WHERE ");
        builder.push(&mapping.slug_column);
        builder.push(" = ");
        builder.push_bind(candidate.to_string());
        builder.push(" COLLATE NOCASE");

        if let Some(identity) = exclude {
            builder.push(" AND ");
            builder.push(&mapping.id_column);
            builder.push(" <> ");
            push_identity(&mut builder, identity);
        }

        for (field, value) in scope.iter() {
            let Some(column) = mapping.scope_column(field) else {
                tracing::warn!(
                    entity_type = %entity_type,
                    field,
                    "scope field has no mapped column; ignoring"
                );
                continue;
            };
            builder.push(" AND ");
            builder.push(column);
            builder.push(" = ");
            push_scope_value(&mut builder, value);
        }

        builder.push(")");

        let exists: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(exists != 0)
    }

    async fn fetch_prior_source(
        &self,
        entity_type: EntityType,
        identity: &EntityIdentity,
    ) -> DomainResult<Option<String>> {
        let mapping = self.mapping(entity_type)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(&mapping.source_column);
        builder.push(" FROM ");
        builder.push(&mapping.table);
        builder.push(" WHERE ");
        builder.push(&mapping.id_column);
        builder.push(" = ");
        push_identity(&mut builder, identity);

        let source: Option<Option<String>> = builder
            .build_query_scalar()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(source.flatten())
    }

    fn declared_scope_fields(&self, entity_type: EntityType) -> Vec<String> {
        self.mappings
            .get(&entity_type)
            .map(SlugTableMapping::scope_fields)
            .unwrap_or_default()
    }
}
