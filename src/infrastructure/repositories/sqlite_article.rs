use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, Locale, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::infrastructure::repositories::SlugTableMapping;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, slug, locale, body, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// How slugs of the `articles` table are looked up: unique per locale.
    pub fn slug_mapping() -> DomainResult<SlugTableMapping> {
        SlugTableMapping::new("articles", "id", "slug", "title")?.with_scope_field("locale", "locale")
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    locale: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            locale: Locale::new(row.locale)?,
            body: ArticleBody::new(row.body)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            locale,
            body,
            created_at,
            updated_at,
        } = article;

        let slug = slug.ok_or_else(|| {
            DomainError::Validation("article cannot be stored without a slug".into())
        })?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, locale, body, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(locale.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            locale,
            body,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = COALESCE(?, title), slug = COALESCE(?, slug), locale = COALESCE(?, locale), body = COALESCE(?, body), updated_at = ? WHERE id = ? RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_ref().map(ArticleTitle::as_str))
        .bind(slug.as_ref().map(Slug::as_str))
        .bind(locale.as_ref().map(Locale::as_str))
        .bind(body.as_ref().map(ArticleBody::as_str))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug, locale: &Locale) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ? COLLATE NOCASE AND locale = ?"
        ))
        .bind(slug.as_str())
        .bind(locale.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
