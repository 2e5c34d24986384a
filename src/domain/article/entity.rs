// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle, Locale};
use crate::domain::slug::{EntityIdentity, EntityType, ScopeAccessor, ScopeValue, Slug, Sluggable};
use chrono::{DateTime, Utc};

pub const ARTICLE_ENTITY: EntityType = EntityType::new("article");

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: Slug,
    pub locale: Locale,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }

    pub fn set_locale(&mut self, locale: Locale, now: DateTime<Utc>) {
        self.locale = locale;
        self.updated_at = now;
    }
}

fn article_locale(article: &Article) -> Option<ScopeValue> {
    Some(ScopeValue::from(article.locale.as_str()))
}

impl Sluggable for Article {
    fn entity_type() -> EntityType {
        ARTICLE_ENTITY
    }

    fn identity(&self) -> Option<EntityIdentity> {
        Some(EntityIdentity::Integer(self.id.into()))
    }

    fn slug(&self) -> Option<&Slug> {
        Some(&self.slug)
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }

    fn slug_source(&self) -> Option<&str> {
        Some(self.title.as_str())
    }

    fn scope_accessors() -> &'static [ScopeAccessor<Self>] {
        const ACCESSORS: &[ScopeAccessor<Article>] = &[ScopeAccessor::new("locale", article_locale)];
        ACCESSORS
    }
}

/// An article that has not been stored yet. Its slug is filled in by slug
/// assignment right before insertion.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: Option<Slug>,
    pub locale: Locale,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn new_article_locale(article: &NewArticle) -> Option<ScopeValue> {
    Some(ScopeValue::from(article.locale.as_str()))
}

impl Sluggable for NewArticle {
    fn entity_type() -> EntityType {
        ARTICLE_ENTITY
    }

    fn identity(&self) -> Option<EntityIdentity> {
        None
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }

    fn slug_source(&self) -> Option<&str> {
        Some(self.title.as_str())
    }

    fn scope_accessors() -> &'static [ScopeAccessor<Self>] {
        const ACCESSORS: &[ScopeAccessor<NewArticle>] =
            &[ScopeAccessor::new("locale", new_article_locale)];
        ACCESSORS
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<Slug>,
    pub locale: Option<Locale>,
    pub body: Option<ArticleBody>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            locale: None,
            body: None,
            updated_at,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }
}
