// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_slug;

pub use error::map_sqlx;
pub use sqlite_article::SqliteArticleRepository;
pub use sqlite_slug::{SlugTableMapping, SqliteSlugRepository};
