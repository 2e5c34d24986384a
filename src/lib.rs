//! Unique, scope-aware slug assignment for database-backed entities.
//!
//! Entities implement [`domain::slug::Sluggable`]; the
//! [`application::services::SlugAssignmentService`] normalizes their source
//! text, resolves a collision-free slug through a
//! [`domain::slug::SlugRepository`] and writes it back before the entity is
//! persisted.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
