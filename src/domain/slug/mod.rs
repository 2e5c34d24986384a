pub mod entity;
pub mod errors;
pub mod repository;
pub mod scope;
pub mod services;
pub mod value_objects;

pub use entity::{ScopeAccessor, Sluggable};
pub use errors::SlugError;
pub use repository::SlugRepository;
pub use scope::extract_scope_filters;
pub use services::{CheckFailurePolicy, DEFAULT_MAX_ATTEMPTS, SlugResolver};
pub use value_objects::{EntityIdentity, EntityType, ScopeFilters, ScopeValue, Slug};
