use crate::domain::slug::value_objects::{EntityIdentity, EntityType, ScopeValue, Slug};

/// Reads the current value of one companion-scope field from an entity.
pub struct ScopeAccessor<T> {
    pub field: &'static str,
    pub read: fn(&T) -> Option<ScopeValue>,
}

impl<T> ScopeAccessor<T> {
    pub const fn new(field: &'static str, read: fn(&T) -> Option<ScopeValue>) -> Self {
        Self { field, read }
    }
}

/// Contract every entity with an automatically assigned slug implements.
///
/// The source text feeds the normalizer; the identity is absent until the
/// entity has been persisted. Companion-scope accessors are registered once
/// per type and looked up by the field names the repository declares.
pub trait Sluggable: Sized + 'static {
    fn entity_type() -> EntityType;

    fn identity(&self) -> Option<EntityIdentity>;

    fn slug(&self) -> Option<&Slug>;

    fn set_slug(&mut self, slug: Slug);

    fn slug_source(&self) -> Option<&str>;

    fn scope_accessors() -> &'static [ScopeAccessor<Self>] {
        &[]
    }
}
