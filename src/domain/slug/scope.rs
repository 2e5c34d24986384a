use crate::domain::slug::entity::Sluggable;
use crate::domain::slug::value_objects::ScopeFilters;

/// Collect the companion-field values that narrow a uniqueness check.
///
/// Fields are visited in declaration order. A field whose value is absent, or
/// for which the entity type registers no accessor, is left out; the check
/// then runs against a broader scope instead of failing.
pub fn extract_scope_filters<E: Sluggable>(entity: &E, declared: &[String]) -> ScopeFilters {
    let accessors = E::scope_accessors();
    let mut filters = ScopeFilters::new();

    for field in declared {
        let Some(accessor) = accessors.iter().find(|a| a.field == field.as_str()) else {
            tracing::warn!(
                entity_type = %E::entity_type(),
                field = %field,
                "no scope accessor registered; field left out of slug scope"
            );
            continue;
        };

        if let Some(value) = (accessor.read)(entity) {
            filters.push(field.clone(), value);
        }
    }

    filters
}
