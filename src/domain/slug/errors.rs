use crate::domain::slug::value_objects::EntityType;
use thiserror::Error;

/// Reasons a slug could not be assigned. Every variant is fatal to the save
/// operation that triggered it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug candidate for {entity_type} is blank after normalization")]
    BlankCandidate { entity_type: EntityType },
    #[error("no free slug for {entity_type} derived from `{base}` after {attempts} attempts")]
    ExhaustedAttempts {
        entity_type: EntityType,
        base: String,
        attempts: u32,
    },
    #[error("slug generator `{0}` is not registered")]
    MisconfiguredGenerator(String),
    #[error("slug repository misconfigured: {0}")]
    MisconfiguredProvider(String),
}
