// src/domain/slug/services/mod.rs
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::errors::SlugError;
use crate::domain::slug::repository::SlugRepository;
use crate::domain::slug::value_objects::{EntityIdentity, EntityType, ScopeFilters, Slug};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// What the resolver assumes when an existence check cannot be evaluated.
///
/// `FailOpen` keeps saves available but can admit a duplicate slug while the
/// check is failing; the database unique constraint is then the only guard.
/// `FailClosed` counts the failed check as a collision, so a persistent
/// failure ends in `ExhaustedAttempts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckFailurePolicy {
    #[default]
    FailOpen,
    FailClosed,
}

impl FromStr for CheckFailurePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fail-open" | "open" => Ok(Self::FailOpen),
            "fail-closed" | "closed" => Ok(Self::FailClosed),
            other => Err(format!("unknown check failure policy `{other}`")),
        }
    }
}

impl fmt::Display for CheckFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FailOpen => "fail-open",
            Self::FailClosed => "fail-closed",
        })
    }
}

/// A candidate made only of whitespace and separators carries no text.
fn is_blank(candidate: &str) -> bool {
    candidate
        .trim_matches(|c: char| c.is_whitespace() || c == '-')
        .is_empty()
}

/// Candidate probed after `attempts` collisions: the first retry is `base-2`.
fn suffixed(base: &str, attempts: u32) -> String {
    format!("{base}-{}", u64::from(attempts) + 1)
}

/// Domain service that turns a normalized base slug into one no other row
/// of the same scope uses.
///
/// Candidates are probed strictly in order: `base`, `base-2`, `base-3`, ...
/// Probing is a best-effort pre-check; concurrent writers can still race to
/// the same candidate.
pub struct SlugResolver {
    repo: Arc<dyn SlugRepository>,
    max_attempts: u32,
    on_check_failure: CheckFailurePolicy,
}

impl SlugResolver {
    pub fn new(repo: Arc<dyn SlugRepository>) -> Self {
        Self {
            repo,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            on_check_failure: CheckFailurePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub fn with_check_failure_policy(mut self, policy: CheckFailurePolicy) -> Self {
        self.on_check_failure = policy;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn repository(&self) -> Arc<dyn SlugRepository> {
        Arc::clone(&self.repo)
    }

    pub async fn resolve(
        &self,
        entity_type: EntityType,
        base: &str,
        exclude: Option<&EntityIdentity>,
        scope: &ScopeFilters,
    ) -> DomainResult<Slug> {
        if is_blank(base) {
            return Err(SlugError::BlankCandidate { entity_type }.into());
        }

        let mut candidate = base.to_owned();
        let mut attempts = 0u32;

        loop {
            if !self.collides(entity_type, &candidate, exclude, scope).await? {
                tracing::debug!(
                    entity_type = %entity_type,
                    slug = %candidate,
                    attempts,
                    "slug accepted"
                );
                return Slug::new(candidate);
            }

            attempts += 1;
            if attempts >= self.max_attempts {
                return Err(SlugError::ExhaustedAttempts {
                    entity_type,
                    base: base.to_owned(),
                    attempts,
                }
                .into());
            }

            candidate = suffixed(base, attempts);
        }
    }

    /// Configuration errors reported by the repository are fatal; any other
    /// failure is settled by the check failure policy.
    async fn collides(
        &self,
        entity_type: EntityType,
        candidate: &str,
        exclude: Option<&EntityIdentity>,
        scope: &ScopeFilters,
    ) -> DomainResult<bool> {
        match self
            .repo
            .slug_exists(entity_type, candidate, exclude, scope)
            .await
        {
            Ok(exists) => {
                tracing::debug!(entity_type = %entity_type, candidate, exists, "slug probe");
                Ok(exists)
            }
            Err(DomainError::Slug(err)) => Err(err.into()),
            Err(err) => {
                tracing::warn!(
                    entity_type = %entity_type,
                    candidate,
                    error = %err,
                    policy = %self.on_check_failure,
                    "slug existence check failed"
                );
                Ok(self.on_check_failure == CheckFailurePolicy::FailClosed)
            }
        }
    }
}
