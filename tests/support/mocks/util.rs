// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl slugkeeper::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        // Use fixed time for deterministic tests
        super::time::fixed_now()
    }
}

/// Custom normalizer joining lowercase words with underscores.
#[derive(Clone)]
pub struct UnderscoreSlug;

impl slugkeeper::application::ports::util::SlugGenerator for UnderscoreSlug {
    fn slugify(&self, s: &str) -> String {
        s.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("_")
    }
}
