// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of timestamps for commands; tests inject a fixed clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
