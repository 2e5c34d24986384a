use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall clock used to stamp `created_at`/`updated_at` outside of tests.
#[derive(Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
