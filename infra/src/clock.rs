//! Real-world `Clock`/`IdProvider` implementations (spec §2), swapped for
//! the fakes in `ns_shared::time::fakes` only in tests.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use ns_shared::time::{Clock, IdProvider};

#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Default)]
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn new_token(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
