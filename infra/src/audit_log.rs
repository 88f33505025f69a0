//! Bounded audit ring (spec §4.4): capacity 1000, oldest dropped on overflow.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use ns_core::domain::entities::AuditEvent;
use ns_core::errors::DomainError;
use ns_core::services::AuditLog;

pub struct BoundedAuditLog {
    capacity: usize,
    events: Mutex<VecDeque<AuditEvent>>,
}

impl BoundedAuditLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            events: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl AuditLog for BoundedAuditLog {
    async fn record(&self, event: AuditEvent) -> Result<(), DomainError> {
        let mut events = self.events.lock().unwrap();
        if events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back(event);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<AuditEvent>, DomainError> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().rev().take(limit).cloned().collect())
    }
}
