use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{Event, PageRequest};

/// Repository trait for Event persistence
///
/// `save` owns id assignment: an event without an id is inserted under a
/// fresh one, an event with an id replaces the stored record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert or replace an event, returning the stored record
    async fn save(&self, event: Event) -> EventResult<Event>;

    /// Get an event by ID
    async fn find_by_id(&self, id: Uuid) -> EventResult<Option<Event>>;

    /// One page of events ordered by id, plus the total number of events
    async fn find_page(&self, page: PageRequest) -> EventResult<(Vec<Event>, u64)>;
}

/// In-memory implementation of EventRepository (for development/testing)
///
/// Ids are UUIDv7, so the map order is creation order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<BTreeMap<Uuid, Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn save(&self, mut event: Event) -> EventResult<Event> {
        let mut events = self.events.write().await;

        match event.id {
            Some(id) => {
                let stored = events.get_mut(&id).ok_or(EventError::NotFound(id))?;
                *stored = event.clone();
                tracing::info!(event_id = %id, "Updated event");
            }
            None => {
                let id = Uuid::now_v7();
                event.id = Some(id);
                events.insert(id, event.clone());
                tracing::info!(event_id = %id, "Created event");
            }
        }

        Ok(event)
    }

    async fn find_by_id(&self, id: Uuid) -> EventResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn find_page(&self, page: PageRequest) -> EventResult<(Vec<Event>, u64)> {
        let events = self.events.read().await;

        let content = events
            .values()
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect();

        Ok((content, events.len() as u64))
    }
}
