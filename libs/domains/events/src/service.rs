use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventInput, EventPage, PageRequest};
use crate::repository::EventRepository;
use crate::validation;

/// Service layer for Event business logic
///
/// Every write goes through the same pipeline: binding checks, business
/// rules, derivation, then the repository.
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Run the binding precondition and the business rules.
    ///
    /// The request is rejected as a whole if any rule fails.
    fn check(input: &EventInput) -> EventResult<()> {
        input.validate()?;

        let violations = validation::validate(input);
        if !violations.is_empty() {
            info!(violations = violations.len(), "Rejected event input");
            return Err(EventError::Invalid(violations));
        }
        Ok(())
    }

    /// Validate, derive and persist a new event
    #[instrument(skip(self, input), fields(event_name = %input.name))]
    pub async fn create_event(&self, input: EventInput) -> EventResult<Event> {
        Self::check(&input)?;

        let event = Event::normalize_for_creation(input);
        self.repository.save(event).await
    }

    /// Get an event by ID
    pub async fn get_event(&self, id: Uuid) -> EventResult<Event> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    /// List one page of events
    pub async fn list_events(&self, page: PageRequest) -> EventResult<EventPage> {
        let (content, total) = self.repository.find_page(page).await?;
        Ok(EventPage::new(content, page, total))
    }

    /// Replace an event's data, keeping its id and status
    #[instrument(skip(self, input), fields(event_id = %id))]
    pub async fn update_event(&self, id: Uuid, input: EventInput) -> EventResult<Event> {
        let existing = self.get_event(id).await?;
        Self::check(&input)?;

        self.repository.save(existing.merged_with(input)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventStatus;
    use crate::repository::MockEventRepository;
    use chrono::{NaiveDate, NaiveDateTime};
    use mockall::predicate::eq;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 9, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn valid_input() -> EventInput {
        EventInput {
            name: "Spring".to_string(),
            description: "REST API Development with Spring".to_string(),
            begin_enrollment_date_time: at(1),
            close_enrollment_date_time: at(2),
            begin_event_date_time: at(3),
            end_event_date_time: at(4),
            location: Some("Main Hall".to_string()),
            base_price: 100,
            max_price: 200,
            limit_of_enrollment: 100,
        }
    }

    fn stored(mut event: Event) -> Event {
        event.id = Some(Uuid::now_v7());
        event
    }

    #[tokio::test]
    async fn test_create_saves_derived_draft_event() {
        let mut mock_repo = MockEventRepository::new();

        mock_repo
            .expect_save()
            .withf(|event| {
                event.id.is_none()
                    && event.event_status == EventStatus::Draft
                    && !event.free
                    && event.offline
            })
            .times(1)
            .returning(|event| Ok(stored(event)));

        let service = EventService::new(mock_repo);
        let event = service.create_event(valid_input()).await.unwrap();

        assert!(event.id.is_some());
        assert_eq!(event.event_status, EventStatus::Draft);
    }

    #[tokio::test]
    async fn test_create_with_violations_never_saves() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_save().never();

        let mut input = valid_input();
        input.base_price = 300;
        input.end_event_date_time = at(1);

        let service = EventService::new(mock_repo);
        let result = service.create_event(input).await;

        match result {
            Err(EventError::Invalid(violations)) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(
                    fields,
                    vec![
                        "basePrice",
                        "maxPrice",
                        "endEventDateTime",
                        "beginEventDateTime",
                        "closeEnrollmentDateTime"
                    ]
                );
            }
            other => panic!("expected violations, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_with_blank_name_is_rejected() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_save().never();

        let mut input = valid_input();
        input.name = " ".to_string();

        let service = EventService::new(mock_repo);
        let result = service.create_event(input).await;

        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_event_is_not_found() {
        let mut mock_repo = MockEventRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = EventService::new(mock_repo);
        let result = service.get_event(id).await;

        assert!(matches!(result, Err(EventError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_keeps_identity_and_status() {
        let mut mock_repo = MockEventRepository::new();
        let mut existing = stored(Event::normalize_for_creation(valid_input()));
        existing.event_status = EventStatus::Published;
        let id = existing.id.unwrap();

        let found = existing.clone();
        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(found.clone())));
        mock_repo
            .expect_save()
            .withf(move |event| {
                event.id == Some(id) && event.event_status == EventStatus::Published
            })
            .returning(|event| Ok(event));

        let mut input = valid_input();
        input.base_price = 0;
        input.max_price = 0;
        input.location = None;

        let service = EventService::new(mock_repo);
        let updated = service.update_event(id, input).await.unwrap();

        assert!(updated.free);
        assert!(!updated.offline);
        assert_eq!(updated.event_status, EventStatus::Published);
    }

    #[tokio::test]
    async fn test_list_builds_page_metadata() {
        let mut mock_repo = MockEventRepository::new();
        let event = stored(Event::normalize_for_creation(valid_input()));

        mock_repo
            .expect_find_page()
            .returning(move |_| Ok((vec![event.clone()], 41)));

        let service = EventService::new(mock_repo);
        let page = service
            .list_events(PageRequest { page: 0, size: 20 })
            .await
            .unwrap();

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.page.total_elements, 41);
        assert_eq!(page.page.total_pages, 3);
    }
}
