//! Event domain models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Status every event starts in, whatever the caller sent.
pub const INITIAL_STATUS: EventStatus = EventStatus::Draft;

/// Upper bound for `size` when listing events.
pub const MAX_PAGE_SIZE: u32 = 100;

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Lifecycle of an event.
///
/// Only the initial state is assigned here; promotion to the later states is
/// left to whoever publishes or schedules events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Created but not visible yet
    Draft,
    /// Open for enrollment
    Published,
    /// Event is running
    Started,
    /// Event is over
    Ended,
}

/// Candidate event data as bound from a request body.
///
/// Unknown keys (`id`, `free`, `offline`, `eventStatus`) are dropped during
/// deserialization, so clients cannot smuggle derived state in.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank", message = "Name must not be blank")
    )]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String, example = "2022-09-01T12:00:00")]
    pub begin_enrollment_date_time: NaiveDateTime,
    #[schema(value_type = String, example = "2022-09-02T12:00:00")]
    pub close_enrollment_date_time: NaiveDateTime,
    #[schema(value_type = String, example = "2022-09-03T12:00:00")]
    pub begin_event_date_time: NaiveDateTime,
    #[schema(value_type = String, example = "2022-09-04T12:00:00")]
    pub end_event_date_time: NaiveDateTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub base_price: u32,
    #[serde(default)]
    pub max_price: u32,
    #[serde(default)]
    pub limit_of_enrollment: u32,
}

/// Identity contract for entities whose key is assigned on persistence.
///
/// Two entities are the same only when both carry an id and the ids match;
/// unsaved entities never compare equal, not even to themselves.
pub trait Identifiable {
    fn identity(&self) -> Option<Uuid>;

    fn is_same_entity(&self, other: &Self) -> bool {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Canonical, validated event record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the repository on first save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub begin_enrollment_date_time: NaiveDateTime,
    #[schema(value_type = String)]
    pub close_enrollment_date_time: NaiveDateTime,
    #[schema(value_type = String)]
    pub begin_event_date_time: NaiveDateTime,
    #[schema(value_type = String)]
    pub end_event_date_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub base_price: u32,
    pub max_price: u32,
    pub limit_of_enrollment: u32,
    /// No charge at all: both prices are zero
    pub free: bool,
    /// Has a physical location
    pub offline: bool,
    pub event_status: EventStatus,
}

impl Event {
    /// Build the persist-ready record from an input that passed validation.
    ///
    /// Derived fields are always recomputed and the status is reset to
    /// [`INITIAL_STATUS`]; the id stays unset until the repository saves it.
    pub fn normalize_for_creation(input: EventInput) -> Self {
        let free = input.base_price == 0 && input.max_price == 0;
        let offline = input
            .location
            .as_deref()
            .is_some_and(|location| !location.trim().is_empty());

        Self {
            id: None,
            name: input.name,
            description: input.description,
            begin_enrollment_date_time: input.begin_enrollment_date_time,
            close_enrollment_date_time: input.close_enrollment_date_time,
            begin_event_date_time: input.begin_event_date_time,
            end_event_date_time: input.end_event_date_time,
            location: input.location,
            base_price: input.base_price,
            max_price: input.max_price,
            limit_of_enrollment: input.limit_of_enrollment,
            free,
            offline,
            event_status: INITIAL_STATUS,
        }
    }

    /// Re-derive this event from a replacement input, keeping identity and
    /// lifecycle state.
    pub fn merged_with(&self, input: EventInput) -> Self {
        Self {
            id: self.id,
            event_status: self.event_status,
            ..Self::normalize_for_creation(input)
        }
    }
}

impl Identifiable for Event {
    fn identity(&self) -> Option<Uuid> {
        self.id
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_entity(other)
    }
}

/// Page request for listing events (zero-based page number)
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, IntoParams)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
        }
    }
}

impl PageRequest {
    /// Page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> usize {
        self.size.clamp(1, MAX_PAGE_SIZE) as usize
    }

    pub fn offset(&self) -> usize {
        (self.page as usize).saturating_mul(self.limit())
    }
}

/// Page metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u32,
}

/// One page of events
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPage {
    pub content: Vec<Event>,
    pub page: PageMetadata,
}

impl EventPage {
    pub fn new(content: Vec<Event>, request: PageRequest, total_elements: u64) -> Self {
        let size = request.limit() as u64;
        Self {
            content,
            page: PageMetadata {
                size: size as u32,
                total_elements,
                total_pages: total_elements.div_ceil(size),
                number: request.page,
            },
        }
    }
}
