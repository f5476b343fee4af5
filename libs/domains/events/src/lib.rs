//! Events Domain
//!
//! Creation and maintenance of schedulable, priced, enrollment-limited
//! events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request binding
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validate → derive → save
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌────────────┐
//! │ Repository  │     │ Validation │  ← pricing and schedule rules
//! └──────┬──────┘     └────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← EventInput, Event, EventStatus
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{handlers, InMemoryEventRepository, EventService};
//!
//! let service = EventService::new(InMemoryEventRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{EventError, EventResult};
pub use handlers::ApiDoc;
pub use models::{
    Event, EventInput, EventPage, EventStatus, Identifiable, PageMetadata, PageRequest,
    INITIAL_STATUS,
};
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;
pub use validation::{validate, FieldViolation, ViolationCode};
