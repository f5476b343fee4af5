use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestQueryResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    QueryParams, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{EventError, EventResult};
use crate::models::{Event, EventInput, EventPage, EventStatus, PageMetadata, PageRequest};
use crate::repository::EventRepository;
use crate::service::EventService;
use crate::validation::{FieldViolation, ViolationCode};

/// Path the binary mounts this router under; used for `Location` headers.
pub const EVENTS_PATH: &str = "/api/events";

const TAG: &str = "events";

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, get_event, update_event),
    components(
        schemas(
            Event,
            EventInput,
            EventStatus,
            EventPage,
            PageMetadata,
            PageRequest,
            FieldViolation,
            ViolationCode
        ),
        responses(
            NotFoundResponse,
            BadRequestQueryResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Event management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the event router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{id}", get(get_event).put(update_event))
        .with_state(shared_service)
}

/// List events one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageRequest),
    responses(
        (status = 200, description = "One page of events", body = EventPage),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    QueryParams(page): QueryParams<PageRequest>,
) -> EventResult<Json<EventPage>> {
    let page = service.list_events(page).await?;
    Ok(Json(page))
}

/// Create a new event
///
/// Derived fields (`free`, `offline`) and the status are computed by the
/// server; any values the client sends for them are ignored.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = EventInput,
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ValidatedJson(input): ValidatedJson<EventInput>,
) -> EventResult<impl IntoResponse> {
    let event = service.create_event(input).await?;
    let id = event
        .id
        .ok_or_else(|| EventError::Internal("saved event has no id".to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{}/{}", EVENTS_PATH, id))],
        Json(event),
    ))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
) -> EventResult<Json<Event>> {
    let event = service.get_event(id).await?;
    Ok(Json(event))
}

/// Replace an event's data
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = EventInput,
    responses(
        (status = 200, description = "Event updated successfully", body = Event),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<EventInput>,
) -> EventResult<Json<Event>> {
    let event = service.update_event(id, input).await?;
    Ok(Json(event))
}
