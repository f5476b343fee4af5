use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Events API",
        version = "0.1.0",
        description = "API for creating, reading and updating scheduled events"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/events", api = domain_events::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
