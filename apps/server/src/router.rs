use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Json, Router};
use sheetwise::domain::constants::{API_ROOT, DOCS_PATH, OPENAPI_PATH};
use sheetwise::kernel::server::openapi::ApiDoc;
use sheetwise::kernel::server::state::ApiState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub(crate) fn init(state: ApiState) -> Router {
    let body_limit = state.config.server.body_limit;

    // Separate the documented routes and the API description
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(sheetwise::server::router::system_router())
        .merge(sheetwise::server::router::summarize_router())
        .with_state(state)
        .split_for_parts();

    let document = api_doc.clone();
    let openapi_routes = Router::new()
        .route(&format!("{API_ROOT}{OPENAPI_PATH}"), get(move || async move { Json(document) }));

    let scalar_routes = Scalar::with_url(format!("{API_ROOT}{DOCS_PATH}"), api_doc);

    Router::new()
        .merge(api_routes)
        .merge(openapi_routes)
        .merge(scalar_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
}

/// Any origin, method and header; credentials are never allowed.
fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}
