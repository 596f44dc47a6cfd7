use super::info;
use axum::routing::get;
use sheetwise_domain::constants::API_ROOT;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes owned by the kernel: the informational route, reachable with and without
/// the trailing slash. Only the slash form is documented.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(info::info)).route(API_ROOT, get(info::info))
}
