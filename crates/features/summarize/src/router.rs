use super::handlers;
use sheetwise_kernel::server::state::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn summarize_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::summarize_spreadsheet))
        .routes(routes!(handlers::summarize_text))
}
