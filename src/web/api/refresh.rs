use axum::{extract::State, Json};

use crate::refresh::RefreshReport;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::AppState;

#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "Refresh cycle finished", body = RefreshReport),
        (status = 500, description = "Catalog could not be listed", body = ErrorResponse)
    ),
    tag = "refresh"
)]
pub async fn refresh_all(State(state): State<AppState>) -> ApiResult<Json<RefreshReport>> {
    Ok(Json(state.refresher.refresh_all().await?))
}
