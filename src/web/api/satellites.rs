use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::catalog::SatelliteRecord;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct TleResponse {
    pub tle: String,
    #[serde(rename = "currentLLA")]
    #[schema(value_type = Vec<f64>)]
    pub current_lla: [f64; 3],
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VisibilityResponse {
    pub visible: bool,
}

#[utoipa::path(
    get,
    path = "/api/satellite/{id}",
    params(("id" = u32, Path, description = "NORAD catalog number")),
    responses(
        (status = 200, description = "Stored satellite record", body = SatelliteRecord),
        (status = 404, description = "Satellite not found", body = ErrorResponse)
    ),
    tag = "satellites"
)]
pub async fn get_satellite(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<SatelliteRecord>> {
    Ok(Json(state.resolver.load(id)?))
}

#[utoipa::path(
    post,
    path = "/api/satellite/fetch-and-save/{id}",
    params(("id" = u32, Path, description = "NORAD catalog number")),
    responses(
        (status = 200, description = "Record with the fetched TLE", body = SatelliteRecord),
        (status = 502, description = "Catalog request failed", body = ErrorResponse)
    ),
    tag = "satellites"
)]
pub async fn fetch_and_save(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<SatelliteRecord>> {
    let record = state.refresher.fetch_and_save(id).await?;
    log::info!("Saved TLE for satellite {} ({})", id, record.satname);
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/satellite/{id}/tle",
    params(("id" = u32, Path, description = "NORAD catalog number")),
    responses(
        (status = 200, description = "TLE and current position", body = TleResponse),
        (status = 404, description = "Satellite not found", body = ErrorResponse),
        (status = 422, description = "Stored TLE unusable", body = ErrorResponse)
    ),
    tag = "satellites"
)]
pub async fn get_tle(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<TleResponse>> {
    let record = state.resolver.resolve_current(id)?;
    match (record.tle, record.geodetic_coordinates) {
        (Some(tle), Some(current_lla)) => Ok(Json(TleResponse { tle, current_lla })),
        (None, _) => Err(ApiError::NotFound(id)),
        (_, None) => Err(ApiError::MissingCoordinates(id)),
    }
}

#[utoipa::path(
    get,
    path = "/api/satellite/{id}/position",
    params(("id" = u32, Path, description = "NORAD catalog number")),
    responses(
        (status = 200, description = "Record with fresh geodetic and Earth-fixed coordinates", body = SatelliteRecord),
        (status = 404, description = "Satellite not found", body = ErrorResponse),
        (status = 422, description = "Stored TLE unusable", body = ErrorResponse)
    ),
    tag = "satellites"
)]
pub async fn get_position(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<SatelliteRecord>> {
    state.resolver.resolve_current(id)?;
    Ok(Json(state.resolver.resolve_xyz(id)?))
}

#[utoipa::path(
    get,
    path = "/api/satellite/{id}/czml",
    params(("id" = u32, Path, description = "NORAD catalog number")),
    responses(
        (status = 200, description = "CZML trajectory document", body = Value),
        (status = 404, description = "Satellite not found", body = ErrorResponse),
        (status = 422, description = "Stored TLE unusable", body = ErrorResponse)
    ),
    tag = "satellites"
)]
pub async fn get_czml(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Value>> {
    Ok(Json(state.resolver.trajectory(id)?))
}

#[utoipa::path(
    get,
    path = "/api/satellite/visibility/{a}/{b}",
    params(
        ("a" = u32, Path, description = "First NORAD catalog number"),
        ("b" = u32, Path, description = "Second NORAD catalog number")
    ),
    responses(
        (status = 200, description = "Line of sight between the stored positions", body = VisibilityResponse),
        (status = 404, description = "Satellite not found", body = ErrorResponse),
        (status = 409, description = "Position not resolved yet", body = ErrorResponse)
    ),
    tag = "satellites"
)]
pub async fn get_visibility(
    State(state): State<AppState>,
    Path((a, b)): Path<(u32, u32)>,
) -> ApiResult<Json<VisibilityResponse>> {
    let visible = state.resolver.is_visible(a, b)?;
    Ok(Json(VisibilityResponse { visible }))
}
