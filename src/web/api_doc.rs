use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::satellites::{TleResponse, VisibilityResponse};
use crate::catalog::SatelliteRecord;
use crate::refresh::{RefreshFailure, RefreshReport};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::satellites::get_satellite,
        super::api::satellites::fetch_and_save,
        super::api::satellites::get_tle,
        super::api::satellites::get_position,
        super::api::satellites::get_czml,
        super::api::satellites::get_visibility,
        super::api::refresh::refresh_all,
    ),
    components(
        schemas(
            SatelliteRecord,
            TleResponse,
            VisibilityResponse,
            RefreshReport,
            RefreshFailure,
            ErrorResponse,
        )
    ),
    info(
        title = "Sat-Vis API",
        description = "Satellite positions, visibility and trajectories",
        version = "0.1.0"
    ),
    tags(
        (name = "satellites", description = "Satellite records and positions"),
        (name = "refresh", description = "Catalog refresh")
    )
)]
pub struct ApiDoc;
