use axum::{extract::State, Json};
use tracing::warn;

use crate::{
    models::{ergast::SeasonTablePayload, error::Error, season::SeasonListResponse},
    utils::state::AppState,
};

pub const SEASON_LIMIT: &str = "100";

pub async fn list_seasons(
    State(state): State<AppState>,
) -> Result<Json<SeasonListResponse>, Error> {
    let payload: SeasonTablePayload = state
        .ergast
        .fetch_with_query("seasons.json", &[("limit", SEASON_LIMIT)])
        .await
        .map_err(|e| {
            warn!("{:?}", e);
            Error::from(e)
        })?;

    Ok(Json(payload.season_table.seasons.into()))
}
