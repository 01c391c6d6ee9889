use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;

use crate::{
    models::{error::Error, race::RaceTableResponse},
    utils::{
        race_utils::{enriched_races, RaceVariant},
        state::AppState,
    },
};

async fn race_table(
    state: &AppState,
    variant: RaceVariant,
) -> Result<Json<RaceTableResponse>, Error> {
    match enriched_races(&state.ergast, &variant).await {
        Ok(races) => Ok(Json(races.into())),
        Err(e) => {
            warn!("Race enrichment failed for {:?}: {}", variant, e);
            Err(e.into())
        }
    }
}

pub async fn season_races(
    State(state): State<AppState>,
    Path(season): Path<String>,
) -> Result<Json<RaceTableResponse>, Error> {
    race_table(&state, RaceVariant::Season(season)).await
}

pub async fn current_races(
    State(state): State<AppState>,
) -> Result<Json<RaceTableResponse>, Error> {
    race_table(&state, RaceVariant::Current).await
}

pub async fn sprint_races(
    State(state): State<AppState>,
    Path(season): Path<String>,
) -> Result<Json<RaceTableResponse>, Error> {
    race_table(&state, RaceVariant::Sprint(season)).await
}
