use serde::Serialize;

use crate::{
    client::view::{ViewMode, ViewState},
    models::race::RaceSummary,
};

pub const SPRINT_COLOR: &str = "#00FF00";
pub const RACE_COLOR: &str = "#FF1801";
pub const POINT_RADIUS: f64 = 0.7;

/// One plotted race on the globe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobePoint {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub color: &'static str,
    pub label: String,
    pub radius: f64,
}

impl GlobePoint {
    pub fn from_race(race: &RaceSummary, mode: ViewMode) -> Self {
        let [lng, lat] = race.location;
        GlobePoint {
            id: race.name.clone(),
            lat,
            lng,
            color: if mode == ViewMode::Sprint { SPRINT_COLOR } else { RACE_COLOR },
            label: format!("{}\n{}", race.name, race.country),
            radius: POINT_RADIUS,
        }
    }
}

/// Points are derived from the race list on every render, never stored.
pub fn globe_points(state: &ViewState) -> Vec<GlobePoint> {
    state
        .races
        .iter()
        .map(|race| GlobePoint::from_race(race, state.view_mode))
        .collect()
}

/// Label/value rows of the race detail panel.
pub fn detail_rows(race: &RaceSummary, mode: ViewMode) -> Vec<(&'static str, String)> {
    let winner_label = if mode == ViewMode::Sprint { "Sprint Winner" } else { "Winner" };
    let mut rows = vec![
        ("Country", race.country.clone()),
        (winner_label, race.winner.clone()),
    ];
    if mode != ViewMode::Sprint {
        rows.push(("Pole Position", race.pole_position.clone()));
    }
    rows
}
