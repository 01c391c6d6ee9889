//! Upstream (Ergast-compatible) payload shapes.
//!
//! Only the fields the aggregator reads are modelled. Everything is optional or
//! defaulted so that a sparse upstream record degrades to a fallback value
//! instead of failing the whole request.

use serde::Deserialize;
use serde_json::Value;

use crate::models::season::Season;

#[derive(Deserialize, Debug)]
pub struct RaceTablePayload<T> {
    #[serde(rename = "RaceTable", default = "RaceTable::empty")]
    pub race_table: RaceTable<T>,
}

#[derive(Deserialize, Debug)]
pub struct RaceTable<T> {
    #[serde(rename = "Races", default = "Vec::new")]
    pub races: Vec<T>,
}

impl<T> RaceTable<T> {
    fn empty() -> Self {
        RaceTable { races: Vec::new() }
    }
}

impl<T> Default for RaceTable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct SeasonTablePayload {
    #[serde(rename = "SeasonTable", default)]
    pub season_table: SeasonTable,
}

#[derive(Deserialize, Debug, Default)]
pub struct SeasonTable {
    #[serde(rename = "Seasons", default)]
    pub seasons: Vec<Season>,
}

/// A race as listed by `{season}.json`, `current.json` or `{season}/sprint.json`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScheduledRace {
    #[serde(default)]
    pub round: String,
    #[serde(rename = "raceName", default)]
    pub race_name: String,
    #[serde(rename = "Circuit", default)]
    pub circuit: Option<Circuit>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Circuit {
    #[serde(rename = "Location", default)]
    pub location: Option<CircuitLocation>,
}

/// Coordinates are strings upstream but are kept as raw JSON so numeric
/// values are accepted as well.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CircuitLocation {
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub long: Value,
    #[serde(default)]
    pub country: String,
}

/// A race as returned by the per-round enrichment endpoints.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RoundRace {
    #[serde(rename = "QualifyingResults", default)]
    pub qualifying_results: Vec<Classification>,
    #[serde(rename = "Results", default)]
    pub results: Vec<Classification>,
    #[serde(rename = "SprintResults", default)]
    pub sprint_results: Vec<Classification>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Classification {
    #[serde(rename = "Driver", default)]
    pub driver: Option<DriverRef>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DriverRef {
    #[serde(rename = "familyName", default)]
    pub family_name: Option<String>,
}

/// Surname of the first classified driver, if it is present and non-empty.
pub fn leading_surname(entries: &[Classification]) -> Option<&str> {
    entries
        .first()
        .and_then(|entry| entry.driver.as_ref())
        .and_then(|driver| driver.family_name.as_deref())
        .filter(|name| !name.is_empty())
}

/// Parses an upstream coordinate, keeping only finite values.
pub fn parse_coordinate(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Number(n) => n.as_f64()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}
