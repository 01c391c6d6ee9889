use serde::{Deserialize, Serialize};

/// Denormalized race summary served by the race endpoints.
///
/// `location` is `[longitude, latitude]`, both finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceSummary {
    pub name: String,
    pub country: String,
    pub location: [f64; 2],
    #[serde(rename = "polePosition")]
    pub pole_position: String,
    pub winner: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races")]
    pub races: Vec<RaceSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceTableResponse {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

impl From<Vec<RaceSummary>> for RaceTableResponse {
    fn from(races: Vec<RaceSummary>) -> Self {
        RaceTableResponse {
            race_table: RaceTable { races },
        }
    }
}
