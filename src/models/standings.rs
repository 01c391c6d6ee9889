use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverStanding {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub points: String,
    #[serde(default)]
    pub wins: String,
    #[serde(rename = "Driver", default)]
    pub driver: StandingDriver,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingDriver {
    #[serde(rename = "driverId", default)]
    pub driver_id: String,
    #[serde(rename = "givenName", default)]
    pub given_name: String,
    #[serde(rename = "familyName", default)]
    pub family_name: String,
}

impl StandingDriver {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructorStanding {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub points: String,
    #[serde(default)]
    pub wins: String,
    #[serde(rename = "Constructor", default)]
    pub constructor: StandingConstructor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingConstructor {
    #[serde(rename = "constructorId", default)]
    pub constructor_id: String,
    #[serde(default)]
    pub name: String,
}

/// `StandingsTable` as passed through from upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsTable {
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsList {
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<ConstructorStanding>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsPayload {
    #[serde(rename = "StandingsTable", default)]
    pub standings_table: StandingsTable,
}
