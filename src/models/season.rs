use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonList {
    #[serde(rename = "Seasons", default)]
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonListResponse {
    #[serde(rename = "SeasonTable")]
    pub season_table: SeasonList,
}

impl From<Vec<Season>> for SeasonListResponse {
    fn from(seasons: Vec<Season>) -> Self {
        SeasonListResponse {
            season_table: SeasonList { seasons },
        }
    }
}
