use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The single persisted record. Field names match the blob format the
/// widget has always written, so older files keep loading; `history` was
/// added later and defaults to empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyRecord {
    pub total: u64,
    pub date: String,
    #[serde(rename = "dailyKills")]
    pub daily_kills: u64,
    #[serde(default)]
    pub history: BTreeMap<String, u64>,
}

#[derive(Debug, Deserialize)]
pub struct SetupRequest {
    pub total: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub total: String,
    #[serde(default)]
    pub skip_daily: bool,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Serialize)]
pub struct TallyResponse {
    pub needs_setup: bool,
    pub total: u64,
    pub daily_kills: u64,
    pub record: u64,
    pub date: String,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub total: u64,
    pub daily_kills: u64,
    pub record: u64,
    pub new_record: bool,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub kills: u64,
    pub live: bool,
}
