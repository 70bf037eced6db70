use serde::{Deserialize, Serialize};

use crate::search::RunReport;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub mode: String,
    pub pairs: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub answered: usize,
    pub disconnected: Vec<JsonPair>,
    pub failures: Vec<JsonFailure>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonPair {
    pub first: String,
    pub second: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonFailure {
    pub first: String,
    pub second: String,
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub actors: usize,
    pub movies: usize,
    pub search_time_ms: u64,
}

pub fn create_json_output(report: &RunReport) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            mode: report.mode.clone(),
            pairs: report.pairs,
        },
        result: JsonResult {
            answered: report.answered,
            disconnected: report
                .disconnected
                .iter()
                .map(|pair| JsonPair {
                    first: pair.first.clone(),
                    second: pair.second.clone(),
                })
                .collect(),
            failures: report
                .failures
                .iter()
                .map(|failure| JsonFailure {
                    first: failure.pair.first.clone(),
                    second: failure.pair.second.clone(),
                    error: failure.error.to_string(),
                })
                .collect(),
        },
        stats: JsonStats {
            actors: report.actor_count,
            movies: report.movie_count,
            search_time_ms: (report.duration * 1000.0) as u64,
        },
    }
}
