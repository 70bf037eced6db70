use serde::{Deserialize, Serialize};

/// Reference year of the bundled dataset; movie weight is `1 + (reference - year)`.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2015;

/// Algorithm used to answer "first year connected" queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "ufind")]
    UnionFind,
    #[serde(rename = "bfs")]
    Bfs,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::UnionFind => "ufind",
            Algorithm::Bfs => "bfs",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bfs" => Algorithm::Bfs,
            _ => Algorithm::UnionFind,
        }
    }
}

impl From<String> for Algorithm {
    fn from(s: String) -> Self {
        Algorithm::from(s.as_str())
    }
}

/// Edge cost used by shortest path queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightMode {
    #[default]
    Unweighted,
    Weighted,
}

impl WeightMode {
    /// Parses the `u`/`w` flag; anything else is rejected.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "u" => Some(WeightMode::Unweighted),
            "w" => Some(WeightMode::Weighted),
            _ => None,
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, WeightMode::Weighted)
    }
}

/// Configuration for pathfinding algorithms
#[derive(Debug, Clone)]
pub struct PathfindingConfig {
    pub weight_mode: WeightMode,
    /// Year a movie must be older than to cost more than one
    pub reference_year: i32,
}

impl PathfindingConfig {
    pub fn new(weight_mode: WeightMode, reference_year: i32) -> Self {
        Self {
            weight_mode,
            reference_year,
        }
    }

    pub fn weighted() -> Self {
        Self::new(WeightMode::Weighted, DEFAULT_REFERENCE_YEAR)
    }

    /// Cost of traversing a movie released in `year`.
    pub fn movie_weight(&self, year: i32) -> u64 {
        match self.weight_mode {
            WeightMode::Unweighted => 1,
            WeightMode::Weighted => {
                let age = i64::from(self.reference_year) - i64::from(year);
                1 + age.max(0) as u64
            }
        }
    }
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            weight_mode: WeightMode::Unweighted,
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}
