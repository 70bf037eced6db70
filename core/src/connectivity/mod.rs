pub mod union_find;

pub use union_find::DisjointSet;

use crate::error::QueryError;
use crate::graph::ActorGraph;
use crate::model::ActorId;
use crate::pathfinding::bfs::bfs_first_year;
use crate::pathfinding_config::Algorithm;
use crate::schedule::{RevealMode, YearSchedule};
use tracing::debug;

/// Year written out for pairs that never become connected.
pub const NOT_CONNECTED_YEAR: i32 = 9999;

/// Outcome of a "first year connected" query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    ConnectedIn(i32),
    NeverConnected,
}

impl Connection {
    pub fn year(&self) -> Option<i32> {
        match self {
            Connection::ConnectedIn(year) => Some(*year),
            Connection::NeverConnected => None,
        }
    }

    /// The year, or `NOT_CONNECTED_YEAR` when never connected.
    pub fn year_or_sentinel(&self) -> i32 {
        self.year().unwrap_or(NOT_CONNECTED_YEAR)
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Connection::ConnectedIn(_))
    }
}

/// Earliest year at which `start` and `end` share a chain of casts.
///
/// A pair of the same actor resolves to the dataset's earliest year.
pub fn first_year_connected(
    graph: &mut ActorGraph,
    start: &str,
    end: &str,
    algorithm: Algorithm,
) -> Result<Connection, QueryError> {
    let start_id = graph.resolve_actor(start)?;
    let end_id = graph.resolve_actor(end)?;

    let connection = match algorithm {
        Algorithm::UnionFind => union_find_first_year(graph, start_id, end_id),
        Algorithm::Bfs => bfs_first_year(graph, start_id, end_id),
    };

    debug!(
        start,
        end,
        algorithm = algorithm.as_str(),
        year = connection.year_or_sentinel(),
        "answered connection query"
    );
    Ok(connection)
}

/// Reveals years into fresh disjoint sets until both actors share a root.
pub fn union_find_first_year(graph: &mut ActorGraph, start: ActorId, end: ActorId) -> Connection {
    let mut sets = DisjointSet::new(graph.actor_count());
    let mut schedule = YearSchedule::new(graph);

    while let Some(year) = schedule.reveal_next_year(graph, RevealMode::Connectivity(&mut sets)) {
        if sets.connected(start, end) {
            return Connection::ConnectedIn(year);
        }
    }

    Connection::NeverConnected
}
