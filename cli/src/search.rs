use castpath_core::{
    ActorGraph, ActorPair, Algorithm, QueryError, WeightMode, first_year_connected, shortest_path,
};
use std::{
    io::{self, Write},
    time::Instant,
};
use tracing::debug;

use crate::output::{CONNECTIONS_HEADER, PATH_HEADER, format_connection, format_path};

pub struct QueryFailure {
    pub pair: ActorPair,
    pub error: QueryError,
}

pub struct RunReport {
    pub mode: String,
    pub actor_count: usize,
    pub movie_count: usize,
    pub pairs: usize,
    pub answered: usize,
    pub disconnected: Vec<ActorPair>,
    pub failures: Vec<QueryFailure>,
    pub duration: f64,
}

impl RunReport {
    fn new(mode: String, graph: &ActorGraph, pairs: usize) -> Self {
        Self {
            mode,
            actor_count: graph.actor_count(),
            movie_count: graph.movie_count(),
            pairs,
            answered: 0,
            disconnected: Vec::new(),
            failures: Vec::new(),
            duration: 0.0,
        }
    }

    fn record_failure(&mut self, pair: &ActorPair, error: QueryError) {
        debug!(first = %pair.first, second = %pair.second, %error, "query failed");
        self.failures.push(QueryFailure {
            pair: pair.clone(),
            error,
        });
    }
}

/// Answers every pair with a shortest path. Pairs with no path or an unknown
/// actor produce no output line.
pub fn run_path_queries<W: Write>(
    graph: &mut ActorGraph,
    pairs: &[ActorPair],
    weight_mode: WeightMode,
    out: &mut W,
) -> io::Result<RunReport> {
    let search_timer = Instant::now();
    let mode = match weight_mode {
        WeightMode::Unweighted => "unweighted paths",
        WeightMode::Weighted => "weighted paths",
    };
    let mut report = RunReport::new(mode.to_string(), graph, pairs.len());

    writeln!(out, "{}", PATH_HEADER)?;
    for pair in pairs {
        match shortest_path(graph, &pair.first, &pair.second, weight_mode) {
            Ok((Some(path), _)) => {
                writeln!(out, "{}", format_path(&path, graph))?;
                report.answered += 1;
            }
            Ok((None, _)) => report.disconnected.push(pair.clone()),
            Err(error) => report.record_failure(pair, error),
        }
    }

    report.duration = search_timer.elapsed().as_secs_f64();
    Ok(report)
}

/// Answers every pair with the year it first became connected.
pub fn run_connection_queries<W: Write>(
    graph: &mut ActorGraph,
    pairs: &[ActorPair],
    algorithm: Algorithm,
    out: &mut W,
) -> io::Result<RunReport> {
    let search_timer = Instant::now();
    let mut report = RunReport::new(format!("connections ({})", algorithm.as_str()), graph, pairs.len());

    writeln!(out, "{}", CONNECTIONS_HEADER)?;
    for pair in pairs {
        match first_year_connected(graph, &pair.first, &pair.second, algorithm) {
            Ok(connection) => {
                writeln!(out, "{}", format_connection(pair, connection))?;
                report.answered += 1;
                if !connection.is_connected() {
                    report.disconnected.push(pair.clone());
                }
            }
            Err(error) => report.record_failure(pair, error),
        }
    }

    report.duration = search_timer.elapsed().as_secs_f64();
    Ok(report)
}
