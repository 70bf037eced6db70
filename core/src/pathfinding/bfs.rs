use super::utils::{PathResult, TraversalState, reconstruct_path};
use crate::connectivity::Connection;
use crate::graph::ActorGraph;
use crate::model::ActorId;
use crate::schedule::{RevealMode, YearSchedule};
use std::collections::VecDeque;
use tracing::trace;

/// Breadth-first traversal over the current adjacency. Stops early once
/// `target` is dequeued.
pub fn bfs_traverse(graph: &ActorGraph, start: ActorId, target: Option<ActorId>) -> TraversalState {
    let mut state = TraversalState::new(graph.actor_count(), start);
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if state.visited[current.index()] {
            continue;
        }
        state.visited[current.index()] = true;
        if Some(current) == target {
            break;
        }

        let next_distance = state.distance[current.index()] + 1;
        for &neighbor in graph.actor(current).neighbors() {
            if state.relax(neighbor, current, next_distance) {
                queue.push_back(neighbor);
            }
        }
    }

    state
}

/// Rebuilds the adjacency one year at a time and searches after each year.
pub fn bfs_first_year(graph: &mut ActorGraph, start: ActorId, end: ActorId) -> Connection {
    graph.reset_neighbors();
    let mut schedule = YearSchedule::new(graph);

    while let Some(year) = schedule.reveal_next_year(graph, RevealMode::EdgeBuilding) {
        let state = bfs_traverse(graph, start, Some(end));
        trace!(year, reached = state.visited_count(), "searched revealed graph");
        if state.is_reached(end) {
            return Connection::ConnectedIn(year);
        }
    }

    Connection::NeverConnected
}

/// Fewest-hop path over the full graph under its current weights.
pub fn bfs_find_path(graph: &mut ActorGraph, start: ActorId, target: ActorId) -> PathResult {
    let weights = graph.weights().clone();
    graph.ensure_full(&weights);

    let state = bfs_traverse(graph, start, Some(target));
    let path = reconstruct_path(graph, &state, start, target);
    (path, state.visited_count())
}
