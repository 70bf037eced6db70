use super::utils::{PathResult, TraversalState, reconstruct_path};
use crate::graph::ActorGraph;
use crate::model::ActorId;
use crate::pathfinding_config::PathfindingConfig;
use crate::queue::KeyedMinQueue;

type Candidate = (ActorId, u64);

/// Lowest-cost path over the full graph weighted under `config`.
///
/// Stops once `target` is settled; extraction order is non-decreasing in
/// distance so its distance is final at that point.
pub fn dijkstra_find_path(
    graph: &mut ActorGraph,
    start: ActorId,
    target: ActorId,
    config: &PathfindingConfig,
) -> PathResult {
    graph.ensure_full(config);

    let mut state = TraversalState::new(graph.actor_count(), start);
    let mut queue = KeyedMinQueue::new(|candidate: &Candidate| candidate.1);
    queue.push((start, 0));

    while let Some((current, cost)) = queue.pop() {
        if state.visited[current.index()] {
            continue;
        }
        state.visited[current.index()] = true;
        if current == target {
            break;
        }

        let actor = graph.actor(current);
        for &neighbor in actor.neighbors() {
            if state.visited[neighbor.index()] {
                continue;
            }
            let Some(edge) = actor.edge_to(neighbor) else {
                continue;
            };
            let total = cost.saturating_add(edge.weight);
            if state.relax(neighbor, current, total) {
                queue.push((neighbor, total));
            }
        }
    }

    let path = reconstruct_path(graph, &state, start, target);
    (path, state.visited_count())
}
