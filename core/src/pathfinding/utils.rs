use crate::graph::ActorGraph;
use crate::model::{ActorId, MovieId};

/// Distance of an actor the traversal has not reached.
pub const INFINITE_DISTANCE: u64 = u64::MAX;

/// Path found (if any) and the number of actors settled while searching.
pub type PathResult = (Option<ActorPath>, usize);

/// Per-query traversal bookkeeping, indexed by actor.
#[derive(Debug, Clone)]
pub struct TraversalState {
    pub distance: Vec<u64>,
    pub predecessor: Vec<Option<ActorId>>,
    pub visited: Vec<bool>,
}

impl TraversalState {
    /// Every actor unreached except `start`, which sits at distance zero.
    pub fn new(actor_count: usize, start: ActorId) -> Self {
        let mut state = Self {
            distance: vec![INFINITE_DISTANCE; actor_count],
            predecessor: vec![None; actor_count],
            visited: vec![false; actor_count],
        };
        state.distance[start.index()] = 0;
        state
    }

    pub fn distance_to(&self, actor: ActorId) -> Option<u64> {
        let distance = self.distance[actor.index()];
        (distance < INFINITE_DISTANCE).then_some(distance)
    }

    pub fn is_reached(&self, actor: ActorId) -> bool {
        self.distance[actor.index()] < INFINITE_DISTANCE
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&visited| visited).count()
    }

    /// Records `actor` as reached through `via` at `distance` if that is
    /// strictly shorter than what is known.
    pub fn relax(&mut self, actor: ActorId, via: ActorId, distance: u64) -> bool {
        if distance < self.distance[actor.index()] {
            self.distance[actor.index()] = distance;
            self.predecessor[actor.index()] = Some(via);
            true
        } else {
            false
        }
    }
}

/// One actor on a path and the movie linking it to the previous actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub actor: ActorId,
    /// `None` for the first actor of the path.
    pub via: Option<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorPath {
    pub steps: Vec<PathStep>,
    pub total_weight: u64,
}

impl ActorPath {
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn actors(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.steps.iter().map(|step| step.actor)
    }

    pub fn actor_names<'g>(&self, graph: &'g ActorGraph) -> Vec<&'g str> {
        self.actors().map(|id| graph.actor(id).name.as_str()).collect()
    }

    /// Labels of the connecting movies, in path order.
    pub fn movie_labels(&self, graph: &ActorGraph) -> Vec<String> {
        self.steps
            .iter()
            .filter_map(|step| step.via)
            .map(|movie| graph.movie(movie).label())
            .collect()
    }
}

/// Follows predecessor links from `target` back to `start`. Each step is
/// paired with the cheapest movie linking it to the previous actor.
///
/// Returns `None` when `target` was never reached or the chain does not lead
/// back to `start`.
pub fn reconstruct_path(
    graph: &ActorGraph,
    state: &TraversalState,
    start: ActorId,
    target: ActorId,
) -> Option<ActorPath> {
    if !state.is_reached(target) {
        return None;
    }

    let mut steps = Vec::new();
    let mut total_weight = 0u64;
    let mut current = target;

    while current != start {
        if steps.len() >= graph.actor_count() {
            return None;
        }
        let previous = state.predecessor[current.index()]?;
        let edge = graph.edge(previous, current)?;
        steps.push(PathStep {
            actor: current,
            via: Some(edge.movie),
        });
        total_weight = total_weight.saturating_add(edge.weight);
        current = previous;
    }

    steps.push(PathStep {
        actor: start,
        via: None,
    });
    steps.reverse();

    Some(ActorPath {
        steps,
        total_weight,
    })
}
