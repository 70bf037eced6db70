use crate::connectivity::DisjointSet;
use crate::graph::ActorGraph;
use crate::model::MovieId;
use crate::queue::KeyedMinQueue;
use tracing::trace;

type ScheduledMovie = (i32, MovieId);

fn release_year(entry: &ScheduledMovie) -> i32 {
    entry.0
}

/// What a reveal does with each movie of the year.
pub enum RevealMode<'a> {
    /// Merge the cast into the disjoint sets. The sets must hold exactly one
    /// element per actor of the graph being revealed.
    Connectivity(&'a mut DisjointSet),
    /// Add the cast's pairwise edges to the graph adjacency.
    EdgeBuilding,
}

/// Movies ordered by release year. Movies sharing a year are revealed in
/// ingestion order.
pub struct YearSchedule {
    pending: KeyedMinQueue<ScheduledMovie, i32, fn(&ScheduledMovie) -> i32>,
    current_year: Option<i32>,
}

impl YearSchedule {
    pub fn new(graph: &ActorGraph) -> Self {
        let mut schedule = Self {
            pending: KeyedMinQueue::new(release_year as fn(&ScheduledMovie) -> i32),
            current_year: None,
        };
        schedule.reset(graph);
        schedule
    }

    /// Refills the ordering with every movie of `graph`.
    pub fn reset(&mut self, graph: &ActorGraph) {
        self.pending.clear();
        for (movie_id, movie) in graph.movies() {
            self.pending.push((movie.year, movie_id));
        }
        self.current_year = None;
    }

    /// Processes every movie of the earliest pending year and returns that
    /// year, or `None` once the ordering is exhausted.
    pub fn reveal_next_year(&mut self, graph: &mut ActorGraph, mut mode: RevealMode<'_>) -> Option<i32> {
        let year = *self.pending.peek_key()?;
        match &mode {
            RevealMode::Connectivity(sets) => debug_assert_eq!(
                sets.len(),
                graph.actor_count(),
                "disjoint sets must be sized to the graph's actors"
            ),
            RevealMode::EdgeBuilding => graph.mark_incremental(),
        }

        let mut revealed = 0usize;
        while self.pending.peek_key() == Some(&year) {
            let Some((_, movie_id)) = self.pending.pop() else {
                break;
            };
            match &mut mode {
                RevealMode::Connectivity(sets) => sets.merge_cast(graph.movie(movie_id).cast()),
                RevealMode::EdgeBuilding => graph.connect_movie(movie_id),
            }
            revealed += 1;
        }

        trace!(year, movies = revealed, "revealed year");
        self.current_year = Some(year);
        Some(year)
    }

    /// Year processed by the last successful reveal.
    pub fn current_year(&self) -> Option<i32> {
        self.current_year
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn remaining_movies(&self) -> usize {
        self.pending.len()
    }
}
