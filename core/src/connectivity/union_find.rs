use crate::model::ActorId;

/// Disjoint sets over actor indices, union by size.
///
/// Union by size keeps every tree logarithmic in depth, so `find` walks
/// parent links without compressing them and stays usable through `&self`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Every actor starts as its own root with size one.
    pub fn new(actor_count: usize) -> Self {
        Self {
            parent: (0..actor_count as u32).collect(),
            size: vec![1; actor_count],
        }
    }

    pub fn find(&self, actor: ActorId) -> ActorId {
        let mut current = actor.0;
        while self.parent[current as usize] != current {
            current = self.parent[current as usize];
        }
        ActorId(current)
    }

    /// Attaches the smaller tree's root under the larger one. Equal sizes
    /// attach `first`'s root under `second`'s. No-op when already joined.
    pub fn merge(&mut self, first: ActorId, second: ActorId) -> bool {
        let first_root = self.find(first).index();
        let second_root = self.find(second).index();
        if first_root == second_root {
            return false;
        }

        let (child, root) = if self.size[first_root] > self.size[second_root] {
            (second_root, first_root)
        } else {
            (first_root, second_root)
        };
        self.parent[child] = root as u32;
        self.size[root] += self.size[child];
        true
    }

    /// Merges every pair of a movie's cast.
    pub fn merge_cast(&mut self, cast: &[ActorId]) {
        // Joining each member to the first is equivalent to joining every pair.
        if let Some((&first, rest)) = cast.split_first() {
            for &member in rest {
                self.merge(first, member);
            }
        }
    }

    pub fn connected(&self, first: ActorId, second: ActorId) -> bool {
        self.find(first) == self.find(second)
    }

    /// Number of actors in the set containing `actor`.
    pub fn set_size(&self, actor: ActorId) -> usize {
        self.size[self.find(actor).index()]
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
