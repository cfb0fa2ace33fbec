//! Frontier (open-set) policies.
//!
//! A [`Frontier`] holds discovered-but-not-yet-expanded cells and decides
//! which one the search expands next. It never deduplicates: the search
//! engine only admits cells it has not discovered before.
//!
//! | Policy | Structure | Next cell |
//! |---|---|---|
//! | [`BfsFrontier`] | FIFO queue | oldest admitted |
//! | [`DfsFrontier`] | LIFO stack | newest admitted |
//! | [`RandomFrontier`] | bag | uniform random pick |
//! | [`GreedyFrontier`] | min-heap | lowest Manhattan distance to goal |
//! | [`AStarFrontier`] | min-heap | lowest distance-so-far + Manhattan, then shallowest |
//!
//! Heap policies break remaining ties by admission order, so every policy
//! except [`RandomFrontier`] is fully deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use mazer_core::Point;
use rand::{Rng, RngExt};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;

/// Open-set policy driven by the search engine.
pub trait Frontier {
    /// Record `p`, discovered `dist` steps from the start, for later
    /// expansion.
    fn admit(&mut self, p: Point, dist: u32);

    /// Remove and return the next cell to expand, or `None` when empty.
    fn select(&mut self) -> Option<Point>;

    /// Number of cells waiting for expansion.
    fn len(&self) -> usize;

    /// Whether no cells are waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Queue / stack / bag
// ---------------------------------------------------------------------------

/// Breadth-first policy: expands cells in admission order.
#[derive(Debug, Clone, Default)]
pub struct BfsFrontier {
    queue: VecDeque<Point>,
}

impl BfsFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for BfsFrontier {
    fn admit(&mut self, p: Point, _dist: u32) {
        self.queue.push_back(p);
    }

    fn select(&mut self) -> Option<Point> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Depth-first policy: expands the most recently admitted cell.
#[derive(Debug, Clone, Default)]
pub struct DfsFrontier {
    stack: Vec<Point>,
}

impl DfsFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for DfsFrontier {
    fn admit(&mut self, p: Point, _dist: u32) {
        self.stack.push(p);
    }

    fn select(&mut self) -> Option<Point> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Random policy: every waiting cell is equally likely to be expanded next.
///
/// The random source is injected so runs can be reproduced with a seeded
/// generator.
#[derive(Debug, Clone)]
pub struct RandomFrontier<R> {
    bag: Vec<Point>,
    rng: R,
}

impl<R: Rng> RandomFrontier<R> {
    pub fn new(rng: R) -> Self {
        Self {
            bag: Vec::new(),
            rng,
        }
    }
}

impl<R: Rng> Frontier for RandomFrontier<R> {
    fn admit(&mut self, p: Point, _dist: u32) {
        self.bag.push(p);
    }

    fn select(&mut self) -> Option<Point> {
        if self.bag.is_empty() {
            return None;
        }
        let i = self.rng.random_range(0..self.bag.len());
        Some(self.bag.swap_remove(i))
    }

    fn len(&self) -> usize {
        self.bag.len()
    }
}

// ---------------------------------------------------------------------------
// Scored policies
// ---------------------------------------------------------------------------

/// A heap entry. Ordered by ascending `score`, then ascending `depth`, then
/// ascending admission sequence.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    score: u32,
    depth: u32,
    seq: u64,
    pos: Point,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.depth.cmp(&other.depth))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Lowest-candidate-first heap shared by the greedy and A* policies.
#[derive(Debug, Clone, Default)]
struct MinHeap {
    heap: BinaryHeap<Reverse<Candidate>>,
    next_seq: u64,
}

impl MinHeap {
    fn push(&mut self, pos: Point, score: u32, depth: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Candidate {
            score,
            depth,
            seq,
            pos,
        }));
    }

    fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|Reverse(c)| c.pos)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Greedy best-first policy: expands the cell closest to the goal by
/// Manhattan distance, ignoring the cost paid so far.
#[derive(Debug, Clone)]
pub struct GreedyFrontier {
    goal: Point,
    heap: MinHeap,
}

impl GreedyFrontier {
    pub fn new(goal: Point) -> Self {
        Self {
            goal,
            heap: MinHeap::default(),
        }
    }
}

impl Frontier for GreedyFrontier {
    fn admit(&mut self, p: Point, _dist: u32) {
        // Heuristic only; ties fall back to admission order.
        self.heap.push(p, manhattan(p, self.goal), 0);
    }

    fn select(&mut self) -> Option<Point> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// A* policy: expands the cell with the lowest `dist + manhattan(cell, goal)`.
///
/// Among equal scores the cell nearer the start wins. Together with the
/// consistent heuristic this keeps every recorded distance minimal even
/// though the engine never revises a discovered cell.
#[derive(Debug, Clone)]
pub struct AStarFrontier {
    goal: Point,
    heap: MinHeap,
}

impl AStarFrontier {
    pub fn new(goal: Point) -> Self {
        Self {
            goal,
            heap: MinHeap::default(),
        }
    }
}

impl Frontier for AStarFrontier {
    fn admit(&mut self, p: Point, dist: u32) {
        self.heap.push(p, dist + manhattan(p, self.goal), dist);
    }

    fn select(&mut self) -> Option<Point> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

// ---------------------------------------------------------------------------
// Runtime selection
// ---------------------------------------------------------------------------

/// Any of the five policies, chosen at runtime from an [`Algorithm`].
#[derive(Debug, Clone)]
pub enum AnyFrontier<R> {
    Bfs(BfsFrontier),
    Dfs(DfsFrontier),
    Random(RandomFrontier<R>),
    Greedy(GreedyFrontier),
    AStar(AStarFrontier),
}

impl<R: Rng> AnyFrontier<R> {
    /// Build the policy for `algorithm`. `goal` feeds the heuristic policies
    /// and `rng` the random one; the others ignore them.
    pub fn new(algorithm: Algorithm, goal: Point, rng: R) -> Self {
        match algorithm {
            Algorithm::Bfs => Self::Bfs(BfsFrontier::new()),
            Algorithm::Dfs => Self::Dfs(DfsFrontier::new()),
            Algorithm::Random => Self::Random(RandomFrontier::new(rng)),
            Algorithm::Greedy => Self::Greedy(GreedyFrontier::new(goal)),
            Algorithm::AStar => Self::AStar(AStarFrontier::new(goal)),
        }
    }

    /// The algorithm this frontier implements.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bfs(_) => Algorithm::Bfs,
            Self::Dfs(_) => Algorithm::Dfs,
            Self::Random(_) => Algorithm::Random,
            Self::Greedy(_) => Algorithm::Greedy,
            Self::AStar(_) => Algorithm::AStar,
        }
    }
}

impl<R: Rng> Frontier for AnyFrontier<R> {
    fn admit(&mut self, p: Point, dist: u32) {
        match self {
            Self::Bfs(f) => f.admit(p, dist),
            Self::Dfs(f) => f.admit(p, dist),
            Self::Random(f) => f.admit(p, dist),
            Self::Greedy(f) => f.admit(p, dist),
            Self::AStar(f) => f.admit(p, dist),
        }
    }

    fn select(&mut self) -> Option<Point> {
        match self {
            Self::Bfs(f) => f.select(),
            Self::Dfs(f) => f.select(),
            Self::Random(f) => f.select(),
            Self::Greedy(f) => f.select(),
            Self::AStar(f) => f.select(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Bfs(f) => f.len(),
            Self::Dfs(f) => f.len(),
            Self::Random(f) => f.len(),
            Self::Greedy(f) => f.len(),
            Self::AStar(f) => f.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn drain(f: &mut impl Frontier) -> Vec<Point> {
        std::iter::from_fn(|| f.select()).collect()
    }

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn bfs_is_fifo() {
        let mut f = BfsFrontier::new();
        f.admit(p(0, 0), 0);
        f.admit(p(1, 0), 1);
        f.admit(p(2, 0), 1);
        assert_eq!(f.len(), 3);
        assert_eq!(drain(&mut f), vec![p(0, 0), p(1, 0), p(2, 0)]);
        assert!(f.is_empty());
    }

    #[test]
    fn dfs_is_lifo() {
        let mut f = DfsFrontier::new();
        f.admit(p(0, 0), 0);
        f.admit(p(1, 0), 1);
        f.admit(p(2, 0), 1);
        assert_eq!(drain(&mut f), vec![p(2, 0), p(1, 0), p(0, 0)]);
    }

    #[test]
    fn empty_frontiers_select_none() {
        let goal = p(3, 3);
        for a in Algorithm::ALL {
            let mut f = AnyFrontier::new(a, goal, StdRng::seed_from_u64(1));
            assert!(f.is_empty(), "{a}");
            assert_eq!(f.select(), None, "{a}");
        }
    }

    #[test]
    fn random_returns_every_cell_once() {
        let mut f = RandomFrontier::new(StdRng::seed_from_u64(7));
        let cells: Vec<_> = (0..20).map(|i| p(i, 0)).collect();
        for &c in &cells {
            f.admit(c, 0);
        }
        let mut out = drain(&mut f);
        out.sort();
        assert_eq!(out, cells);
    }

    #[test]
    fn random_is_reproducible_with_same_seed() {
        let run = |seed| {
            let mut f = RandomFrontier::new(StdRng::seed_from_u64(seed));
            for i in 0..10 {
                f.admit(p(i, i), 0);
            }
            drain(&mut f)
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn greedy_ignores_distance_so_far() {
        let goal = p(10, 0);
        let mut f = GreedyFrontier::new(goal);
        f.admit(p(0, 0), 0); // h = 10
        f.admit(p(9, 5), 50); // h = 6
        f.admit(p(8, 0), 99); // h = 2
        assert_eq!(drain(&mut f), vec![p(8, 0), p(9, 5), p(0, 0)]);
    }

    #[test]
    fn greedy_ties_fall_back_to_admission_order() {
        let goal = p(0, 0);
        let mut f = GreedyFrontier::new(goal);
        f.admit(p(0, 2), 5);
        f.admit(p(2, 0), 1);
        f.admit(p(1, 1), 3);
        assert_eq!(drain(&mut f), vec![p(0, 2), p(2, 0), p(1, 1)]);
    }

    #[test]
    fn astar_orders_by_cost_plus_heuristic() {
        let goal = p(5, 0);
        let mut f = AStarFrontier::new(goal);
        f.admit(p(4, 0), 10); // 10 + 1 = 11
        f.admit(p(0, 0), 0); // 0 + 5 = 5
        f.admit(p(3, 3), 1); // 1 + 5 = 6
        assert_eq!(drain(&mut f), vec![p(0, 0), p(3, 3), p(4, 0)]);
    }

    #[test]
    fn astar_prefers_shallower_cell_on_equal_score() {
        let goal = p(4, 0);
        let mut f = AStarFrontier::new(goal);
        f.admit(p(2, 0), 4); // 4 + 2 = 6
        f.admit(p(0, 0), 2); // 2 + 4 = 6
        f.admit(p(1, 0), 3); // 3 + 3 = 6
        f.admit(p(3, 0), 3); // 3 + 1 = 4
        assert_eq!(drain(&mut f), vec![p(3, 0), p(0, 0), p(1, 0), p(2, 0)]);
    }

    #[test]
    fn factory_matches_algorithm() {
        for a in Algorithm::ALL {
            let f = AnyFrontier::new(a, p(0, 0), StdRng::seed_from_u64(0));
            assert_eq!(f.algorithm(), a);
        }
    }
}
