//! The traversal engine shared by every frontier policy.

use std::collections::BTreeMap;

use mazer_core::Point;

use crate::frontier::Frontier;
use crate::traits::Pather;

/// Hooks for watching a search unfold. All methods default to no-ops; `()`
/// is the silent observer.
pub trait SearchObserver {
    /// The search is about to expand from `start` towards `goal`. Not called
    /// when the two coincide.
    fn started(&mut self, _start: Point, _goal: Point) {}

    /// `p` was discovered and admitted to the frontier. Not reported for the
    /// goal, whose discovery ends the search.
    fn opened(&mut self, _p: Point) {}

    /// Every neighbor of `p` has been examined.
    fn closed(&mut self, _p: Point) {}
}

impl SearchObserver for () {}

/// Discovery bookkeeping of one search: the predecessor and distance maps.
///
/// Both maps gain exactly one entry per discovered cell, in lockstep, and
/// are never modified afterwards. The start is the only root; its
/// predecessor is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    pub(crate) start: Point,
    pub(crate) preds: BTreeMap<Point, Option<Point>>,
    pub(crate) dists: BTreeMap<Point, u32>,
}

impl SearchTree {
    fn rooted(start: Point) -> Self {
        Self {
            start,
            preds: BTreeMap::from([(start, None)]),
            dists: BTreeMap::from([(start, 0)]),
        }
    }

    /// Record `p` as reached from `from`, `dist` steps from the start.
    /// Returns `false` if `p` was already discovered (first discovery wins).
    fn discover(&mut self, p: Point, from: Point, dist: u32) -> bool {
        if self.preds.contains_key(&p) {
            return false;
        }
        self.preds.insert(p, Some(from));
        self.dists.insert(p, dist);
        true
    }

    /// The root of the tree.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Whether `p` was discovered.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.preds.contains_key(&p)
    }

    /// The cell that discovered `p`. `None` for the start and for cells
    /// that were never discovered.
    #[inline]
    pub fn parent(&self, p: Point) -> Option<Point> {
        self.preds.get(&p).copied().flatten()
    }

    /// Steps from the start at which `p` was discovered.
    #[inline]
    pub fn distance(&self, p: Point) -> Option<u32> {
        self.dists.get(&p).copied()
    }

    /// Number of discovered cells, the start included.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.preds.len()
    }

    /// The full predecessor map.
    pub fn predecessors(&self) -> &BTreeMap<Point, Option<Point>> {
        &self.preds
    }

    /// The full distance map.
    pub fn distances(&self) -> &BTreeMap<Point, u32> {
        &self.dists
    }
}

/// Explore from `start` until `goal` is discovered or `frontier` runs dry.
///
/// The frontier decides the expansion order; the engine owns discovery. For
/// every expanded cell, each neighbor reported by `pather` that has not been
/// discovered yet gets its predecessor and distance recorded and is admitted
/// to the frontier. The search stops as soon as the goal is *discovered*,
/// before it is ever selected, leaving the rest of the frontier unexpanded.
///
/// If the goal is unreachable the returned tree simply does not contain it.
pub fn search<P, F, O>(
    pather: &P,
    start: Point,
    goal: Point,
    frontier: &mut F,
    observer: &mut O,
) -> SearchTree
where
    P: Pather + ?Sized,
    F: Frontier + ?Sized,
    O: SearchObserver + ?Sized,
{
    let mut tree = SearchTree::rooted(start);
    if start == goal {
        return tree;
    }

    log::debug!("search {start} -> {goal}");
    observer.started(start, goal);
    frontier.admit(start, 0);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(cell) = frontier.select() {
        log::trace!("expand {cell} ({} waiting)", frontier.len());
        // Frontiers only ever hand back cells the engine admitted.
        let dist = tree.dists[&cell] + 1;
        nbuf.clear();
        pather.neighbors(cell, &mut nbuf);

        for &n in nbuf.iter() {
            if !tree.discover(n, cell, dist) {
                continue;
            }
            frontier.admit(n, dist);
            if n == goal {
                log::debug!(
                    "reached {goal} at distance {dist}, {} cells discovered",
                    tree.expanded()
                );
                return tree;
            }
            observer.opened(n);
        }

        observer.closed(cell);
    }

    log::debug!(
        "frontier exhausted, {} cells discovered, {goal} unreachable",
        tree.expanded()
    );
    tree
}
