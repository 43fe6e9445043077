//! Frontier structures for the solvers. The A* frontier is a binary heap of holders ordered on
//! `(estimated cost, insertion sequence)` only, so the positions stored in it never have to be
//! compared with each other.
use fxhash::FxHashMap;
use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

pub(crate) struct SmallestCostHolder<K> {
    pub estimated_cost: K,
    pub sequence: usize,
    pub node: Point,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: smallest estimate first, then the earliest insertion
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Priority frontier with the current key of every position pending expansion. Pushing a pending
/// position again refreshes its key; the outdated heap entry is dropped when it surfaces.
pub(crate) struct OpenSet<K> {
    heap: BinaryHeap<SmallestCostHolder<K>>,
    pending: FxHashMap<Point, K>,
    count: usize,
}

impl<K: Ord + Copy> OpenSet<K> {
    pub fn new() -> OpenSet<K> {
        OpenSet {
            heap: BinaryHeap::new(),
            pending: FxHashMap::default(),
            count: 0,
        }
    }
    /// Pushes `node` with the next sequence number. Returns `true` if the node was not already
    /// pending.
    pub fn push(&mut self, node: Point, estimated_cost: K) -> bool {
        let sequence = self.count;
        self.count += 1;
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            sequence,
            node,
        });
        self.pending.insert(node, estimated_cost).is_none()
    }
    /// Pops the pending entry with the smallest `(estimated_cost, sequence)`.
    pub fn pop(&mut self) -> Option<(Point, K)> {
        while let Some(holder) = self.heap.pop() {
            if self.pending.get(&holder.node) == Some(&holder.estimated_cost) {
                self.pending.remove(&holder.node);
                return Some((holder.node, holder.estimated_cost));
            }
        }
        None
    }
    /// Number of pending positions.
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
