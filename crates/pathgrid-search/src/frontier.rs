use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pathgrid_core::Pos;

use crate::engine::Cost;

/// A queued candidate, ordered by `(priority, seq, pos)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierEntry {
    /// Estimated total cost through this cell at the time it was pushed.
    pub priority: Cost,
    /// Insertion sequence number; lower wins among equal priorities.
    pub seq: u64,
    pub pos: Pos,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with insertion-order tie-breaking.
///
/// Every push takes the next sequence number, so among entries of equal
/// priority the one pushed first pops first, and two runs over the same
/// input pop in the same order. Membership is not tracked here; the same
/// position may be queued more than once and callers discard stale entries.
#[derive(Debug, Default)]
pub struct FrontierQueue {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl FrontierQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `pos` with `priority`, returning the sequence number assigned.
    pub fn push(&mut self, pos: Pos, priority: Cost) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { priority, seq, pos });
        seq
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every entry and restart sequence numbering at 0.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}
