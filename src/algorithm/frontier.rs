use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Candidate awaiting expansion
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    /// Ordering key (`g` for Dijkstra, `g + h` for A*)
    pub priority: f64,
    /// Cost-to-reach recorded when the entry was pushed
    pub cost: f64,
    /// Flat row-major cell index
    pub index: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// Max-heap ordering inverted on priority so the smallest key pops first.
// Equal keys prefer the deeper entry, then the lower cell index.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| self.cost.total_cmp(&other.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of search candidates
///
/// May hold several entries for one cell; the search discards the stale ones
/// when they surface.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate
    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
    }

    /// Remove the candidate with the smallest priority
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Test if no entries remain
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
