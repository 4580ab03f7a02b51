//! Visitation trackers: one flag per node.
//!
//! [`VisitMarks`] is for single-threaded traversals and needs `&mut` access.
//! [`AtomicVisitTracker`] is shared across workers; it offers an atomic
//! claim (one `swap` per node) and, separately, an unsynchronized
//! check/mark pair that reproduces the classic check-then-set race.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::types::{NodeId, ReachedSet};

/// Exclusive visitation flags for sequential traversals.
#[derive(Debug, Clone)]
pub struct VisitMarks {
    marks: Vec<bool>,
}

impl VisitMarks {
    /// All nodes unvisited.
    pub fn new(node_count: usize) -> Self {
        Self {
            marks: vec![false; node_count],
        }
    }

    /// Mark `node`; returns true if it was previously unvisited.
    pub fn mark(&mut self, node: NodeId) -> bool {
        let slot = &mut self.marks[node as usize];
        let fresh = !*slot;
        *slot = true;
        fresh
    }

    /// Whether `node` has been marked.
    pub fn is_marked(&self, node: NodeId) -> bool {
        self.marks[node as usize]
    }

    /// Consume into a reached set.
    pub fn into_reached(self) -> ReachedSet {
        ReachedSet::from_flags(self.marks)
    }
}

/// Shared visitation flags backed by a fixed array of atomics.
#[derive(Debug)]
pub struct AtomicVisitTracker {
    flags: Box<[AtomicBool]>,
}

impl AtomicVisitTracker {
    /// All nodes unvisited.
    pub fn new(node_count: usize) -> Self {
        Self {
            flags: (0..node_count).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    /// Number of flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// True when tracking zero nodes.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Atomically claim `node`.
    ///
    /// Returns true for exactly one caller per node, however many threads
    /// race on it. The `AcqRel` swap orders the claim before anything the
    /// winner does afterwards, including publishing the node to a frontier.
    pub fn claim(&self, node: NodeId) -> bool {
        !self.flags[node as usize].swap(true, Ordering::AcqRel)
    }

    /// Whether `node` is claimed, with acquire ordering.
    pub fn is_marked(&self, node: NodeId) -> bool {
        self.flags[node as usize].load(Ordering::Acquire)
    }

    /// Unsynchronized read of the flag.
    ///
    /// Combined with [`AtomicVisitTracker::mark_unsynchronized`] this is a
    /// check-then-set that is NOT atomic: two threads can both read `false`
    /// and both go on to treat the node as new.
    pub fn peek_unsynchronized(&self, node: NodeId) -> bool {
        self.flags[node as usize].load(Ordering::Relaxed)
    }

    /// Unsynchronized write of the flag. See [`AtomicVisitTracker::peek_unsynchronized`].
    pub fn mark_unsynchronized(&self, node: NodeId) {
        self.flags[node as usize].store(true, Ordering::Relaxed);
    }

    /// Number of set flags.
    pub fn marked_count(&self) -> usize {
        self.flags
            .iter()
            .filter(|f| f.load(Ordering::Acquire))
            .count()
    }

    /// Copy the current flags into a reached set.
    pub fn snapshot(&self) -> ReachedSet {
        ReachedSet::from_flags(
            self.flags
                .iter()
                .map(|f| f.load(Ordering::Acquire))
                .collect(),
        )
    }

    /// Consume into a reached set.
    pub fn into_reached(self) -> ReachedSet {
        ReachedSet::from_flags(
            self.flags
                .into_vec()
                .into_iter()
                .map(AtomicBool::into_inner)
                .collect(),
        )
    }
}
