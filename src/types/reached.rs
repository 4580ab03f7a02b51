//! Traversal outputs: reached sets and BFS levels.

use super::NodeId;

/// The set of nodes reached by a traversal, over a universe of `N` nodes.
///
/// Equality compares membership only, so sets produced by different
/// traversal orders compare equal when they reach the same nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachedSet {
    members: Vec<bool>,
    len: usize,
}

impl ReachedSet {
    /// Build from one flag per node.
    pub fn from_flags(members: Vec<bool>) -> Self {
        let len = members.iter().filter(|&&m| m).count();
        Self { members, len }
    }

    /// Build from an explicit node list over a universe of `node_count` nodes.
    /// Ids outside the universe are ignored.
    pub fn from_nodes(node_count: usize, nodes: &[NodeId]) -> Self {
        let mut members = vec![false; node_count];
        for &n in nodes {
            if let Some(slot) = members.get_mut(n as usize) {
                *slot = true;
            }
        }
        Self::from_flags(members)
    }

    /// Whether `node` was reached.
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.get(node as usize).copied().unwrap_or(false)
    }

    /// Number of reached nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing was reached.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the node universe this set was computed over.
    pub fn node_count(&self) -> usize {
        self.members.len()
    }

    /// Reached nodes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, &m)| m)
            .map(|(i, _)| i as NodeId)
    }

    /// Reached nodes as a sorted vector.
    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }

    /// True when every node in `self` is also in `other`.
    pub fn is_subset(&self, other: &ReachedSet) -> bool {
        self.iter().all(|n| other.contains(n))
    }
}

/// Nodes grouped by the BFS level at which they were claimed.
///
/// Level 0 holds only the start node. Order inside a level is whatever
/// the workers produced and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Levels {
    levels: Vec<Vec<NodeId>>,
}

impl Levels {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, level: Vec<NodeId>) {
        self.levels.push(level);
    }

    /// Number of non-empty levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Nodes claimed at level `index`.
    pub fn level(&self, index: usize) -> Option<&[NodeId]> {
        self.levels.get(index).map(|l| l.as_slice())
    }

    /// Nodes claimed at level `index`, sorted by id.
    pub fn sorted_level(&self, index: usize) -> Vec<NodeId> {
        let mut level = self.level(index).map(<[NodeId]>::to_vec).unwrap_or_default();
        level.sort_unstable();
        level
    }

    /// Iterate levels in order.
    pub fn iter(&self) -> impl Iterator<Item = &[NodeId]> {
        self.levels.iter().map(|l| l.as_slice())
    }

    /// Size of every level, in order.
    pub fn sizes(&self) -> Vec<usize> {
        self.levels.iter().map(Vec::len).collect()
    }

    /// Total number of claimed nodes across all levels.
    pub fn total(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Collapse into a reached set over `node_count` nodes.
    pub fn to_reached(&self, node_count: usize) -> ReachedSet {
        let mut members = vec![false; node_count];
        for &n in self.levels.iter().flatten() {
            members[n as usize] = true;
        }
        ReachedSet::from_flags(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reached_set_membership() {
        let set = ReachedSet::from_nodes(5, &[4, 0, 2, 2]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(0));
        assert!(!set.contains(1));
        assert!(!set.contains(99));
        assert_eq!(set.to_vec(), vec![0, 2, 4]);
        assert_eq!(set.node_count(), 5);
    }

    #[test]
    fn test_subset() {
        let small = ReachedSet::from_nodes(4, &[1]);
        let big = ReachedSet::from_nodes(4, &[0, 1, 3]);
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
    }

    #[test]
    fn test_levels_accounting() {
        let mut levels = Levels::new();
        levels.push(vec![0]);
        levels.push(vec![2, 1]);
        assert_eq!(levels.depth(), 2);
        assert_eq!(levels.sizes(), vec![1, 2]);
        assert_eq!(levels.total(), 3);
        assert_eq!(levels.sorted_level(1), vec![1, 2]);
        assert!(levels.level(2).is_none());
        assert_eq!(levels.to_reached(3).to_vec(), vec![0, 1, 2]);
    }
}
