//! Graph configuration.

/// Which part of the graph `has_cycle` inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleScope {
    /// Search only the component containing the first vertex (insertion order).
    #[default]
    FirstVertex,
    /// Restart the search from every vertex not yet reached.
    AllComponents,
}

/// How query entry points treat handles outside the vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MembershipPolicy {
    /// Any node stored in the graph may start or end a query, member or not.
    #[default]
    Permissive,
    /// Start and end handles must be members of the vertex set.
    Strict,
}

/// Behavioral settings carried by a [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Scope of cycle detection.
    pub cycle_scope: CycleScope,
    /// Membership check applied to query handles.
    pub membership: MembershipPolicy,
    /// Initial node capacity to reserve.
    pub capacity: usize,
}

impl GraphConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cycle detection scope.
    pub fn cycle_scope(mut self, scope: CycleScope) -> Self {
        self.cycle_scope = scope;
        self
    }

    /// Set the membership policy for query handles.
    pub fn membership(mut self, policy: MembershipPolicy) -> Self {
        self.membership = policy;
        self
    }

    /// Reserve room for `capacity` nodes up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
