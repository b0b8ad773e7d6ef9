//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod config;
pub mod cycle;
pub mod path;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use config::{CycleScope, GraphConfig, MembershipPolicy};
pub use cycle::{has_cycle, has_cycle_from};
pub use path::shortest_path;
pub use traversal::{breadth_first, depth_first, traverse, TraversalOrder};
pub use undirected::Graph;
