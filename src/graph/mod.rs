//! In-memory graph store, generators and visitation trackers.

pub mod builder;
pub mod generate;
pub mod store;
pub mod tracker;

pub use builder::GraphBuilder;
pub use generate::{generate, Shape};
pub use store::Graph;
pub use tracker::{AtomicVisitTracker, VisitMarks};
