pub mod forget;
pub mod graph;
pub mod stats;
pub mod store;
pub mod types;
