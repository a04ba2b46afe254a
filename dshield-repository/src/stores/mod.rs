//! In-memory stores backing the four demo products.
//!
//! The stores are independent of each other. Mutable stores guard their
//! records with a `tokio::sync::RwLock`; every mutation holds the write lock
//! for its whole duration, so concurrent requests on the same id are applied
//! one at a time.

mod entity_store;
mod feed_store;
mod graph_store;
mod job_tracker;

pub use entity_store::EntityStore;
pub use feed_store::FeedStore;
pub use graph_store::GraphStore;
pub use job_tracker::JobTracker;
