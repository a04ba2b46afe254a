//! # D-Shield Repository
//!
//! In-memory fixture stores behind the D-Shield mock API. There is no real
//! persistence: every store is seeded from hardcoded demo data when a
//! [`MockDataService`] is constructed and lives as long as that service.
//!
//! ## Modules
//!
//! - [`stores`]: EmBrain entities, Social Dome feed, Napoleon jobs, relationship graph
//! - [`service`]: the application-state object owning all stores
//! - [`fixtures`]: the seeded demo data
//! - [`config`]: job retention configuration
//! - [`errors`]: the unified not-found error type

pub mod config;
pub mod errors;
pub mod fixtures;
pub mod service;
pub mod stores;
pub mod utils;

pub use config::{JobTrackerConfig, MockDataConfig};
pub use errors::MockDataError;
pub use service::MockDataService;
pub use stores::{EntityStore, FeedStore, GraphStore, JobTracker};
