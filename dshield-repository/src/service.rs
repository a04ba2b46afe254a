//! Application state for the D-Shield mock API.
//!
//! `MockDataService` owns every fixture store. It is constructed explicitly and
//! handed to the request layer, so each instance (and each test) gets its own
//! isolated copy of the demo data.

use dshield_shared::SolutionItem;
use tracing::info;

use crate::config::MockDataConfig;
use crate::fixtures;
use crate::stores::{EntityStore, FeedStore, GraphStore, JobTracker};
use crate::utils::unix_now;

/// Owner of the four demo stores and the solutions catalog.
///
/// # Example
///
/// ```
/// use dshield_repository::MockDataService;
///
/// # async fn example() {
/// let service = MockDataService::new();
/// let job = service.jobs().run("Acme Corp").await;
/// let polled = service.jobs().get_status(&job.job_id).await.unwrap();
/// assert_eq!(polled.progress, 25);
/// # }
/// ```
pub struct MockDataService {
    solutions: Vec<SolutionItem>,
    entities: EntityStore,
    feed: FeedStore,
    jobs: JobTracker,
    graph: GraphStore,
}

impl MockDataService {
    /// Create a service seeded with the demo fixtures and default configuration.
    pub fn new() -> Self {
        Self::with_config(MockDataConfig::default())
    }

    /// Create a service seeded with the demo fixtures.
    ///
    /// Feed posts are dated relative to the moment of construction.
    pub fn with_config(config: MockDataConfig) -> Self {
        let service = Self {
            solutions: fixtures::solutions(),
            entities: EntityStore::new(fixtures::entities()),
            feed: FeedStore::new(fixtures::posts(unix_now())),
            jobs: JobTracker::with_config(config.jobs.clone()),
            graph: GraphStore::new(fixtures::graph()),
        };

        info!(
            solutions = service.solutions.len(),
            posts = service.feed.len(),
            max_retained_jobs = ?config.jobs.max_retained_jobs,
            "Seeded mock data"
        );
        service
    }

    pub fn solutions(&self) -> &[SolutionItem] {
        &self.solutions
    }

    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    pub fn feed(&self) -> &FeedStore {
        &self.feed
    }

    pub fn jobs(&self) -> &JobTracker {
        &self.jobs
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }
}

impl Default for MockDataService {
    fn default() -> Self {
        Self::new()
    }
}
