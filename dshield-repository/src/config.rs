//! Configuration types for the MockDataService.

/// Configuration for the Napoleon job tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobTrackerConfig {
    /// Upper bound on retained jobs.
    ///
    /// When a new job would exceed the bound, completed jobs are evicted in the
    /// order they completed. Jobs that are still queued or running are never
    /// evicted, so the bound can be overshot while every retained job is active.
    /// `None` (the default) retains every job for the life of the service.
    pub max_retained_jobs: Option<usize>,
}

impl JobTrackerConfig {
    /// Create a config that retains at most `max_retained_jobs` jobs.
    pub fn with_max_retained_jobs(max_retained_jobs: usize) -> Self {
        Self {
            max_retained_jobs: Some(max_retained_jobs),
        }
    }
}

/// Configuration for the MockDataService.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockDataConfig {
    pub jobs: JobTrackerConfig,
}
