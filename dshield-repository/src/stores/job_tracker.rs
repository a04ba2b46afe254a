//! Napoleon research job tracker.
//!
//! Jobs are advanced by reads: every status poll moves a job one step, and a
//! job that is never polled never progresses. This stands in for real
//! background research work.

use std::collections::{HashMap, VecDeque};

use dshield_shared::Job;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::JobTrackerConfig;
use crate::errors::MockDataError;
use crate::utils::random_hex;

/// Length of a generated job id, in hex characters.
const JOB_ID_LEN: usize = 10;

#[derive(Default)]
struct JobTable {
    jobs: HashMap<String, Job>,
    /// Ids of completed jobs, oldest completion first. Eviction order.
    completed: VecDeque<String>,
}

impl JobTable {
    fn fresh_id(&self) -> String {
        loop {
            let id = random_hex(JOB_ID_LEN);
            if !self.jobs.contains_key(&id) {
                return id;
            }
        }
    }

    /// Evict completed jobs until one more job fits under `max`.
    fn make_room(&mut self, max: usize) {
        while self.jobs.len() >= max {
            let Some(job_id) = self.completed.pop_front() else {
                break;
            };
            self.jobs.remove(&job_id);
            debug!(job_id = %job_id, "Evicted completed job");
        }
    }
}

/// Map from job id to its progress record.
pub struct JobTracker {
    table: RwLock<JobTable>,
    config: JobTrackerConfig,
}

impl JobTracker {
    /// Create a tracker that retains every job.
    pub fn new() -> Self {
        Self::with_config(JobTrackerConfig::default())
    }

    pub fn with_config(config: JobTrackerConfig) -> Self {
        Self {
            table: RwLock::new(JobTable::default()),
            config,
        }
    }

    /// Queue a research job for the given person of interest.
    pub async fn run(&self, poi: &str) -> Job {
        let mut table = self.table.write().await;
        if let Some(max) = self.config.max_retained_jobs {
            table.make_room(max);
        }

        let job = Job::queued(table.fresh_id(), poi);
        table.jobs.insert(job.job_id.clone(), job.clone());

        info!(job_id = %job.job_id, poi = %poi, "Queued research job");
        job
    }

    /// Return the job after advancing it one step.
    ///
    /// Completed jobs are returned unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(Job)` - The job as it stands after this poll
    /// * `Err(MockDataError::JobNotFound)` - If the id is unknown or was evicted
    pub async fn get_status(&self, job_id: &str) -> Result<Job, MockDataError> {
        let mut table = self.table.write().await;
        let job = table
            .jobs
            .get_mut(job_id)
            .ok_or_else(|| MockDataError::job_not_found(job_id))?;

        if !job.advance() {
            return Ok(job.clone());
        }

        debug!(
            job_id = %job_id,
            status = ?job.status,
            progress = job.progress,
            "Advanced research job"
        );

        let job = job.clone();
        if job.is_completed() {
            info!(job_id = %job_id, "Research job completed");
            table.completed.push_back(job.job_id.clone());
        }
        Ok(job)
    }

    /// Number of jobs currently retained.
    pub async fn len(&self) -> usize {
        self.table.read().await.jobs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dshield_shared::{JobStatus, REPORT_URL};
    use std::sync::Arc;

    async fn complete(tracker: &JobTracker, job_id: &str) {
        for _ in 0..4 {
            tracker.get_status(job_id).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_run_queues_job() {
        let tracker = JobTracker::new();
        let job = tracker.run("Acme Corp").await;

        assert_eq!(job.status, JobStatus::Queued);
        assert_eq!(job.progress, 0);
        assert_eq!(job.activity, vec!["Queued job for Acme Corp".to_string()]);
        assert_eq!(job.job_id.len(), JOB_ID_LEN);
        assert!(job.job_id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(tracker.len().await, 1);
    }

    #[tokio::test]
    async fn test_run_allocates_unique_ids() {
        let tracker = JobTracker::new();
        let first = tracker.run("a").await;
        let second = tracker.run("b").await;
        assert_ne!(first.job_id, second.job_id);
        assert_eq!(tracker.len().await, 2);
    }

    #[tokio::test]
    async fn test_polling_advances_one_step_per_call() {
        let tracker = JobTracker::new();
        let job = tracker.run("Acme Corp").await;

        let mut seen = Vec::new();
        for _ in 0..4 {
            let polled = tracker.get_status(&job.job_id).await.unwrap();
            seen.push((polled.progress, polled.status, polled.report_url.clone()));
        }

        assert_eq!(
            seen,
            vec![
                (25, JobStatus::Running, None),
                (50, JobStatus::Running, None),
                (75, JobStatus::Running, None),
                (100, JobStatus::Completed, Some(REPORT_URL.to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_completed_job_is_idempotent() {
        let tracker = JobTracker::new();
        let job = tracker.run("Acme Corp").await;
        complete(&tracker, &job.job_id).await;

        let fourth = tracker.get_status(&job.job_id).await;
        let fifth = tracker.get_status(&job.job_id).await;
        assert_eq!(fourth, fifth);
        assert_eq!(fifth.unwrap().activity.len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_job() {
        let tracker = JobTracker::new();
        let result = tracker.get_status("nope").await;
        assert_eq!(result, Err(MockDataError::job_not_found("nope")));
    }

    #[tokio::test]
    async fn test_jobs_progress_independently() {
        let tracker = JobTracker::new();
        let a = tracker.run("a").await;
        let b = tracker.run("b").await;

        tracker.get_status(&a.job_id).await.unwrap();
        tracker.get_status(&a.job_id).await.unwrap();
        let b_polled = tracker.get_status(&b.job_id).await.unwrap();

        assert_eq!(b_polled.progress, 25);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_polls_each_advance_once() {
        let tracker = Arc::new(JobTracker::new());
        let job = tracker.run("Acme Corp").await;

        let handles: Vec<_> = (0..3)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                let job_id = job.job_id.clone();
                tokio::spawn(async move { tracker.get_status(&job_id).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let polled = tracker.get_status(&job.job_id).await.unwrap();
        assert_eq!(polled.progress, 100);
        assert_eq!(polled.status, JobStatus::Completed);
        assert_eq!(polled.activity.len(), 5);
    }

    #[tokio::test]
    async fn test_retention_evicts_completed_jobs() {
        let tracker = JobTracker::with_config(JobTrackerConfig::with_max_retained_jobs(1));
        let first = tracker.run("a").await;
        complete(&tracker, &first.job_id).await;

        let second = tracker.run("b").await;
        assert_eq!(tracker.len().await, 1);
        assert_eq!(
            tracker.get_status(&first.job_id).await,
            Err(MockDataError::job_not_found(&first.job_id))
        );
        assert!(tracker.get_status(&second.job_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_retention_keeps_active_jobs() {
        let tracker = JobTracker::with_config(JobTrackerConfig::with_max_retained_jobs(1));
        let first = tracker.run("a").await;
        tracker.get_status(&first.job_id).await.unwrap();

        tracker.run("b").await;
        assert_eq!(tracker.len().await, 2);
        assert!(tracker.get_status(&first.job_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_retention_evicts_oldest_completion_first() {
        let tracker = JobTracker::with_config(JobTrackerConfig::with_max_retained_jobs(2));
        let first = tracker.run("a").await;
        let second = tracker.run("b").await;
        complete(&tracker, &second.job_id).await;
        complete(&tracker, &first.job_id).await;

        tracker.run("c").await;
        assert!(tracker.get_status(&second.job_id).await.is_err());
        assert!(tracker.get_status(&first.job_id).await.is_ok());
    }
}
