//! Napoleon research job types.
//!
//! A job moves linearly through `queued -> running -> completed`. Progress is
//! poll-driven: each call to [`Job::advance`] moves the job one step forward,
//! there is no background work behind it.

use serde::{Deserialize, Serialize};

/// Activity lines appended one per advance, in order.
pub const JOB_STEP_MESSAGES: [&str; 4] = [
    "Dispatching research agents",
    "Collecting sources",
    "Synthesizing findings",
    "Compiling report",
];

/// Report location attached to every completed job.
pub const REPORT_URL: &str = "/mock/reports/sample.pdf";

/// Progress added by a single advance.
const PROGRESS_STEP: u8 = 25;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
}

/// A simulated research job and its progress record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub job_id: String,
    pub status: JobStatus,
    /// Percentage in `0..=100`.
    pub progress: u8,
    pub activity: Vec<String>,
    #[serde(default)]
    pub report_url: Option<String>,
}

impl Job {
    /// Create a queued job for the given person of interest.
    pub fn queued(job_id: impl Into<String>, poi: &str) -> Self {
        Self {
            job_id: job_id.into(),
            status: JobStatus::Queued,
            progress: 0,
            activity: vec![format!("Queued job for {}", poi)],
            report_url: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }

    /// Move the job one step forward.
    ///
    /// Progress grows by 25 (capped at 100), the status becomes `running` or,
    /// once progress reaches 100, `completed`. The next step message is
    /// appended while the activity log has not yet emitted all of them.
    /// Completed jobs are left untouched.
    ///
    /// Returns `true` if the job changed.
    pub fn advance(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }

        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(100);
        self.status = if self.progress < 100 {
            JobStatus::Running
        } else {
            JobStatus::Completed
        };

        // The first activity line is the queue message, so steps are offset by one.
        let step = self.activity.len().saturating_sub(1);
        if let Some(message) = JOB_STEP_MESSAGES.get(step) {
            self.activity.push(message.to_string());
        }

        if self.is_completed() {
            self.report_url = Some(REPORT_URL.to_string());
        }

        true
    }
}

/// Body of `POST /api/napoleon/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub poi: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_job() {
        let job = Job::queued("abc", "Acme Corp");
        assert_eq!(job.status, JobStatus::Queued);
        assert_eq!(job.progress, 0);
        assert_eq!(job.activity, vec!["Queued job for Acme Corp".to_string()]);
        assert!(job.report_url.is_none());
    }

    #[test]
    fn test_advance_walks_all_steps() {
        let mut job = Job::queued("abc", "Acme Corp");

        let mut progress = Vec::new();
        let mut statuses = Vec::new();
        for _ in 0..4 {
            assert!(job.advance());
            progress.push(job.progress);
            statuses.push(job.status);
        }

        assert_eq!(progress, vec![25, 50, 75, 100]);
        assert_eq!(
            statuses,
            vec![
                JobStatus::Running,
                JobStatus::Running,
                JobStatus::Running,
                JobStatus::Completed
            ]
        );
        assert_eq!(job.activity.len(), 5);
        assert_eq!(job.activity[1..], JOB_STEP_MESSAGES.map(String::from));
        assert_eq!(job.report_url.as_deref(), Some(REPORT_URL));
    }

    #[test]
    fn test_report_url_only_set_on_completion() {
        let mut job = Job::queued("abc", "Acme Corp");
        for _ in 0..3 {
            job.advance();
            assert!(job.report_url.is_none());
        }
        job.advance();
        assert!(job.report_url.is_some());
    }

    #[test]
    fn test_completed_job_is_unchanged() {
        let mut job = Job::queued("abc", "Acme Corp");
        for _ in 0..4 {
            job.advance();
        }
        let snapshot = job.clone();

        assert!(!job.advance());
        assert_eq!(job, snapshot);
    }

    #[test]
    fn test_no_message_past_end_of_steps() {
        // A job whose log already holds every step message gains no new line.
        let mut job = Job::queued("abc", "Acme Corp");
        job.activity
            .extend(JOB_STEP_MESSAGES.iter().map(|m| m.to_string()));
        job.advance();
        assert_eq!(job.activity.len(), 5);
        assert_eq!(job.progress, 25);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let job = Job::queued("abc", "Acme Corp");
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["status"], "queued");
        assert!(json["report_url"].is_null());
    }
}
