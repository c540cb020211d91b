//! Jobs: the recruiter's own postings, the public listing and job detail.

use super::StateCell;
use crate::api::ApiClient;
use crate::error::Result;
use hireboard_core::{
    sort_recruiter_jobs, ErrorPayload, Job, JobDraft, JobFilters, JobId, JobPage, JobUpdate,
    KeywordSuggestions, Prompt,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error};

/// Question asked before a job is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure? This will permanently delete this job.";

const LOAD_JOBS_FAILED: &str = "Failed to load jobs.";
const CREATE_JOB_FAILED: &str = "Failed to create job.";
const UPDATE_JOB_FAILED: &str = "Failed to update job";
const LOAD_JOB_FAILED: &str = "Failed to load job details";
const TOGGLE_FAILED_ALERT: &str = "Failed to update job status";
const DELETE_FAILED_ALERT: &str = "Failed to delete job.";
const KEYWORDS_FAILED: &str = "Failed to generate keywords.";

#[derive(Serialize)]
struct KeywordRequest<'a> {
    description: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobsState {
    pub loading: bool,
    pub error: Option<ErrorPayload>,

    /// Recruiter's own jobs: active first, newest first, except freshly
    /// created jobs which sit on top until the next fetch.
    pub jobs: Vec<Job>,

    /// Public listing, possibly accumulated over several pages
    pub public_jobs: Vec<Job>,
    pub total_jobs: u64,
    pub current_page: u32,
    pub total_pages: u32,

    /// Job detail slot, emptied whenever a new detail fetch starts
    pub current_job: Option<Job>,

    /// Keyword suggestion flags, independent of `loading` and `error`
    pub keywords_loading: bool,
    pub keywords_error: Option<ErrorPayload>,
}

impl Default for JobsState {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            jobs: Vec::new(),
            public_jobs: Vec::new(),
            total_jobs: 0,
            current_page: 1,
            total_pages: 0,
            current_job: None,
            keywords_loading: false,
            keywords_error: None,
        }
    }
}

/// Result of [`Jobs::delete_job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The job was deleted and dropped from the local list
    Deleted,
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// The backend refused or was unreachable; the user was alerted
    Failed,
}

pub struct Jobs {
    api: ApiClient,
    prompt: Arc<dyn Prompt>,
    state: StateCell<JobsState>,
}

impl Jobs {
    pub fn new(api: ApiClient, prompt: Arc<dyn Prompt>) -> Self {
        Self {
            api,
            prompt,
            state: StateCell::new(JobsState::default()),
        }
    }

    pub fn state(&self) -> JobsState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<JobsState> {
        self.state.subscribe()
    }

    fn begin(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn fail(&self, message: ErrorPayload) {
        self.state.update(|s| {
            s.loading = false;
            s.error = Some(message);
        });
    }

    /// Load the recruiter's jobs, active first and newest first.
    pub async fn fetch_recruiter_jobs(&self) {
        self.begin();

        match self.api.get_json::<Vec<Job>>("/jobs/me/").await {
            Ok(mut jobs) => {
                sort_recruiter_jobs(&mut jobs);
                debug!(jobs = jobs.len(), "Fetched recruiter jobs");
                self.state.update(|s| {
                    s.jobs = jobs;
                    s.loading = false;
                });
            }
            Err(e) => {
                error!(error = %e, "Failed to load recruiter jobs");
                self.fail(ErrorPayload::from_message(LOAD_JOBS_FAILED));
            }
        }
    }

    /// Post a new job. The created job is placed first in the list.
    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job> {
        self.begin();

        match self.api.post_json::<_, Job>("/jobs/create/", draft).await {
            Ok(job) => {
                debug!(job_id = %job.job_id, "Created job");
                self.state.update(|s| {
                    s.jobs.insert(0, job.clone());
                    s.loading = false;
                });
                Ok(job)
            }
            Err(e) => {
                self.fail(e.payload_or(CREATE_JOB_FAILED));
                Err(e)
            }
        }
    }

    /// Flip a job between active and inactive.
    ///
    /// The local copy is flipped as soon as the backend accepts and the list
    /// is re-sorted. On failure the user is alerted and nothing changes.
    /// Returns whether the status changed.
    pub async fn toggle_job_status(&self, job: &Job) -> bool {
        let action = if job.is_active { "deactivate" } else { "activate" };
        let path = format!("/jobs/{}/{action}/", job.job_id);

        match self.api.patch_empty(&path).await {
            Ok(()) => {
                let now_active = !job.is_active;
                self.state.update(|s| {
                    if let Some(local) = s.jobs.iter_mut().find(|j| j.job_id == job.job_id) {
                        local.is_active = now_active;
                    }
                    sort_recruiter_jobs(&mut s.jobs);
                });
                debug!(job_id = %job.job_id, active = now_active, "Toggled job status");
                true
            }
            Err(e) => {
                error!(job_id = %job.job_id, error = %e, "Failed to toggle job status");
                self.prompt.alert(TOGGLE_FAILED_ALERT);
                false
            }
        }
    }

    /// Delete a job after the user confirms.
    pub async fn delete_job(&self, job_id: &JobId) -> DeleteOutcome {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete(&format!("/jobs/delete/{job_id}/")).await {
            Ok(()) => {
                self.state.update(|s| s.jobs.retain(|j| j.job_id != *job_id));
                debug!(job_id = %job_id, "Deleted job");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!(job_id = %job_id, error = %e, "Failed to delete job");
                self.prompt.alert(DELETE_FAILED_ALERT);
                DeleteOutcome::Failed
            }
        }
    }

    /// Save edits to a job. Local lists are left as they are.
    pub async fn update_job(&self, job_id: &JobId, update: &JobUpdate) -> Result<()> {
        self.begin();

        match self.api.patch(&format!("/jobs/{job_id}/edit/"), update).await {
            Ok(()) => {
                self.state.update(|s| s.loading = false);
                Ok(())
            }
            Err(e) => {
                error!(job_id = %job_id, error = %e, "Failed to update job");
                self.fail(ErrorPayload::from_message(UPDATE_JOB_FAILED));
                Err(e)
            }
        }
    }

    /// Load a page of public jobs.
    ///
    /// With `append` the page is added after the jobs already loaded;
    /// otherwise it replaces them. A failed replace empties the list, a failed
    /// append keeps it.
    pub async fn fetch_public_jobs(&self, filters: &JobFilters, append: bool) {
        self.begin();

        let params = filters.query_params();
        match self
            .api
            .get_json_with_query::<JobPage, _>("/jobs/", &params[..])
            .await
        {
            Ok(page) => {
                debug!(
                    results = page.results.len(),
                    page = page.current_page,
                    total_pages = page.total_pages,
                    append,
                    "Fetched public jobs"
                );
                self.state.update(|s| {
                    if append {
                        s.public_jobs.extend(page.results);
                    } else {
                        s.public_jobs = page.results;
                    }
                    s.total_jobs = page.total_results;
                    s.current_page = page.current_page;
                    s.total_pages = page.total_pages;
                    s.loading = false;
                });
            }
            Err(e) => {
                error!(error = %e, "Failed to load public jobs");
                self.state.update(|s| {
                    if !append {
                        s.public_jobs.clear();
                    }
                });
                self.fail(ErrorPayload::from_message(LOAD_JOBS_FAILED));
            }
        }
    }

    /// Load a single job into the detail slot.
    pub async fn fetch_job_by_id(&self, job_id: &JobId) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
            s.current_job = None;
        });

        match self.api.get_json::<Job>(&format!("/jobs/{job_id}/")).await {
            Ok(job) => self.state.update(|s| {
                s.current_job = Some(job);
                s.loading = false;
            }),
            Err(e) => {
                error!(job_id = %job_id, error = %e, "Failed to load job details");
                self.fail(ErrorPayload::from_message(LOAD_JOB_FAILED));
            }
        }
    }

    /// Ask the backend to suggest keywords for a job description.
    ///
    /// Only recruiters may call this. The suggestions are returned, not
    /// stored; the caller decides which ones go into the draft.
    pub async fn suggest_keywords(&self, description: &str) -> Result<Vec<String>> {
        self.state.update(|s| {
            s.keywords_loading = true;
            s.keywords_error = None;
        });

        let result = self
            .api
            .post_json::<_, KeywordSuggestions>("/ai/job-keywords/", &KeywordRequest { description })
            .await;

        match result {
            Ok(suggestions) => {
                debug!(keywords = suggestions.keywords.len(), "Suggested keywords");
                self.state.update(|s| s.keywords_loading = false);
                Ok(suggestions.keywords)
            }
            Err(e) => {
                error!(error = %e, "Failed to suggest keywords");
                let payload = e.payload_or(KEYWORDS_FAILED);
                self.state.update(|s| {
                    s.keywords_error = Some(payload);
                    s.keywords_loading = false;
                });
                Err(e)
            }
        }
    }
}
