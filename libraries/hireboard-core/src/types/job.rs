//! Job posting types and recruiter ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::ids::JobId;

/// A job posting.
///
/// `keywords` is only present when a recruiter is looking at the job, and
/// `applicant_count` is computed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Public job identifier
    pub job_id: JobId,
    /// Job title
    #[serde(default)]
    pub title: String,
    /// Full job description
    #[serde(default)]
    pub description: String,
    /// Hiring company
    #[serde(default)]
    pub company_name: String,
    /// Free-form requirements text
    #[serde(default)]
    pub requirements: String,
    /// Skills used to score applications against the job
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Job location
    #[serde(default)]
    pub location: String,
    /// Experience asked for, as free text
    #[serde(default)]
    pub experience_required: String,
    /// Lower bound of the salary range
    #[serde(default)]
    pub salary_min: Option<i64>,
    /// Upper bound of the salary range
    #[serde(default)]
    pub salary_max: Option<i64>,
    /// Whether the job accepts applications
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// When the job was posted
    pub created_at: DateTime<Utc>,
    /// Number of applications received
    #[serde(default)]
    pub applicant_count: Option<u64>,
}

fn default_active() -> bool {
    true
}

impl Job {
    /// Create an active job created now
    pub fn new(job_id: JobId, title: impl Into<String>) -> Self {
        Self {
            job_id,
            title: title.into(),
            description: String::new(),
            company_name: String::new(),
            requirements: String::new(),
            keywords: Vec::new(),
            location: String::new(),
            experience_required: String::new(),
            salary_min: None,
            salary_max: None,
            is_active: true,
            created_at: Utc::now(),
            applicant_count: None,
        }
    }
}

/// Recruiter dashboard ordering: active jobs first, newest first within
/// each group.
pub fn recruiter_order(a: &Job, b: &Job) -> Ordering {
    b.is_active
        .cmp(&a.is_active)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Sort a recruiter's job list in place with [`recruiter_order`].
pub fn sort_recruiter_jobs(jobs: &mut [Job]) {
    jobs.sort_by(recruiter_order);
}

/// Body of `POST /jobs/create/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobDraft {
    /// Job title
    pub title: String,
    /// Full job description
    pub description: String,
    /// Hiring company
    pub company_name: String,
    /// Free-form requirements text
    pub requirements: String,
    /// Skills to match resumes against; at least one is required
    pub keywords: Vec<String>,
    /// Job location
    pub location: String,
    /// Experience asked for, as free text
    pub experience_required: String,
    /// Lower bound of the salary range
    pub salary_min: Option<i64>,
    /// Upper bound of the salary range
    pub salary_max: Option<i64>,
}

/// Partial edit sent to `PATCH /jobs/{id}/edit/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobUpdate {
    /// New job title, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New full job description, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New hiring company, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// New free-form requirements text, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    /// Replacement keyword list, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// New job location, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// New experience requirement, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_required: Option<String>,
    /// New lower bound of the salary range, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i64>,
    /// New upper bound of the salary range, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i64>,
}

/// Public job search filters. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    /// Free-text search, empty when absent
    pub search: Option<String>,
    /// Location filter, empty when absent
    pub location: Option<String>,
    /// Page number starting at 1; absent or zero means the first page
    pub page: Option<u32>,
}

impl JobFilters {
    /// Filters for a given page with no search terms
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Query parameters with defaults applied: empty search, empty location,
    /// first page. Page 0 is sent as page 1.
    pub fn query_params(&self) -> [(&'static str, String); 3] {
        let page = self.page.filter(|p| *p > 0).unwrap_or(1);
        [
            ("search", self.search.clone().unwrap_or_default()),
            ("location", self.location.clone().unwrap_or_default()),
            ("page", page.to_string()),
        ]
    }
}

/// One page of `GET /jobs/`
#[derive(Debug, Clone, Deserialize)]
pub struct JobPage {
    /// Jobs on this page
    pub results: Vec<Job>,
    /// Matching jobs across all pages
    pub total_results: u64,
    /// Page number of this page
    pub current_page: u32,
    /// Number of pages
    pub total_pages: u32,
}

/// Response of `POST /ai/job-keywords/`: at most six short, de-duplicated
/// keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeywordSuggestions {
    /// Suggested keywords, best first
    #[serde(default)]
    pub keywords: Vec<String>,
}
