//! Recruiter-side applicant review types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::JobId;
use super::user::{nullable_list, Role};

/// Thin candidate record embedded in an applicant entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    /// Unique login name
    pub username: String,
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Self-declared skills
    #[serde(default, deserialize_with = "nullable_list")]
    pub skills: Vec<String>,
}

/// An application as seen by the recruiter who owns the job.
///
/// `is_ignored` is review state owned by the client. It is never sent to or
/// read from the backend and starts out `false` on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// Application primary key
    pub id: i64,
    /// Who applied
    pub candidate: CandidateSummary,
    /// Resume-to-job match score, 0 to 100
    #[serde(default)]
    pub match_score: f64,
    /// Stored resume location
    #[serde(default)]
    pub resume_file: Option<String>,
    /// When the application was made
    pub applied_at: DateTime<Utc>,
    /// Hidden by the recruiter. Local only, never sent or received
    #[serde(skip)]
    pub is_ignored: bool,
}

/// Response of `GET /applications/{job_id}/applicants/`
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicantList {
    /// Job the applicants applied to
    #[serde(default)]
    pub job_id: Option<JobId>,
    /// Number of applicants
    #[serde(default)]
    pub total_applicants: u64,
    /// Applicants, as ordered by the backend
    pub applicants: Vec<Applicant>,
}

/// Full candidate profile from `GET /accounts/candidates/{username}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Backend primary key
    #[serde(default)]
    pub id: Option<i64>,
    /// Unique login name
    pub username: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Account role, always applicant for candidates
    #[serde(default)]
    pub role: Option<Role>,
    /// Display name
    #[serde(default)]
    pub full_name: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-form bio
    #[serde(default)]
    pub about: Option<String>,
    /// LinkedIn profile URL
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// GitHub profile URL
    #[serde(default)]
    pub github_url: Option<String>,
    /// Personal site or portfolio URL
    #[serde(default)]
    pub portfolio_url: Option<String>,
    /// Self-declared skills
    #[serde(default, deserialize_with = "nullable_list")]
    pub skills: Vec<String>,
}

/// Per-job line of the recruiter dashboard summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStats {
    /// Public job identifier
    pub job_id: JobId,
    /// Job title
    pub title: String,
    /// Applications received for this job
    #[serde(default)]
    pub applicant_count: u64,
    /// Best match score among the applications
    #[serde(default)]
    pub top_match_score: f64,
}

/// Response of `GET /dashboard/recruiter/summary/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruiterSummary {
    /// Jobs posted by the recruiter
    pub total_jobs: u64,
    /// Applications across all jobs
    pub total_applicants: u64,
    /// Per-job breakdown
    pub jobs: Vec<JobStats>,
}
