//! Hireboard Core
//!
//! Platform-agnostic domain types and collaborator traits for the Hireboard
//! job board client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Job`, `Application`, `Applicant`, `CandidateProfile`
//! - **Route Policy Types**: `RouteName`, `RouteRequirements`
//! - **Collaborator Traits**: `KeyValueStorage`, `Navigator`, `Prompt`
//! - **Error Handling**: `CoreError` and the verbatim backend `ErrorPayload`
//!
//! # Example
//!
//! ```rust
//! use hireboard_core::types::{sort_recruiter_jobs, Job, JobId};
//! use chrono::{TimeZone, Utc};
//!
//! let mut older = Job::new(JobId::generate(), "Backend Engineer");
//! older.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//!
//! let mut closed = Job::new(JobId::generate(), "Designer");
//! closed.is_active = false;
//!
//! let newer = Job::new(JobId::generate(), "Data Engineer");
//!
//! let mut jobs = vec![closed, older, newer];
//! sort_recruiter_jobs(&mut jobs);
//!
//! assert_eq!(jobs[0].title, "Data Engineer");
//! assert!(!jobs[2].is_active);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CoreError, Result};
pub use traits::{KeyValueStorage, Navigator, Prompt};

pub use types::{
    // Auth
    LoginCredentials, ProfileUpdate, Role, SignupForm, SignupRequest, TokenPair, User,
    // Jobs
    sort_recruiter_jobs, Job, JobDraft, JobFilters, JobId, JobPage, JobUpdate, KeywordSuggestions,
    // Applications
    Application, ApplyReceipt, JobSummary, MyApplications,
    // Recruiter
    Applicant, ApplicantList, CandidateProfile, CandidateSummary, JobStats, RecruiterSummary,
    // Routing
    RouteName, RouteRequirements,
    // Errors
    ErrorPayload,
};
