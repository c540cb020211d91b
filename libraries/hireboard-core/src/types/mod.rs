//! Domain types for Hireboard

mod applicant;
mod application;
mod ids;
mod job;
mod payload;
mod route;
mod user;

pub use applicant::{Applicant, ApplicantList, CandidateProfile, CandidateSummary, JobStats, RecruiterSummary};
pub use application::{Application, ApplyReceipt, JobSummary, MyApplications};
pub use ids::JobId;
pub use job::{recruiter_order, sort_recruiter_jobs, Job, JobDraft, JobFilters, JobPage, JobUpdate, KeywordSuggestions};
pub use payload::ErrorPayload;
pub use route::{RouteName, RouteRequirements};
pub use user::{LoginCredentials, ProfileUpdate, Role, SignupForm, SignupRequest, TokenPair, User};
