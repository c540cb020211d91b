//! Recruiter: applicant review for one job and candidate profiles.

use super::StateCell;
use crate::api::ApiClient;
use hireboard_core::{
    Applicant, ApplicantList, CandidateProfile, ErrorPayload, JobId, RecruiterSummary,
};
use tokio::sync::watch;
use tracing::{debug, error};

const LOAD_APPLICANTS_FAILED: &str = "Failed to load applicants.";
const LOAD_PROFILE_FAILED: &str = "Failed to load profile.";
const LOAD_SUMMARY_FAILED: &str = "Failed to load dashboard summary.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecruiterState {
    pub loading: bool,
    pub profile_loading: bool,
    pub error: Option<ErrorPayload>,
    pub applicants: Vec<Applicant>,

    /// Single slot: emptied as soon as another profile is requested
    pub current_candidate_profile: Option<CandidateProfile>,

    pub summary: Option<RecruiterSummary>,
}

pub struct Recruiter {
    api: ApiClient,
    state: StateCell<RecruiterState>,
}

impl Recruiter {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: StateCell::new(RecruiterState::default()),
        }
    }

    pub fn state(&self) -> RecruiterState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<RecruiterState> {
        self.state.subscribe()
    }

    /// Load the applicants of one job. Every applicant starts un-ignored.
    pub async fn fetch_applicants(&self, job_id: &JobId) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match self
            .api
            .get_json::<ApplicantList>(&format!("/applications/{job_id}/applicants/"))
            .await
        {
            Ok(list) => {
                let applicants: Vec<Applicant> = list
                    .applicants
                    .into_iter()
                    .map(|applicant| Applicant {
                        is_ignored: false,
                        ..applicant
                    })
                    .collect();
                debug!(job_id = %job_id, applicants = applicants.len(), "Fetched applicants");
                self.state.update(|s| {
                    s.applicants = applicants;
                    s.loading = false;
                });
            }
            Err(e) => {
                error!(job_id = %job_id, error = %e, "Failed to load applicants");
                self.state.update(|s| {
                    s.error = Some(ErrorPayload::from_message(LOAD_APPLICANTS_FAILED));
                    s.loading = false;
                });
            }
        }
    }

    /// Mark an applicant as ignored (or not). Local only.
    ///
    /// Returns `false` when no loaded applicant has `application_id`.
    pub fn set_ignored(&self, application_id: i64, ignored: bool) -> bool {
        let mut found = false;
        self.state.update(|s| {
            if let Some(applicant) = s.applicants.iter_mut().find(|a| a.id == application_id) {
                applicant.is_ignored = ignored;
                found = true;
            }
        });
        found
    }

    /// Load a candidate's full profile into the single profile slot.
    pub async fn fetch_candidate_profile(&self, username: &str) {
        self.state.update(|s| {
            s.profile_loading = true;
            s.error = None;
            s.current_candidate_profile = None;
        });

        match self
            .api
            .get_json::<CandidateProfile>(&format!("/accounts/candidates/{username}/"))
            .await
        {
            Ok(profile) => self.state.update(|s| {
                s.current_candidate_profile = Some(profile);
                s.profile_loading = false;
            }),
            Err(e) => {
                error!(username = %username, error = %e, "Failed to load profile");
                self.state.update(|s| {
                    s.error = Some(ErrorPayload::from_message(LOAD_PROFILE_FAILED));
                    s.profile_loading = false;
                });
            }
        }
    }

    /// Load the dashboard summary across all of the recruiter's jobs.
    pub async fn fetch_summary(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match self
            .api
            .get_json::<RecruiterSummary>("/dashboard/recruiter/summary/")
            .await
        {
            Ok(summary) => self.state.update(|s| {
                s.summary = Some(summary);
                s.loading = false;
            }),
            Err(e) => {
                error!(error = %e, "Failed to load recruiter summary");
                self.state.update(|s| {
                    s.error = Some(ErrorPayload::from_message(LOAD_SUMMARY_FAILED));
                    s.loading = false;
                });
            }
        }
    }
}
