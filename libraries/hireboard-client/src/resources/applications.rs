//! Applications: the signed-in applicant's applications.

use super::StateCell;
use crate::api::ApiClient;
use crate::error::Result;
use hireboard_core::{Application, ApplyReceipt, ErrorPayload, JobId, MyApplications};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tokio::sync::watch;
use tracing::{debug, error, info};

const LOAD_APPLICATIONS_FAILED: &str = "Could not load applications.";
const APPLY_FAILED: &str = "Failed to submit application.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationsState {
    pub loading: bool,
    pub error: Option<ErrorPayload>,
    pub applications: Vec<Application>,
    pub total_applications: u64,
}

pub struct Applications {
    api: ApiClient,
    state: StateCell<ApplicationsState>,
}

impl Applications {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: StateCell::new(ApplicationsState::default()),
        }
    }

    pub fn state(&self) -> ApplicationsState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ApplicationsState> {
        self.state.subscribe()
    }

    /// Load the applicant's applications, newest first as the backend sends
    /// them.
    pub async fn fetch_my_applications(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match self
            .api
            .get_json::<MyApplications>("/applications/my-applications/")
            .await
        {
            Ok(response) => {
                debug!(
                    applications = response.applications.len(),
                    message = %response.message,
                    "Fetched applications"
                );
                self.state.update(|s| {
                    s.total_applications = response.total_applications;
                    s.applications = response.applications;
                    s.loading = false;
                });
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch applications");
                self.state.update(|s| {
                    s.error = Some(ErrorPayload::from_message(LOAD_APPLICATIONS_FAILED));
                    s.loading = false;
                });
            }
        }
    }

    /// Apply to a job with a PDF resume.
    ///
    /// The application list is not refreshed; call
    /// [`Applications::fetch_my_applications`] to see the new entry.
    pub async fn apply_to_job(
        &self,
        job_id: &JobId,
        file_name: &str,
        resume: Vec<u8>,
    ) -> Result<ApplyReceipt> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.submit(job_id, file_name, resume).await;

        match &result {
            Ok(receipt) => {
                info!(
                    job_id = %job_id,
                    application_id = receipt.application_id,
                    match_score = receipt.match_score,
                    "Application submitted"
                );
                self.state.update(|s| s.loading = false);
            }
            Err(e) => {
                error!(job_id = %job_id, error = %e, "Failed to submit application");
                let payload = e.payload_or(APPLY_FAILED);
                self.state.update(|s| {
                    s.error = Some(payload);
                    s.loading = false;
                });
            }
        }

        result
    }

    async fn submit(&self, job_id: &JobId, file_name: &str, resume: Vec<u8>) -> Result<ApplyReceipt> {
        let part = Part::bytes(resume)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("resume", part);

        let request = self
            .api
            .request(Method::POST, &format!("/applications/{job_id}/apply/"))
            .multipart(form);

        self.api.send_json(request).await
    }
}
