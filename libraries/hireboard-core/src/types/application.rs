//! Applicant-side application types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::JobId;

/// Snapshot of the job an application was made to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    /// Public job identifier
    pub job_id: JobId,
    /// Job title
    #[serde(default)]
    pub title: String,
    /// Hiring company
    #[serde(default)]
    pub company_name: String,
    /// Job location
    #[serde(default)]
    pub location: String,
    /// Full job description
    #[serde(default)]
    pub description: String,
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
    #[serde(default)]
    pub is_active: bool,
    /// When the job was posted
    pub created_at: DateTime<Utc>,
}

/// One of the signed-in applicant's applications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Application primary key
    pub id: i64,
    /// Backend primary key of the job
    pub job: i64,
    /// The job as it was when listed
    pub job_details: JobSummary,
    /// Stored resume location
    #[serde(default)]
    pub resume_file: Option<String>,
    /// Resume-to-job match score, 0 to 100
    #[serde(default)]
    pub match_score: f64,
    /// When the application was made
    pub applied_at: DateTime<Utc>,
}

/// Response of `GET /applications/my-applications/`.
///
/// `total_applications` is omitted by the backend when the list is empty.
#[derive(Debug, Clone, Deserialize)]
pub struct MyApplications {
    /// Backend status message
    #[serde(default)]
    pub message: String,
    /// Number of applications
    #[serde(default)]
    pub total_applications: u64,
    /// Applications, newest first
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Response of `POST /applications/{job_id}/apply/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApplyReceipt {
    /// Backend status message
    #[serde(default)]
    pub message: String,
    /// Score computed for the submitted resume
    #[serde(default)]
    pub match_score: f64,
    /// Where the uploaded resume is stored
    #[serde(default)]
    pub resume_url: Option<String>,
    /// Primary key of the new application
    pub application_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_applications_response() {
        let parsed: MyApplications = serde_json::from_value(json!({
            "message": "No applications found",
            "applications": []
        }))
        .unwrap();

        assert_eq!(parsed.total_applications, 0);
        assert!(parsed.applications.is_empty());
    }

    #[test]
    fn test_application_with_job_details() {
        let parsed: MyApplications = serde_json::from_value(json!({
            "message": "Applications retrieved successfully",
            "total_applications": 1,
            "applications": [{
                "id": 12,
                "job": 3,
                "job_details": {
                    "job_id": "0b7f6a2c-1d2e-4f3a-8b9c-0d1e2f3a4b5c",
                    "title": "Platform Engineer",
                    "company_name": "Acme",
                    "location": "Remote",
                    "description": "",
                    "experience_required": "2 years",
                    "salary_min": null,
                    "salary_max": null,
                    "is_active": true,
                    "created_at": "2024-05-01T10:30:00Z"
                },
                "resume_file": "https://files.example.com/r.pdf",
                "match_score": 72.5,
                "applied_at": "2024-05-02T08:00:00Z"
            }]
        }))
        .unwrap();

        let application = &parsed.applications[0];
        assert_eq!(application.job_details.company_name, "Acme");
        assert!((application.match_score - 72.5).abs() < f64::EPSILON);
    }
}
