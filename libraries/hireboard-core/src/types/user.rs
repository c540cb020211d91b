//! User and authentication types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. Every account is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Job seeker
    Applicant,
    /// Posts and manages jobs
    Recruiter,
}

impl Role {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Recruiter => "recruiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user as returned by `GET /auth/me/`.
///
/// Only `role` is required; profile fields are optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend primary key, absent on partial payloads
    #[serde(default)]
    pub id: Option<i64>,
    /// Unique login name
    #[serde(default)]
    pub username: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Account role
    pub role: Role,
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

impl User {
    /// Create a user with just a username and role
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: None,
            role,
            full_name: String::new(),
            phone: None,
            about: None,
            linkedin_url: None,
            github_url: None,
            portfolio_url: None,
            skills: Vec::new(),
        }
    }

    /// Whether this user is a recruiter
    pub fn is_recruiter(&self) -> bool {
        self.role == Role::Recruiter
    }

    /// Whether this user is an applicant
    pub fn is_applicant(&self) -> bool {
        self.role == Role::Applicant
    }
}

/// The backend stores `skills` as a nullable JSON list.
pub(crate) fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /auth/login/`
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    /// Unique login name
    pub username: String,
    /// Plain-text password, sent only over the login or signup call
    pub password: String,
}

impl LoginCredentials {
    /// Create login credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Access/refresh token pair returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token
    pub access: String,
    /// Long-lived token for obtaining a new access token
    pub refresh: String,
}

/// Everything a signup screen collects.
///
/// Only the fields in [`SignupRequest`] are ever sent; the rest stays local.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    /// Display name
    pub full_name: String,
    /// Unique login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Plain-text password, sent only over the login or signup call
    pub password: String,
    /// Repeat of `password`, checked locally and never sent
    pub confirm_password: String,
    /// Role picked on the form; required by the backend
    pub role: Option<Role>,
}

/// Body of `POST /auth/signup/`, exactly the shape the backend accepts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    /// Display name
    pub full_name: String,
    /// Unique login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Plain-text password, sent only over the login or signup call
    pub password: String,
    /// Role of the new account
    pub role: Option<Role>,
}

impl From<&SignupForm> for SignupRequest {
    fn from(form: &SignupForm) -> Self {
        Self {
            full_name: form.full_name.clone(),
            username: form.username.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            password: form.password.clone(),
            role: form.role,
        }
    }
}

/// Partial profile edit sent to `PATCH /auth/me/update/`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    /// New display name, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New contact phone number, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New free-form bio, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// New LinkedIn profile URL, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    /// New GitHub profile URL, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// New personal site or portfolio URL, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    /// Replacement skill list, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}
