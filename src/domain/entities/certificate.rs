use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: Uuid,
    pub title: String,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub description: Option<String>,
    #[serde(rename = "certificateURL")]
    pub certificate_url: Option<String>,
    pub verify_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Multipart body for certificate create/update. All text fields arrive as
/// form parts; `file` is an optional PNG/JPEG/PDF upload that, when present,
/// takes precedence over a `certificateURL` text field.
#[derive(Debug, MultipartForm)]
pub struct CertificateUploadForm {
    pub title: Option<Text<String>>,
    pub organization: Option<Text<String>>,
    pub category: Option<Text<String>>,
    #[multipart(rename = "issueDate")]
    pub issue_date: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(rename = "certificateURL")]
    pub certificate_url: Option<Text<String>>,
    #[multipart(rename = "verifyLink")]
    pub verify_link: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub file: Option<TempFile>,
}

#[derive(Debug, Validate)]
pub struct NewCertificate {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub certificate_url: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub verify_link: Option<String>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Default, Validate)]
pub struct CertificateUpdate {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub certificate_url: Option<String>,
    #[validate(url(message = "Invalid URL"))]
    pub verify_link: Option<String>,
}
