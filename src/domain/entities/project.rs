use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: Option<String>,
    pub video_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tech: Vec<String>,

    pub image: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub video_url: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub github_url: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub live_url: Option<String>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub tech: Option<Vec<String>>,

    pub image: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub video_url: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub github_url: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub live_url: Option<String>,
}
