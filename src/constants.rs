use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Declared content types accepted by the certificate upload endpoint.
/// `image/jpg` is a common non-standard alias browsers still send.
pub const ALLOWED_UPLOAD_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "application/pdf",
];

/// Metric key for the public profile view counter.
pub const PROFILE_VIEWS_KEY: &str = "profile_views";
