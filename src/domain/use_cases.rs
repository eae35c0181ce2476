pub mod analytics;
pub mod auth;
pub mod certificates;
pub mod contact;
pub mod extractors;
pub mod projects;
