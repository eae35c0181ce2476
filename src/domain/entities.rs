pub mod auth;
pub mod certificate;
pub mod message;
pub mod metric;
pub mod project;
