pub mod certificate;
pub mod message;
pub mod metric;
pub mod project;
pub mod sqlx_repo;
