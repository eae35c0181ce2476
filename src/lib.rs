mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, storage, utils};

use repositories::sqlx_repo::{SqlxCertificateRepo, SqlxMessageRepo, SqlxMetricRepo, SqlxProjectRepo};
use storage::uploads::UploadStore;
use use_cases::{
    analytics::AnalyticsHandler,
    auth::AuthHandler,
    certificates::CertificateHandler,
    contact::ContactHandler,
    projects::ProjectHandler,
};

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppCertificateHandler = CertificateHandler<SqlxCertificateRepo>;
pub type AppContactHandler = ContactHandler<SqlxMessageRepo>;
pub type AppAnalyticsHandler = AnalyticsHandler<SqlxMetricRepo>;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub certificate_handler: AppCertificateHandler,
    pub contact_handler: AppContactHandler,
    pub analytics_handler: AppAnalyticsHandler,
    pub auth_handler: AuthHandler,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> std::io::Result<Self> {
        let project_handler = ProjectHandler::new(SqlxProjectRepo::new(pool.clone()));
        let certificate_handler = CertificateHandler::new(SqlxCertificateRepo::new(pool.clone()));
        let contact_handler = ContactHandler::new(SqlxMessageRepo::new(pool.clone()));
        let analytics_handler = AnalyticsHandler::new(SqlxMetricRepo::new(pool));
        let auth_handler = AuthHandler::new(config);
        let uploads = UploadStore::new(&config.upload_dir)?;

        Ok(AppState {
            project_handler,
            certificate_handler,
            contact_handler,
            analytics_handler,
            auth_handler,
            uploads,
        })
    }
}
