use validator::Validate;

use crate::{
    entities::certificate::{Certificate, CertificateUpdate, NewCertificate},
    errors::AppError,
    repositories::certificate::CertificateRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct CertificateHandler<R>
where
    R: CertificateRepository,
{
    pub certificate_repo: R,
}

impl<R> CertificateHandler<R>
where
    R: CertificateRepository,
{
    pub fn new(certificate_repo: R) -> Self {
        CertificateHandler { certificate_repo }
    }

    /// Creates a certificate. Any uploaded file has already been stored by
    /// the interface layer; its relative path arrives as `certificate_url`.
    pub async fn create_certificate(&self, request: NewCertificate) -> Result<Certificate, AppError> {
        request.validate()?;

        self.certificate_repo.create_certificate(&request).await
    }

    pub async fn get_certificate_by_id(&self, id: &str) -> Result<Certificate, AppError> {
        let valid_id = valid_uuid(id)?;

        self.certificate_repo.get_certificate_by_id(&valid_id).await
    }

    /// Lists all certificates, newest issue date first.
    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError> {
        self.certificate_repo.list_certificates().await
    }

    /// Applies a partial update; fields absent from the request keep
    /// their stored values, matching the create/merge semantics of the
    /// admin edit form.
    pub async fn update_certificate(
        &self,
        id: &str,
        request: CertificateUpdate,
    ) -> Result<Certificate, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        self.certificate_repo.update_certificate(&valid_id, &request).await
    }

    pub async fn delete_certificate(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.certificate_repo.delete_certificate(&valid_id).await
    }

    pub async fn count_certificates(&self) -> Result<i64, AppError> {
        self.certificate_repo.count_certificates().await
    }
}
