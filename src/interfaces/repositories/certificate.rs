use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::certificate::{Certificate, CertificateUpdate, NewCertificate},
    errors::AppError,
    repositories::sqlx_repo::SqlxCertificateRepo,
};

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn create_certificate(&self, cert: &NewCertificate) -> Result<Certificate, AppError>;
    async fn get_certificate_by_id(&self, id: &Uuid) -> Result<Certificate, AppError>;
    async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError>;
    async fn update_certificate(&self, id: &Uuid, update: &CertificateUpdate) -> Result<Certificate, AppError>;
    async fn delete_certificate(&self, id: &Uuid) -> Result<(), AppError>;
    async fn count_certificates(&self) -> Result<i64, AppError>;
}

impl SqlxCertificateRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCertificateRepo { pool }
    }
}

#[async_trait]
impl CertificateRepository for SqlxCertificateRepo {
    async fn create_certificate(&self, cert: &NewCertificate) -> Result<Certificate, AppError> {
        let created = sqlx::query_as::<_, Certificate>(
            r#"
            INSERT INTO certificates
                (title, organization, category, issue_date, description, certificate_url, verify_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&cert.title)
        .bind(&cert.organization)
        .bind(&cert.category)
        .bind(cert.issue_date)
        .bind(&cert.description)
        .bind(&cert.certificate_url)
        .bind(&cert.verify_link)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_certificate_by_id(&self, id: &Uuid) -> Result<Certificate, AppError> {
        let cert = sqlx::query_as::<_, Certificate>(
            r#"SELECT * FROM certificates WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Certificate not found".into()))?;

        Ok(cert)
    }

    async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError> {
        let certs = sqlx::query_as::<_, Certificate>(
            r#"SELECT * FROM certificates ORDER BY issue_date DESC NULLS LAST, created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(certs)
    }

    async fn update_certificate(&self, id: &Uuid, update: &CertificateUpdate) -> Result<Certificate, AppError> {
        let updated = sqlx::query_as::<_, Certificate>(
            r#"
            UPDATE certificates SET
                title = COALESCE($2, title),
                organization = COALESCE($3, organization),
                category = COALESCE($4, category),
                issue_date = COALESCE($5, issue_date),
                description = COALESCE($6, description),
                certificate_url = COALESCE($7, certificate_url),
                verify_link = COALESCE($8, verify_link),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.organization)
        .bind(&update.category)
        .bind(update.issue_date)
        .bind(&update.description)
        .bind(&update.certificate_url)
        .bind(&update.verify_link)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Certificate not found".into()))?;

        Ok(updated)
    }

    async fn delete_certificate(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM certificates WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Certificate not found".into()));
        }
        Ok(())
    }

    async fn count_certificates(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM certificates"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
