use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use tracing::instrument;

use crate::{
    entities::certificate::{CertificateUpdate, CertificateUploadForm, NewCertificate},
    errors::AppError,
    use_cases::extractors::AdminAccess,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_certificates(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let certificates = state.certificate_handler.list_certificates().await?;

    Ok(HttpResponse::Ok().json(certificates))
}

#[instrument(skip(certificate_id, state))]
pub async fn get_certificate_by_id(
    certificate_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let certificate = state
        .certificate_handler
        .get_certificate_by_id(&certificate_id)
        .await?;

    Ok(HttpResponse::Ok().json(certificate))
}

#[instrument(skip(_admin, state, form))]
pub async fn create_certificate(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<CertificateUploadForm>,
) -> Result<impl Responder, AppError> {
    // An uploaded file wins over a certificateURL text field.
    let stored_path = match form.file {
        Some(file) => Some(state.uploads.store(file)?),
        None => None,
    };

    let request = NewCertificate {
        title: form.title.map(|t| t.into_inner()).unwrap_or_default(),
        organization: form.organization.map(|t| t.into_inner()),
        category: form.category.map(|t| t.into_inner()),
        issue_date: parse_issue_date(form.issue_date.map(|t| t.into_inner()))?,
        description: form.description.map(|t| t.into_inner()),
        certificate_url: stored_path.or(form.certificate_url.map(|t| t.into_inner())),
        verify_link: form.verify_link.map(|t| t.into_inner()),
    };

    let certificate = state.certificate_handler.create_certificate(request).await?;

    Ok(HttpResponse::Created().json(certificate))
}

#[instrument(skip(_admin, certificate_id, state, form))]
pub async fn update_certificate(
    _admin: AdminAccess,
    certificate_id: web::Path<String>,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<CertificateUploadForm>,
) -> Result<impl Responder, AppError> {
    let stored_path = match form.file {
        Some(file) => Some(state.uploads.store(file)?),
        None => None,
    };

    let request = CertificateUpdate {
        title: form.title.map(|t| t.into_inner()),
        organization: form.organization.map(|t| t.into_inner()),
        category: form.category.map(|t| t.into_inner()),
        issue_date: parse_issue_date(form.issue_date.map(|t| t.into_inner()))?,
        description: form.description.map(|t| t.into_inner()),
        certificate_url: stored_path.or(form.certificate_url.map(|t| t.into_inner())),
        verify_link: form.verify_link.map(|t| t.into_inner()),
    };

    let certificate = state
        .certificate_handler
        .update_certificate(&certificate_id, request)
        .await?;

    Ok(HttpResponse::Ok().json(certificate))
}

#[instrument(skip(_admin, certificate_id, state))]
pub async fn delete_certificate(
    _admin: AdminAccess,
    certificate_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.certificate_handler.delete_certificate(&certificate_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// The admin form sends issue dates as `YYYY-MM-DD` strings.
fn parse_issue_date(raw: Option<String>) -> Result<Option<NaiveDate>, AppError> {
    raw.filter(|s| !s.trim().is_empty())
        .map(|s| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|_| AppError::field_error("issueDate", "Expected YYYY-MM-DD"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_issue_date_accepts_iso_dates() {
        let parsed = parse_issue_date(Some("2024-05-01".into())).unwrap();
        assert_eq!(parsed, Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
    }

    #[test]
    fn parse_issue_date_treats_blank_as_absent() {
        assert_eq!(parse_issue_date(Some("   ".into())).unwrap(), None);
        assert_eq!(parse_issue_date(None).unwrap(), None);
    }

    #[test]
    fn parse_issue_date_rejects_other_formats() {
        assert!(parse_issue_date(Some("05/01/2024".into())).is_err());
        assert!(parse_issue_date(Some("May 2024".into())).is_err());
    }
}
