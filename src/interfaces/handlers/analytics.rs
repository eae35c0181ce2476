use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::metric::{ProfileViewResponse, StatsResponse},
    errors::AppError,
    use_cases::extractors::AdminAccess,
    AppState,
};

#[instrument(skip(state))]
pub async fn record_profile_view(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let value = state.analytics_handler.record_profile_view().await?;

    Ok(HttpResponse::Ok().json(ProfileViewResponse { success: true, value }))
}

#[instrument(skip(_admin, state))]
pub async fn get_stats(
    _admin: AdminAccess,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (projects, certificates, messages, profile_views) = tokio::try_join!(
        state.project_handler.count_projects(),
        state.certificate_handler.count_certificates(),
        state.contact_handler.count_messages(),
        state.analytics_handler.profile_views(),
    )?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        projects,
        certificates,
        messages,
        profile_views,
    }))
}
