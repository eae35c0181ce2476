use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::message::NewContactForm,
    errors::AppError,
    use_cases::extractors::AdminAccess,
    AppState,
};

#[instrument(skip(state, form))]
pub async fn create_contact_message(
    state: web::Data<AppState>,
    form: web::Json<NewContactForm>,
) -> Result<impl Responder, AppError> {
    let message = state
        .contact_handler
        .create_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(message))
}

#[instrument(skip(_admin, state))]
pub async fn list_messages(
    _admin: AdminAccess,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler.list_messages().await?;

    Ok(HttpResponse::Ok().json(messages))
}

#[instrument(skip(_admin, message_id, state))]
pub async fn mark_message_read(
    _admin: AdminAccess,
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state.contact_handler.mark_message_read(&message_id).await?;

    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(_admin, message_id, state))]
pub async fn delete_message(
    _admin: AdminAccess,
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.contact_handler.delete_message(&message_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
