use chrono::Utc;
use validator::Validate;

use crate::{
    entities::message::{ContactMessage, MessageInsert, NewContactForm},
    errors::AppError,
    repositories::message::MessageRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ContactHandler<R>
where
    R: MessageRepository,
{
    pub message_repo: R,
}

impl<R> ContactHandler<R>
where
    R: MessageRepository,
{
    pub fn new(message_repo: R) -> Self {
        ContactHandler { message_repo }
    }

    /// Handles a public contact form submission: validates the four required
    /// fields, stamps the current date and time, and stores the message with
    /// unread status.
    pub async fn create_contact_message(
        &self,
        request: NewContactForm,
    ) -> Result<ContactMessage, AppError> {
        request.validate()?;

        let now = Utc::now();
        let insert = MessageInsert {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%I:%M %p").to_string(),
        };

        self.message_repo.create_message(&insert).await
    }

    /// Lists all messages, newest first.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.message_repo.list_messages().await
    }

    /// Marks a message as read. Idempotent; the status never moves back
    /// to unread.
    pub async fn mark_message_read(&self, id: &str) -> Result<ContactMessage, AppError> {
        let valid_id = valid_uuid(id)?;

        self.message_repo.mark_message_read(&valid_id).await
    }

    pub async fn delete_message(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.message_repo.delete_message(&valid_id).await
    }

    pub async fn count_messages(&self) -> Result<i64, AppError> {
        self.message_repo.count_messages().await
    }
}
