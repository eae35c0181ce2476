use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::message::{ContactMessage, MessageInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxMessageRepo,
};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(&self, msg: &MessageInsert) -> Result<ContactMessage, AppError>;
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn mark_message_read(&self, id: &Uuid) -> Result<ContactMessage, AppError>;
    async fn delete_message(&self, id: &Uuid) -> Result<(), AppError>;
    async fn count_messages(&self) -> Result<i64, AppError>;
}

impl SqlxMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMessageRepo { pool }
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepo {
    async fn create_message(&self, msg: &MessageInsert) -> Result<ContactMessage, AppError> {
        let created = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO messages (name, email, subject, message, date, time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .bind(&msg.date)
        .bind(&msg.time)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"SELECT * FROM messages ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    // Transitions only unread -> read; marking an already-read message is a no-op.
    async fn mark_message_read(&self, id: &Uuid) -> Result<ContactMessage, AppError> {
        let updated = sqlx::query_as::<_, ContactMessage>(
            r#"UPDATE messages SET status = 'read' WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Message not found".into()))?;

        Ok(updated)
    }

    async fn delete_message(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM messages WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Message not found".into()));
        }
        Ok(())
    }

    async fn count_messages(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM messages"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
