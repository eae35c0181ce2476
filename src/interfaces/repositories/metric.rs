use async_trait::async_trait;

use crate::{errors::AppError, repositories::sqlx_repo::SqlxMetricRepo};

#[async_trait]
pub trait MetricRepository: Send + Sync {
    /// Atomically increments the counter, creating it at 1 if absent,
    /// and returns the new value.
    async fn increment_metric(&self, key: &str) -> Result<i64, AppError>;
    async fn get_metric(&self, key: &str) -> Result<Option<i64>, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxMetricRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMetricRepo { pool }
    }
}

#[async_trait]
impl MetricRepository for SqlxMetricRepo {
    async fn increment_metric(&self, key: &str) -> Result<i64, AppError> {
        let value = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO metrics (key, value) VALUES ($1, 1)
            ON CONFLICT (key)
            DO UPDATE SET value = metrics.value + 1, updated_at = NOW()
            RETURNING value
            "#,
        )
        .bind(key)
        .fetch_one(&self.pool)
        .await?;

        Ok(value)
    }

    async fn get_metric(&self, key: &str) -> Result<Option<i64>, AppError> {
        let value = sqlx::query_scalar::<_, i64>(
            r#"SELECT value FROM metrics WHERE key = $1"#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>(r#"SELECT 1"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}
