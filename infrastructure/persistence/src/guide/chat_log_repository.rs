use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::guide::model::ChatLogEntry;
use business::domain::guide::repository::ChatLogRepository;

/// Append-only record of guide conversations, kept for tuning the prompts.
pub struct ChatLogRepositoryPostgres {
    pool: PgPool,
}

impl ChatLogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatLogRepository for ChatLogRepositoryPostgres {
    async fn save(&self, entry: &ChatLogEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO chat_logs (id, route, user_message, reply, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(entry.id)
        .bind(entry.route.to_string())
        .bind(&entry.user_message)
        .bind(&entry.reply)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
