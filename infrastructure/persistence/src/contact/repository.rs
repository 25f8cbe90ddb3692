use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::contact::model::ContactMessage;
use business::domain::contact::repository::ContactMessageRepository;
use business::domain::errors::RepositoryError;

pub struct ContactMessageRepositoryPostgres {
    pool: PgPool,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn save(&self, message: &ContactMessage) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO contact_messages (id, message, reply_to, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(message.id)
        .bind(&message.message)
        .bind(&message.reply_to)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
