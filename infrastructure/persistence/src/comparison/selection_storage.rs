use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::comparison::storage::SelectionStorage;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionKey;

/// Keeps one serialized comparison selection per session key.
///
/// Writes are last-writer-wins: the row is upserted whole, so two devices
/// sharing a key overwrite each other rather than merge.
pub struct SelectionStoragePostgres {
    pool: PgPool,
}

impl SelectionStoragePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SelectionStorage for SelectionStoragePostgres {
    async fn load(&self, key: &SessionKey) -> Result<Option<String>, RepositoryError> {
        let payload = sqlx::query_scalar::<_, String>(
            "SELECT payload FROM compare_selections WHERE session_key = $1",
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(payload)
    }

    async fn save(&self, key: &SessionKey, payload: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO compare_selections (session_key, payload, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (session_key) DO UPDATE SET
                payload = EXCLUDED.payload,
                updated_at = now()"#,
        )
        .bind(key.as_str())
        .bind(payload)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
