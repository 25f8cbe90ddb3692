use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::appointment::model::Appointment;
use business::domain::appointment::repository::AppointmentRepository;
use business::domain::errors::RepositoryError;

pub struct AppointmentRepositoryPostgres {
    pool: PgPool,
}

impl AppointmentRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryPostgres {
    async fn save(&self, appointment: &Appointment) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO appointments (id, name, email, phone, visit_date, visit_time, model_interest, notes, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"#,
        )
        .bind(appointment.id)
        .bind(&appointment.name)
        .bind(&appointment.email)
        .bind(&appointment.phone)
        .bind(appointment.visit_date)
        .bind(appointment.visit_time)
        .bind(&appointment.model_interest)
        .bind(&appointment.notes)
        .bind(appointment.status.to_string())
        .bind(appointment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
