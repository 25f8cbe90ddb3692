use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::model::{Appointment, NewAppointmentProps};
use crate::domain::appointment::repository::AppointmentRepository;
use crate::domain::appointment::use_cases::book::{BookAppointmentParams, BookAppointmentUseCase};
use crate::domain::logger::Logger;

pub struct BookAppointmentUseCaseImpl {
    pub repository: Arc<dyn AppointmentRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BookAppointmentUseCase for BookAppointmentUseCaseImpl {
    async fn execute(
        &self,
        params: BookAppointmentParams,
    ) -> Result<Appointment, AppointmentError> {
        let appointment = Appointment::new(NewAppointmentProps {
            name: params.name,
            email: params.email,
            phone: params.phone,
            visit_date: params.visit_date,
            visit_time: params.visit_time,
            model_interest: params.model_interest,
            notes: params.notes,
        })?;

        self.logger.info(&format!(
            "Booking showroom visit on {} at {}",
            appointment.visit_date, appointment.visit_time
        ));

        self.repository.save(&appointment).await?;

        self.logger
            .info(&format!("Booked appointment {}", appointment.id));

        Ok(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::value_objects::AppointmentStatus;
    use crate::domain::errors::RepositoryError;
    use chrono::{NaiveDate, NaiveTime};
    use mockall::mock;

    mock! {
        pub AppointmentRepo {}

        #[async_trait]
        impl AppointmentRepository for AppointmentRepo {
            async fn save(&self, appointment: &Appointment) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params() -> BookAppointmentParams {
        BookAppointmentParams {
            name: "Jordan Rivers".to_string(),
            email: "jordan@example.com".to_string(),
            phone: None,
            visit_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            visit_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            model_interest: Some("Cascade 6".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn should_book_pending_appointment() {
        let mut mock_repo = MockAppointmentRepo::new();
        mock_repo
            .expect_save()
            .withf(|appointment| appointment.status == AppointmentStatus::Pending)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = BookAppointmentUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Jordan Rivers");
    }

    #[tokio::test]
    async fn should_reject_invalid_email_without_saving() {
        let mut mock_repo = MockAppointmentRepo::new();
        mock_repo.expect_save().never();

        let use_case = BookAppointmentUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut invalid = params();
        invalid.email = "not-an-email".to_string();

        let result = use_case.execute(invalid).await;

        assert!(matches!(result, Err(AppointmentError::EmailInvalid)));
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut mock_repo = MockAppointmentRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = BookAppointmentUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(AppointmentError::Repository(_))));
    }
}
