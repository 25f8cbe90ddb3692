use std::sync::Arc;

use async_trait::async_trait;

use crate::application::comparison::sessions::SelectionSessions;
use crate::domain::comparison::use_cases::clear::{ClearSelectionParams, ClearSelectionUseCase};
use crate::domain::comparison::use_cases::get::SelectionView;
use crate::domain::logger::Logger;

pub struct ClearSelectionUseCaseImpl {
    pub sessions: Arc<SelectionSessions>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearSelectionUseCase for ClearSelectionUseCaseImpl {
    async fn execute(&self, params: ClearSelectionParams) -> SelectionView {
        let store = self.sessions.store_for(&params.session).await;
        let mut store = store.lock().await;

        store.clear_all().await;
        self.logger
            .info(&format!("Session {} cleared its selection", params.session));

        SelectionView::of(store.selection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::storage::SelectionStorage;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::SessionKey;
    use mockall::mock;
    use mockall::predicate::eq;
    use uuid::Uuid;

    mock! {
        pub Storage {}

        #[async_trait]
        impl SelectionStorage for Storage {
            async fn load(&self, key: &SessionKey) -> Result<Option<String>, RepositoryError>;
            async fn save(&self, key: &SessionKey, payload: &str) -> Result<(), RepositoryError>;
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

    #[tokio::test]
    async fn should_clear_selection_and_persist_empty_payload() {
        let stored = format!(r#"["{}","{}"]"#, Uuid::new_v4(), Uuid::new_v4());
        let session = SessionKey::parse("visitor-1").unwrap();

        let mut storage = MockStorage::new();
        storage
            .expect_load()
            .returning(move |_| Ok(Some(stored.clone())));
        storage
            .expect_save()
            .with(eq(session.clone()), eq("[]".to_string()))
            .times(1)
            .returning(|_, _| Ok(()));

        let logger = mock_logger();
        let use_case = ClearSelectionUseCaseImpl {
            sessions: Arc::new(SelectionSessions::new(Arc::new(storage), logger.clone())),
            logger,
        };

        let view = use_case.execute(ClearSelectionParams { session }).await;

        assert!(view.product_ids.is_empty());
        assert_eq!(view.count, 0);
        assert!(!view.compare_available);
    }
}
