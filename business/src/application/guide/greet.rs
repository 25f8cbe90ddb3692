use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::guide::model::ChatMessage;
use crate::domain::guide::use_cases::greet::{GreetGuideParams, GreetGuideUseCase};
use crate::domain::logger::Logger;

pub struct GreetGuideUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GreetGuideUseCase for GreetGuideUseCaseImpl {
    async fn execute(&self, params: GreetGuideParams) -> ChatMessage {
        self.logger
            .debug(&format!("Greeting the {} route", params.route));
        ChatMessage::assistant(params.route.greeting())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guide::greeting::GuideRoute;
    use crate::domain::guide::model::ChatRole;
    use mockall::mock;

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
    async fn should_greet_each_route_with_its_fixed_line() {
        let use_case = GreetGuideUseCaseImpl {
            logger: mock_logger(),
        };

        for route in [
            GuideRoute::Detail,
            GuideRoute::Listing,
            GuideRoute::Compare,
            GuideRoute::Other,
        ] {
            let message = use_case.execute(GreetGuideParams { route }).await;
            assert_eq!(message.role, ChatRole::Assistant);
            assert_eq!(message.content, route.greeting());
        }
    }
}
