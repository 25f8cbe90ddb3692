use async_trait::async_trait;

use crate::domain::guide::greeting::GuideRoute;
use crate::domain::guide::model::ChatMessage;

pub struct GreetGuideParams {
    pub route: GuideRoute,
}

#[async_trait]
pub trait GreetGuideUseCase: Send + Sync {
    async fn execute(&self, params: GreetGuideParams) -> ChatMessage;
}
