use std::sync::Arc;

use logger::TracingLogger;
use persistence::appointment::repository::AppointmentRepositoryPostgres;
use persistence::comparison::selection_storage::SelectionStoragePostgres;
use persistence::contact::repository::ContactMessageRepositoryPostgres;
use persistence::guide::chat_log_repository::ChatLogRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use openai::client::OpenAIClient;
use openai::guide_responder::GuideResponderOpenAI;
use twilio::client::TwilioClient;
use twilio::sms_notifier::TwilioSmsNotifier;

use business::application::appointment::book::BookAppointmentUseCaseImpl;
use business::application::comparison::build_sheet::CompareProductsUseCaseImpl;
use business::application::comparison::clear::ClearSelectionUseCaseImpl;
use business::application::comparison::get::GetSelectionUseCaseImpl;
use business::application::comparison::sessions::SelectionSessions;
use business::application::comparison::toggle::ToggleSelectionUseCaseImpl;
use business::application::contact::send::SendContactMessageUseCaseImpl;
use business::application::guide::greet::GreetGuideUseCaseImpl;
use business::application::guide::reply::GuideReplyUseCaseImpl;
use business::application::product::browse::BrowseCatalogUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;

use crate::config::media_config::MediaConfig;
use crate::config::openai_config::OpenAIConfig;
use crate::config::twilio_config::TwilioConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub comparison_api: crate::api::comparison::routes::ComparisonApi,
    pub guide_api: crate::api::guide::routes::GuideApi,
    pub appointment_api: crate::api::appointment::routes::AppointmentApi,
    pub contact_api: crate::api::contact::routes::ContactApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let selection_storage = Arc::new(SelectionStoragePostgres::new(pool.clone()));
        let chat_log_repository = Arc::new(ChatLogRepositoryPostgres::new(pool.clone()));
        let appointment_repository = Arc::new(AppointmentRepositoryPostgres::new(pool.clone()));
        let contact_repository = Arc::new(ContactMessageRepositoryPostgres::new(pool));

        let openai_config = OpenAIConfig::from_env();
        let openai_client = OpenAIClient::new(openai_config.api_key, openai_config.model);
        let guide_responder = Arc::new(GuideResponderOpenAI::new(openai_client));

        let twilio_config = TwilioConfig::from_env();
        let twilio_client = TwilioClient::new(
            twilio_config.account_sid,
            twilio_config.auth_token,
            twilio_config.from_number,
            twilio_config.notify_number,
        );
        let sms_notifier = Arc::new(TwilioSmsNotifier::new(twilio_client));

        let media_config = MediaConfig::from_env();
        let images = media_config.image_base();

        // Catalog use cases
        let browse_use_case = Arc::new(BrowseCatalogUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Comparison use cases
        let sessions = Arc::new(SelectionSessions::new(selection_storage, logger.clone()));
        let toggle_use_case = Arc::new(ToggleSelectionUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let get_selection_use_case = Arc::new(GetSelectionUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearSelectionUseCaseImpl {
            sessions,
            logger: logger.clone(),
        });
        let compare_use_case = Arc::new(CompareProductsUseCaseImpl {
            repository: product_repository.clone(),
            images: images.clone(),
            logger: logger.clone(),
        });

        // Guide use cases
        let reply_use_case = Arc::new(GuideReplyUseCaseImpl {
            responder: guide_responder,
            products: product_repository.clone(),
            chat_log: chat_log_repository,
            logger: logger.clone(),
        });
        let greet_use_case = Arc::new(GreetGuideUseCaseImpl {
            logger: logger.clone(),
        });

        // Appointment use cases
        let book_use_case = Arc::new(BookAppointmentUseCaseImpl {
            repository: appointment_repository,
            logger: logger.clone(),
        });

        // Contact use cases
        let send_use_case = Arc::new(SendContactMessageUseCaseImpl {
            repository: contact_repository,
            notifier: sms_notifier,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            browse_use_case,
            get_by_id_use_case,
            images,
        );

        let comparison_api = crate::api::comparison::routes::ComparisonApi::new(
            toggle_use_case,
            get_selection_use_case,
            clear_use_case,
            compare_use_case,
        );

        let guide_api = crate::api::guide::routes::GuideApi::new(reply_use_case, greet_use_case);

        let appointment_api = crate::api::appointment::routes::AppointmentApi::new(book_use_case);

        let contact_api = crate::api::contact::routes::ContactApi::new(send_use_case);

        Ok(Self {
            health_api,
            catalog_api,
            comparison_api,
            guide_api,
            appointment_api,
            contact_api,
        })
    }
}
