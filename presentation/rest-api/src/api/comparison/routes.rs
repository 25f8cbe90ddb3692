use std::sync::Arc;

use poem_openapi::{
    Object, OpenApi,
    param::{Header, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::comparison::use_cases::build_sheet::{
    CompareProductsParams, CompareProductsUseCase,
};
use business::domain::comparison::use_cases::clear::{ClearSelectionParams, ClearSelectionUseCase};
use business::domain::comparison::use_cases::get::{GetSelectionParams, GetSelectionUseCase};
use business::domain::comparison::use_cases::toggle::{
    ToggleSelectionParams, ToggleSelectionUseCase,
};
use business::domain::shared::value_objects::SessionKey;

use crate::api::comparison::dto::{ComparisonResponse, SelectionResponse};
use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;

/// Request to toggle one product in the comparison tray.
#[derive(Debug, Clone, Object)]
pub struct ToggleSelectionRequest {
    /// Product unique identifier
    pub product_id: String,
}

pub struct ComparisonApi {
    toggle_use_case: Arc<dyn ToggleSelectionUseCase>,
    get_use_case: Arc<dyn GetSelectionUseCase>,
    clear_use_case: Arc<dyn ClearSelectionUseCase>,
    compare_use_case: Arc<dyn CompareProductsUseCase>,
}

impl ComparisonApi {
    pub fn new(
        toggle_use_case: Arc<dyn ToggleSelectionUseCase>,
        get_use_case: Arc<dyn GetSelectionUseCase>,
        clear_use_case: Arc<dyn ClearSelectionUseCase>,
        compare_use_case: Arc<dyn CompareProductsUseCase>,
    ) -> Self {
        Self {
            toggle_use_case,
            get_use_case,
            clear_use_case,
            compare_use_case,
        }
    }
}

/// Comparison API
///
/// Endpoints for the per-session comparison tray and the side-by-side
/// comparison sheet.
#[OpenApi]
impl ComparisonApi {
    /// Get the comparison selection
    ///
    /// Returns the visitor's current tray: picked ids in order, the count,
    /// and the compare link once two or more models are picked.
    #[oai(path = "/compare/selection", method = "get", tag = "ApiTags::Comparison")]
    async fn get_selection(
        &self,
        /// Opaque key identifying the visitor's session
        #[oai(name = "X-Session-Key")]
        session: Header<String>,
    ) -> SelectionActionResponse {
        let session = match SessionKey::parse(&session.0) {
            Ok(session) => session,
            Err(_) => {
                return SelectionActionResponse::BadRequest(ErrorResponse::validation(
                    "session.invalid_key",
                ));
            }
        };

        let view = self
            .get_use_case
            .execute(GetSelectionParams { session })
            .await;

        SelectionActionResponse::Ok(Json(view.into()))
    }

    /// Toggle a product in the selection
    ///
    /// Adds the product to the tray, or removes it when already picked.
    /// Returns the tray as it stands after the change.
    #[oai(
        path = "/compare/selection/toggle",
        method = "post",
        tag = "ApiTags::Comparison"
    )]
    async fn toggle_selection(
        &self,
        /// Opaque key identifying the visitor's session
        #[oai(name = "X-Session-Key")]
        session: Header<String>,
        body: Json<ToggleSelectionRequest>,
    ) -> SelectionActionResponse {
        let session = match SessionKey::parse(&session.0) {
            Ok(session) => session,
            Err(_) => {
                return SelectionActionResponse::BadRequest(ErrorResponse::validation(
                    "session.invalid_key",
                ));
            }
        };

        let product_id = match Uuid::parse_str(&body.0.product_id) {
            Ok(product_id) => product_id,
            Err(_) => {
                return SelectionActionResponse::BadRequest(ErrorResponse::validation(
                    "product.invalid_id",
                ));
            }
        };

        let view = self
            .toggle_use_case
            .execute(ToggleSelectionParams {
                session,
                product_id,
            })
            .await;

        SelectionActionResponse::Ok(Json(view.into()))
    }

    /// Clear the comparison selection
    ///
    /// Empties the visitor's tray and returns the now-empty state.
    #[oai(
        path = "/compare/selection",
        method = "delete",
        tag = "ApiTags::Comparison"
    )]
    async fn clear_selection(
        &self,
        /// Opaque key identifying the visitor's session
        #[oai(name = "X-Session-Key")]
        session: Header<String>,
    ) -> SelectionActionResponse {
        let session = match SessionKey::parse(&session.0) {
            Ok(session) => session,
            Err(_) => {
                return SelectionActionResponse::BadRequest(ErrorResponse::validation(
                    "session.invalid_key",
                ));
            }
        };

        let view = self
            .clear_use_case
            .execute(ClearSelectionParams { session })
            .await;

        SelectionActionResponse::Ok(Json(view.into()))
    }

    /// Compare products side by side
    ///
    /// Builds the comparison sheet for the comma-separated product ids.
    /// Always answers 200: when nothing usable is requested or nothing
    /// matches, the response carries an empty state message instead of rows.
    #[oai(path = "/compare", method = "get", tag = "ApiTags::Comparison")]
    async fn compare(
        &self,
        /// Comma-separated product ids, e.g. "id1,id2,id3"
        ids: Query<Option<String>>,
    ) -> CompareResponse {
        let view = self
            .compare_use_case
            .execute(CompareProductsParams {
                raw_ids: ids.0.unwrap_or_default(),
            })
            .await;

        CompareResponse::Ok(Json(view.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SelectionActionResponse {
    #[oai(status = 200)]
    Ok(Json<SelectionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CompareResponse {
    #[oai(status = 200)]
    Ok(Json<ComparisonResponse>),
}
