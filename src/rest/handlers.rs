use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::storage::CatalogStore;

use super::AppState;

/// Body of every 500 from the catalog endpoint. Carries no error detail.
pub const SERVER_ERROR_BODY: &str = "Ошибка сервера";

pub async fn list_cheeses<S: CatalogStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> Response {
    match state.storage.find_all() {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => {
            log::error!("Failed to load cheeses: {:?}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
        }
    }
}
