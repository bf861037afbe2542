use crate::adapters::html;
use crate::domain::ports::BingoApi;
use crate::utils::error::BingoError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn BingoApi>,
    pub resource_path: Arc<str>,
}

impl AppState {
    pub fn new(api: Arc<dyn BingoApi>, resource_path: impl Into<Arc<str>>) -> Self {
        Self {
            api,
            resource_path: resource_path.into(),
        }
    }
}

impl IntoResponse for BingoError {
    fn into_response(self) -> Response {
        match &self {
            BingoError::NotFound { .. } => {
                tracing::debug!("{}", self);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            _ => {
                tracing::error!(
                    "request failed: {} (Category: {:?}, Severity: {:?})",
                    self,
                    self.category(),
                    self.severity()
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(leaderboard))
        .route("/.well-known/healthz", get(health))
        .route("/:identifier", get(card))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn card(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Html<String>, BingoError> {
    let page = state.api.card(&identifier).await?;
    tracing::info!(identifier = %page.identifier, visits = page.visits, "served card");
    Ok(Html(html::card_page(&page, &state.resource_path)))
}

async fn leaderboard(State(state): State<AppState>) -> Html<String> {
    let entries = state.api.leaderboard().await;
    Html(html::leaderboard_page(&entries))
}
