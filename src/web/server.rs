//! HTTP Server
//! axum routes serving the page shell, its layout and callback graph, and the
//! component update endpoint. The dataset is shared read-only across requests.

use crate::charts::Figure;
use crate::data::{LaunchDataset, PayloadRange};
use crate::web::callbacks::{CallbackError, CallbackRegistry, Dependency, ViewContext};
use crate::web::layout::{dashboard_layout, Component};
use crate::web::page::INDEX_HTML;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Everything the handlers share. Built once at startup, never mutated.
pub struct AppState {
    pub view: ViewContext,
    pub layout: Component,
    pub callbacks: CallbackRegistry,
}

impl AppState {
    pub fn new(dataset: LaunchDataset, title: &str) -> Self {
        let initial_range = PayloadRange::of_dataset(&dataset);
        let view = ViewContext::new(dataset);
        let layout = dashboard_layout(title, &view.sites, initial_range);
        Self {
            view,
            layout,
            callbacks: CallbackRegistry::dashboard(),
        }
    }
}

/// Error body: `{"error_code": ..., "error_message": ...}`.
#[derive(Debug)]
pub struct ApiError(CallbackError);

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            CallbackError::View(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.0 {
            CallbackError::UnknownOutput(_) => "UNKNOWN_OUTPUT",
            CallbackError::MissingInput { .. } => "MISSING_INPUT",
            CallbackError::WrongType { .. } => "WRONG_INPUT_TYPE",
            CallbackError::InvalidSelection(_) => "INVALID_SELECTION",
            CallbackError::View(_) => "VIEW_FAILED",
        }
    }
}

impl From<CallbackError> for ApiError {
    fn from(err: CallbackError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "component update failed");
        } else {
            tracing::warn!(error = %self.0, "rejected component update");
        }

        let body = json!({
            "error_code": self.error_code(),
            "error_message": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/_dash-layout", get(layout_handler))
        .route("/_dash-dependencies", get(dependencies_handler))
        .route("/_dash-update-component", post(update_component_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn layout_handler(State(state): State<Arc<AppState>>) -> Json<Component> {
    Json(state.layout.clone())
}

async fn dependencies_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Dependency>> {
    Json(state.callbacks.dependencies())
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub output: String,
    #[serde(default)]
    pub inputs: Map<String, Value>,
}

/// Recompute one output region from the current selector values.
async fn update_component_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<Figure>, ApiError> {
    let figure = state
        .callbacks
        .dispatch(&state.view, &request.output, &request.inputs)?;
    tracing::debug!(output = %request.output, title = figure.title(), "component updated");
    Ok(Json(figure))
}
