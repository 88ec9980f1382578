//! HTTP server mode for converting from a browser or another tool

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ConversionOptions;
use crate::converter::{self, ConverterState};
use crate::error::{Error, Result};

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    /// Options used when a request does not send its own
    defaults: ConversionOptions,
}

/// Request body for the convert endpoint
#[derive(Debug, Deserialize)]
struct ConvertRequest {
    /// Raw JSON text, exactly as typed
    #[serde(default)]
    input: String,
    /// Partial options; missing fields come from the server defaults
    #[serde(default)]
    options: Option<Value>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router with all routes and layers
fn router(defaults: ConversionOptions) -> Router {
    let state = AppState { defaults };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/options", get(default_options))
        .route("/convert", post(convert))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(defaults: ConversionOptions, port: u16) -> Result<()> {
    let app = router(defaults);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// The options applied when a request omits them
async fn default_options(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::success(state.defaults.clone()))
}

/// Merge request options over the server defaults
fn merge_options(
    defaults: &ConversionOptions,
    overrides: Option<Value>,
) -> Result<ConversionOptions> {
    let Some(overrides) = overrides else {
        return Ok(defaults.clone());
    };
    let Value::Object(overrides) = overrides else {
        return Err(Error::config("options must be an object"));
    };

    let mut merged = serde_json::to_value(defaults)?;
    if let Value::Object(base) = &mut merged {
        base.extend(overrides);
    }
    ConversionOptions::from_value(merged)
}

/// Bad input and bad options are the caller's fault; anything else is ours
fn error_status(err: &Error) -> StatusCode {
    if err.is_conversion_error() || matches!(err, Error::Config { .. }) {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn error_response(err: &Error) -> (StatusCode, Json<Value>) {
    let body =
        serde_json::to_value(ApiResponse::<()>::error(err.to_string())).unwrap_or_default();
    (error_status(err), Json(body))
}

/// Convert one input. Blank input answers with an empty, successful state.
async fn convert(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConvertRequest>,
) -> impl IntoResponse {
    let options = match merge_options(&state.defaults, request.options) {
        Ok(options) => options,
        Err(e) => return error_response(&e),
    };

    match converter::convert(&request.input, &options) {
        Ok(result) => {
            let body = ConverterState {
                is_valid: result.is_some(),
                detected_type: result.as_ref().map(|c| c.detected_type),
                output: result.map(|c| c.envelope),
                error: None,
            };
            let body = serde_json::to_value(ApiResponse::success(body)).unwrap_or_default();
            (StatusCode::OK, Json(body))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Conversion failed");
            error_response(&e)
        }
    }
}
