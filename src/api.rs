//! HTTP routes with Axum

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header::InvalidHeaderValue, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::error::QueryError;
use crate::rooms::RoomBlockRegistry;
use crate::service::{GridSummary, QueryService, Route};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindPathRequest {
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRoomQuery {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct MatchRoomResponse {
    pub room: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub grid: GridSummary,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned by a handler, rendered as `{"error": ...}`.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        let status = match e {
            QueryError::MissingField(_) => StatusCode::BAD_REQUEST,
            QueryError::UnknownRoom { .. } => StatusCode::NOT_FOUND,
            QueryError::UnwalkableLocation { .. } => StatusCode::BAD_REQUEST,
        };
        ApiError::new(status, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

/// CORS policy: any origin unless one is configured.
pub fn cors_layer(allow_origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = match allow_origin {
        Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin)?),
        None => AllowOrigin::from(Any),
    };
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Build the Axum router
pub fn build_router(service: Arc<QueryService>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/get_rooms", get(get_rooms))
        .route("/get_room_blocks", get(get_room_blocks))
        .route("/find_path", post(find_path))
        .route("/match_room", get(match_room))
        .route("/health", get(health))
        .layer(cors)
        .with_state(service)
}

async fn get_rooms(State(service): State<Arc<QueryService>>) -> Json<Vec<String>> {
    Json(service.room_names())
}

async fn get_room_blocks(State(service): State<Arc<QueryService>>) -> Json<RoomBlockRegistry> {
    Json(service.room_blocks().clone())
}

async fn find_path(
    State(service): State<Arc<QueryService>>,
    body: Result<Json<FindPathRequest>, JsonRejection>,
) -> Result<Json<Route>, ApiError> {
    let Json(req) = body?;
    let current = req.current_location.unwrap_or_default();
    let destination = req.destination.unwrap_or_default();
    Ok(Json(service.find_path(&current, &destination)?))
}

async fn match_room(
    State(service): State<Arc<QueryService>>,
    Query(query): Query<MatchRoomQuery>,
) -> Result<Json<MatchRoomResponse>, ApiError> {
    match service.match_room(&query.text) {
        Some(room) => Ok(Json(MatchRoomResponse { room })),
        None => Err(ApiError::new(
            StatusCode::NOT_FOUND,
            format!("no room matches {:?}", query.text),
        )),
    }
}

async fn health(State(service): State<Arc<QueryService>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        grid: service.grid_summary(),
    })
}
