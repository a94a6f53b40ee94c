//! HTTP surface of the contact book.
//!
//! A thin axum layer over [`ContactService`]: routing, JSON bodies, status
//! codes, and a permissive CORS policy so a browser front-end on any origin
//! can talk to the service.

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{from_fn, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::service::ContactService;

/// Shared state behind every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The contact service all endpoints operate on.
    pub service: ContactService,
}

/// Body of a create request.
///
/// Fields default to empty strings so an absent field is indistinguishable
/// from an empty one; both fail the presence check with a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NewContactBody {
    name: String,
    phone: String,
    email: String,
}

/// Body of an update request. Only the mutable fields; the name comes from
/// the path.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UpdateContactBody {
    phone: String,
    email: String,
}

/// Query string of the search endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchParams {
    q: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::DuplicateContact { .. } => StatusCode::CONFLICT,
            Self::ContactNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Build the application router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/api/contacts", get(list_handler).post(add_handler))
        .route("/api/contacts/search", get(search_handler))
        .route(
            "/api/contacts/{name}",
            put(update_handler).delete(delete_handler),
        )
        .layer(from_fn(cors_middleware))
        .with_state(state)
}

/// Bind and serve the HTTP API until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(config: &Config, service: ContactService) -> Result<()> {
    let router = build_router(AppState { service });
    let addr = config.listen_addr();

    let listener = TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn healthz_handler() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

async fn add_handler(
    State(state): State<AppState>,
    Json(body): Json<NewContactBody>,
) -> Result<Response> {
    state.service.add(&body.name, &body.phone, &body.email).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Contact added successfully" })),
    )
        .into_response())
}

async fn list_handler(State(state): State<AppState>) -> Result<Response> {
    let contacts = state.service.list().await?;
    Ok(Json(contacts).into_response())
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response> {
    let contacts = state.service.search(&params.q).await?;
    Ok(Json(contacts).into_response())
}

async fn update_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateContactBody>,
) -> Result<Response> {
    state.service.update(&name, &body.phone, &body.email).await?;
    Ok(Json(json!({ "message": "Contact updated" })).into_response())
}

async fn delete_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response> {
    state.service.remove(&name).await?;
    Ok(Json(json!({ "message": "Contact deleted" })).into_response())
}

/// Allow cross-origin requests from any origin.
///
/// Preflight OPTIONS requests are answered here without reaching the router;
/// every other response gets the allow-origin header stamped on the way out.
async fn cors_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        let headers = resp.headers_mut();
        headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
        headers.insert(
            "access-control-allow-methods",
            HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
        );
        headers.insert(
            "access-control-allow-headers",
            HeaderValue::from_static("content-type"),
        );
        return resp;
    }

    let mut resp = next.run(req).await;
    resp.headers_mut()
        .insert("access-control-allow-origin", HeaderValue::from_static("*"));
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_400() {
        let resp = Error::MissingFields.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_error_maps_to_409() {
        let resp = Error::duplicate("Alice").into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_error_maps_to_404() {
        let resp = Error::not_found("Bob").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_maps_to_500() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let resp = Error::from(io_err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_new_contact_body_defaults_missing_fields_to_empty() {
        let body: NewContactBody = serde_json::from_str("{\"name\": \"Alice\"}").unwrap();
        assert_eq!(body.name, "Alice");
        assert_eq!(body.phone, "");
        assert_eq!(body.email, "");
    }

    #[test]
    fn test_search_params_default_to_empty() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.q, "");
    }
}
