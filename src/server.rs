//! HTTP API exposing the audit pipeline.
//!
//! `POST /api/analyze` runs one audit, `GET /api/health` is a liveness probe
//! and `GET /` serves a short info page.

use crate::audit::Auditor;
use crate::reporter::Reporter;
use actix_web::{
    App, HttpResponse, HttpServer, ResponseError, error, http::StatusCode, web,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SERVICE_NAME: &str = "pagescout";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub service: String,
}

/// Failures surfaced to API callers.
#[derive(Debug)]
pub enum ApiError {
    MissingUrl,
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingUrl => write!(f, "URL is required"),
            ApiError::BadRequest(message) | ApiError::Internal(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

async fn analyze(
    auditor: web::Data<Auditor>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let url = body
        .into_inner()
        .url
        .filter(|url| !url.trim().is_empty())
        .ok_or(ApiError::MissingUrl)?;

    let result = auditor.analyze(&url).await;
    let response = Reporter::build_response(result);

    let body = serde_json::to_string(&response).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize audit result");
        ApiError::Internal(e.to_string())
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthBody {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_PAGE)
}

const INDEX_PAGE: &str = r#"<html>
<head><title>Pagescout - Website Audit API</title></head>
<body style="font-family: Arial, sans-serif; max-width: 600px; margin: 50px auto; padding: 20px;">
    <h1>Website Audit API</h1>
    <hr>
    <h3>Endpoints:</h3>
    <ul>
        <li><code>POST /api/analyze</code> - Audit a website</li>
        <li><code>GET /api/health</code> - Health check</li>
    </ul>
    <h3>Example request:</h3>
    <pre style="background: #f5f5f5; padding: 15px; border-radius: 5px;">
POST /api/analyze
Content-Type: application/json

{
    "url": "https://example.com"
}
    </pre>
</body>
</html>
"#;

/// Registers the routes and shared state. Used by [`serve`] and by tests.
pub fn configure(auditor: Auditor) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let message = format!("Invalid request body: {}", err);
            error::InternalError::from_response(
                err,
                ApiError::BadRequest(message).error_response(),
            )
            .into()
        });

        cfg.app_data(web::Data::new(auditor))
            .app_data(json_config)
            .route("/api/analyze", web::post().to(analyze))
            .route("/api/health", web::get().to(health))
            .route("/", web::get().to(index));
    }
}

pub async fn serve(bind: &str, auditor: Auditor) -> Result<()> {
    tracing::info!(bind = %bind, "Starting HTTP API");

    HttpServer::new(move || App::new().configure(configure(auditor.clone())))
        .bind(bind)
        .with_context(|| format!("Failed to bind HTTP API on {}", bind))?
        .run()
        .await
        .context("HTTP API terminated with an error")?;

    Ok(())
}
