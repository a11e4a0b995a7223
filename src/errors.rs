use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::configuration::Environment;

/// Failure surfaced by a handler. Carries the environment it was raised in so
/// the response can decide how much detail to leak.
#[derive(thiserror::Error, Debug)]
#[error("{source}")]
pub struct ApiError {
    environment: Environment,
    #[source]
    source: anyhow::Error,
}

impl ApiError {
    pub fn new(environment: Environment, source: impl Into<anyhow::Error>) -> ApiError {
        ApiError {
            environment,
            source: source.into(),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        if self.environment == Environment::Production {
            return HttpResponse::InternalServerError().json(json!({ "error": "server error" }));
        }

        tracing::error!("Unhandled error: {:?}", self.source);
        HttpResponse::InternalServerError().json(json!({
            "error": self.source.to_string(),
            "details": format!("{:?}", self.source),
        }))
    }
}
