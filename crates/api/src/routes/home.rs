//! Root endpoint: greeting plus deployment metadata.

use axum::Json;
use serde::Serialize;

use crate::error::ApiError;

pub const WELCOME_MESSAGE: &str = "Merhaba! DevOps projene hoş geldin! 🚀";

/// Fallback when `ENVIRONMENT` is unset.
pub const UNKNOWN_ENVIRONMENT: &str = "unknown";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub environment: String,
    pub hostname: String,
    pub status: &'static str,
    pub version: &'static str,
}

/// Reads `ENVIRONMENT` without caching; a non-Unicode value counts as unset.
pub fn current_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| UNKNOWN_ENVIRONMENT.to_string())
}

pub fn current_hostname() -> Result<String, ApiError> {
    let name = hostname::get()?;
    Ok(name.to_string_lossy().into_owned())
}

/// GET / — greeting with environment name, hostname, status and version.
pub async fn index() -> Result<Json<HomeResponse>, ApiError> {
    let environment = current_environment();
    let hostname = current_hostname()?;
    tracing::debug!(%environment, %hostname, "serving home");

    Ok(Json(HomeResponse {
        message: WELCOME_MESSAGE,
        environment,
        hostname,
        status: "healthy",
        version: VERSION,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_response_field_order() {
        let response = HomeResponse {
            message: WELCOME_MESSAGE,
            environment: "staging".to_string(),
            hostname: "worker-1".to_string(),
            status: "healthy",
            version: "1.0.2",
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"message":"Merhaba! DevOps projene hoş geldin! 🚀","environment":"staging","hostname":"worker-1","status":"healthy","version":"1.0.2"}"#
        );
    }

    #[test]
    fn test_version_tracks_package() {
        assert_eq!(VERSION, "1.0.2");
    }
}
