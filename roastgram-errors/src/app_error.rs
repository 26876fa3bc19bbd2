use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Pengguna tidak ditemukan")]
    NotFound,

    #[error("Gagal mengambil profil Instagram: {0}")]
    ProfileFetch(String),

    #[error("Terlalu banyak request")]
    RateLimited,

    #[error("Gagal generate roasting: {0}")]
    Generation(String),

    #[error("Konfigurasi tidak valid: {0}")]
    Config(String),
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Message safe to show to the client. Upstream details stay in the logs.
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidInput(msg) => msg,
            Self::NotFound | Self::ProfileFetch(_) => "Error fetching Instagram profile",
            Self::RateLimited => "Too many requests, please try again later.",
            Self::Generation(_) => "Error generating roast",
            Self::Config(_) => "Internal server error",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::RateLimited)
    }
}

#[cfg(feature = "http")]
mod http_impl {
    use super::{AppError, ErrorBody};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            match self {
                AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                AppError::NotFound
                | AppError::ProfileFetch(_)
                | AppError::Generation(_)
                | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = self.status_code();
            if !self.is_client_error() {
                tracing::error!("{}", self);
            }
            let body = ErrorBody {
                message: self.user_message().to_string(),
            };
            (status, Json(body)).into_response()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        async fn body_of(err: AppError) -> (StatusCode, ErrorBody) {
            let response = err.into_response();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            (status, serde_json::from_slice(&bytes).unwrap())
        }

        #[tokio::test]
        async fn test_invalid_input_keeps_message() {
            let (status, body) = body_of(AppError::invalid_input("Username is required")).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.message, "Username is required");
        }

        #[tokio::test]
        async fn test_not_found_is_hidden_behind_500() {
            let (status, body) = body_of(AppError::NotFound).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.message, "Error fetching Instagram profile");
        }

        #[tokio::test]
        async fn test_upstream_detail_not_leaked() {
            let (status, body) =
                body_of(AppError::Generation("quota exceeded for key abc".into())).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.message, "Error generating roast");
        }

        #[tokio::test]
        async fn test_rate_limited() {
            let (status, _) = body_of(AppError::RateLimited).await;
            assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        }
    }
}
