//! Error types for the gallery surface.
//!
//! Identity resolution and group composition are total and have no error
//! type; failures only arise at the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors returned by gallery handlers.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// No gallery page exists for the requested slug.
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// A display token could not be parsed.
    #[error(transparent)]
    InvalidToken(#[from] crate::identity::TokenParseError),
}

impl GalleryError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownComponent(_) => StatusCode::NOT_FOUND,
            Self::InvalidToken(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        tracing::warn!(name: "gallery.request.rejected", error = %self, "Request rejected");
        (self.status(), self.to_string()).into_response()
    }
}
