//! Error types shared by services, hooks and views.

use crate::models::FormField;

/// Errors from backend API calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure (backend unreachable, CORS, ...).
    #[error("{0}")]
    Network(String),
    /// The requested package does not exist.
    #[error("Package not found")]
    NotFound,
    /// Backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Response body was not the JSON we expected.
    #[error("Invalid response from server: {0}")]
    Decode(String),
    /// Request body could not be serialized.
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// A failed client-side check on the update form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    pub fn invalid(field: FormField) -> Self {
        Self {
            field,
            message: format!("{} is invalid", field.label()),
        }
    }
}

/// localStorage access failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not write `{0}` to localStorage")]
    Write(String),
    #[error("could not remove `{0}` from localStorage")]
    Remove(String),
}

/// Login failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid security key. Please try again.")]
    InvalidKey,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_server_message() {
        let err = ApiError::Status { status: 400, message: "Bad date".into() };
        assert_eq!(err.to_string(), "Bad date");
    }

    #[test]
    fn validation_message_uses_field_label() {
        let err = ValidationError::invalid(FormField::DeliveredDateTime);
        assert_eq!(err.to_string(), "Delivered Date Time is invalid");
    }
}
