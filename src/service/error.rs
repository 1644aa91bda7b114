//! Order service errors

use thiserror::Error;

use crate::storage::StorageError;

/// Outcome of a failed booking.
///
/// `Validation` and `RoomNotAvailable` are client problems. `Internal`
/// means the ledger failed and the booking status is unknown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("no correct order")]
    Validation,

    #[error("hotel room is not available for selected dates")]
    RoomNotAvailable,

    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

impl OrderError {
    pub(crate) fn internal(context: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| OrderError::Internal { context, source }
    }

    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::Validation => "INVALID_ORDER",
            OrderError::RoomNotAvailable => "ROOM_NOT_AVAILABLE",
            OrderError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            OrderError::Validation | OrderError::RoomNotAvailable => 400,
            OrderError::Internal { .. } => 500,
        }
    }
}
