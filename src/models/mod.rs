//! Shared models for the platform wallet REST API.
//!
//! Contains the response envelope every endpoint wraps its payload in,
//! plus the balance and mutation payload models.

pub mod balance;
pub mod mutation;

use serde::Deserialize;

/// Envelope wrapping every REST response.
///
/// The platform reports request-level failures in-band: `success` is
/// `false` and `message` carries the reason, with `data` absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload, mapping an error envelope to a typed error.
    ///
    /// # Errors
    ///
    /// Returns [`DompetError::Api`](crate::DompetError::Api) when the
    /// envelope reports failure, or
    /// [`DompetError::Malformed`](crate::DompetError::Malformed) when a
    /// successful envelope carries no payload.
    pub fn into_data(self) -> crate::Result<T> {
        if !self.success {
            let message = if self.message.is_empty() {
                "request rejected without a message".to_string()
            } else {
                self.message
            };
            return Err(crate::DompetError::Api(message));
        }
        self.data.ok_or_else(|| {
            crate::DompetError::Malformed("successful envelope without data".to_string())
        })
    }
}
