//! Storefront errors and the messages shown for them.

use std::fmt;

use crate::domain::foundation::ValidationError;
use crate::ports::{BackendError, CartStoreError};

/// The user action a backend failure interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    JoinQueue,
    LockSeats,
    CompleteCheckout,
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::JoinQueue => "joining the queue",
            Self::LockSeats => "locking seats",
            Self::CompleteCheckout => "completing checkout",
        };
        f.write_str(s)
    }
}

/// Errors surfaced by storefront handlers.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("{action} failed: {source}")]
    Backend {
        action: UserAction,
        #[source]
        source: BackendError,
    },

    #[error(transparent)]
    Cart(#[from] CartStoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StorefrontError {
    pub fn backend(action: UserAction, source: BackendError) -> Self {
        Self::Backend { action, source }
    }

    /// The blocking message shown to the user.
    ///
    /// Backend rejections show the server's `detail` where the storefront
    /// always did; everything else gets a fixed fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend { action, source } => backend_message(*action, source),
            Self::Cart(e) => format!("Saved seat selection is unusable: {}", e),
            Self::Validation(e) => e.to_string(),
        }
    }
}

fn backend_message(action: UserAction, err: &BackendError) -> String {
    match (action, err) {
        (UserAction::JoinQueue, BackendError::Http { detail, .. }) => detail
            .clone()
            .unwrap_or_else(|| "Error creating group".to_string()),
        (UserAction::JoinQueue, _) => "Network error creating group".to_string(),

        (UserAction::LockSeats, BackendError::Http { detail, body, .. }) => {
            format!("Seat lock failed: {}", detail.as_deref().unwrap_or(body))
        }
        (UserAction::LockSeats, _) => "Error locking seats.".to_string(),

        (UserAction::CompleteCheckout, BackendError::Http { detail, .. }) => detail
            .clone()
            .unwrap_or_else(|| "Error completing purchase".to_string()),
        (UserAction::CompleteCheckout, _) => "Error completing purchase".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(action: UserAction, err: BackendError) -> String {
        StorefrontError::backend(action, err).user_message()
    }

    #[test]
    fn join_shows_detail_or_fallback() {
        assert_eq!(
            message(UserAction::JoinQueue, BackendError::rejected(409, "Event sold out")),
            "Event sold out"
        );
        assert_eq!(
            message(UserAction::JoinQueue, BackendError::http(500, "oops")),
            "Error creating group"
        );
        assert_eq!(
            message(UserAction::JoinQueue, BackendError::network("refused")),
            "Network error creating group"
        );
    }

    #[test]
    fn lock_prefixes_detail_or_raw_body() {
        assert_eq!(
            message(
                UserAction::LockSeats,
                BackendError::rejected(409, "Seat 101-A-1 is no longer available")
            ),
            "Seat lock failed: Seat 101-A-1 is no longer available"
        );
        assert_eq!(
            message(UserAction::LockSeats, BackendError::http(400, r#"{"error":"bad"}"#)),
            r#"Seat lock failed: {"error":"bad"}"#
        );
        assert_eq!(
            message(UserAction::LockSeats, BackendError::Timeout { timeout_secs: 30 }),
            "Error locking seats."
        );
    }

    #[test]
    fn complete_shows_detail_or_fallback() {
        assert_eq!(
            message(UserAction::CompleteCheckout, BackendError::rejected(410, "Hold expired")),
            "Hold expired"
        );
        assert_eq!(
            message(UserAction::CompleteCheckout, BackendError::http(502, "")),
            "Error completing purchase"
        );
    }

    #[test]
    fn display_names_the_action() {
        let err = StorefrontError::backend(UserAction::LockSeats, BackendError::network("refused"));
        assert_eq!(err.to_string(), "locking seats failed: network error: refused");
    }
}
