// src/shared/outcome.rs

use serde::Serialize;

//
// ──────────────────────────────────────────────────────────
// Failure taxonomy
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    NotFound,
    Conflict,
    BadRequest,
    Unauthorized,
    Forbidden,
    /// Persistence or infrastructure fault. Never produced by domain rules.
    Internal,
}

impl FailureKind {
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::NotFound => "NOT_FOUND",
            FailureKind::Conflict => "CONFLICT",
            FailureKind::BadRequest => "BAD_REQUEST",
            FailureKind::Unauthorized => "UNAUTHORIZED",
            FailureKind::Forbidden => "FORBIDDEN",
            FailureKind::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Failed outcome of a service operation.
///
/// `message` is surfaced verbatim to API callers, so it must only ever hold a
/// human-readable reason. Storage detail goes to the log, not here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

pub type Outcome<T> = Result<T, Failure>;

pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FailureKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Conflict, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(FailureKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Forbidden, message)
    }

    /// Logs `detail` and returns a failure carrying only the generic message.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!("internal failure: {}", detail);
        Self::new(FailureKind::Internal, INTERNAL_MESSAGE)
    }

    pub fn is(&self, kind: FailureKind) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_failure_hides_detail() {
        let failure = Failure::internal("relation \"projects\" does not exist");

        assert_eq!(failure.kind, FailureKind::Internal);
        assert_eq!(failure.message, INTERNAL_MESSAGE);
    }

    #[test]
    fn display_is_the_message() {
        let failure = Failure::not_found("Project not found.");
        assert_eq!(failure.to_string(), "Project not found.");
        assert!(failure.is(FailureKind::NotFound));
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(FailureKind::Conflict.code(), "CONFLICT");
        assert_eq!(FailureKind::Forbidden.code(), "FORBIDDEN");
    }
}
