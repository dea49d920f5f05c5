//! Externally visible rejection codes.

use std::fmt;

/// FSPIOP error code carried on the error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `2000` - generic server error.
    GenericServer,
    /// `3100` - generic validation error.
    GenericValidation,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenericServer => "2000",
            Self::GenericValidation => "3100",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable reason paired with an [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    BadRequest,
    Forbidden,
    NotFound,
    ServerError,
}

impl RejectReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::ServerError => "Server Error",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(code, reason)` pair reported on the error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rejection {
    pub code: ErrorCode,
    pub reason: RejectReason,
}

impl Rejection {
    /// `3100` / `Bad Request`: payload not pending, credential inactive, bad signature.
    #[must_use]
    pub const fn bad_request() -> Self {
        Self {
            code: ErrorCode::GenericValidation,
            reason: RejectReason::BadRequest,
        }
    }

    /// `2000` / `Forbidden`: no scope grant covers the requested account.
    #[must_use]
    pub const fn forbidden() -> Self {
        Self {
            code: ErrorCode::GenericServer,
            reason: RejectReason::Forbidden,
        }
    }

    /// `2000` / `Not Found`: consent or scopes absent.
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            code: ErrorCode::GenericServer,
            reason: RejectReason::NotFound,
        }
    }

    /// `2000` / `Server Error`: store failure.
    #[must_use]
    pub const fn server_error() -> Self {
        Self {
            code: ErrorCode::GenericServer,
            reason: RejectReason::ServerError,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.reason)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn codes_and_reasons_match_error_registry() {
        let cases = [
            (Rejection::bad_request(), "3100", "Bad Request"),
            (Rejection::forbidden(), "2000", "Forbidden"),
            (Rejection::not_found(), "2000", "Not Found"),
            (Rejection::server_error(), "2000", "Server Error"),
        ];

        for (rejection, code, reason) in cases {
            assert_eq!(rejection.code.as_str(), code);
            assert_eq!(rejection.reason.as_str(), reason);
        }
    }

    #[test]
    fn display_includes_code_and_reason() {
        assert_eq!(Rejection::forbidden().to_string(), "2000 (Forbidden)");
    }
}
