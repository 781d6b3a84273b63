// Domain errors - What every failed route call resolves with
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    InvalidRequest,
    RateLimited,
    Server,
    UnexpectedStatus,
    Transport,
    Decode,
    Configuration,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidRequest => "invalid request",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::Server => "server error",
            ErrorKind::UnexpectedStatus => "unexpected status",
            ErrorKind::Transport => "transport error",
            ErrorKind::Decode => "decode error",
            ErrorKind::Configuration => "configuration error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failure reported for a route call.
///
/// `tip` carries the server's suggestion when the API sent one, `cause` the
/// underlying transport or decoding failure when there was one.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub tip: Option<String>,
    pub cause: Option<String>,
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            tip: None,
            cause: None,
            status: None,
        }
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    pub fn with_cause(mut self, cause: impl fmt::Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Non-empty, ordered list of errors for one failed call.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", join_messages(.first, .rest))]
pub struct ApiErrors {
    #[source]
    first: ApiError,
    rest: Vec<ApiError>,
}

fn join_messages(first: &ApiError, rest: &[ApiError]) -> String {
    std::iter::once(first)
        .chain(rest)
        .map(ApiError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type RouteResult<T> = Result<T, ApiErrors>;

impl ApiErrors {
    pub fn single(error: ApiError) -> Self {
        Self {
            first: error,
            rest: Vec::new(),
        }
    }

    /// Returns `None` for an empty list
    pub fn from_vec(errors: Vec<ApiError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    pub fn first(&self) -> &ApiError {
        &self.first
    }

    /// Kind of the first (primary) error
    pub fn kind(&self) -> ErrorKind {
        self.first.kind
    }

    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        self.iter().any(|e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApiError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn into_vec(self) -> Vec<ApiError> {
        let mut errors = Vec::with_capacity(1 + self.rest.len());
        errors.push(self.first);
        errors.extend(self.rest);
        errors
    }
}

impl From<ApiError> for ApiErrors {
    fn from(error: ApiError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for ApiErrors {
    type Item = ApiError;
    type IntoIter = std::vec::IntoIter<ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(ApiErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_order_is_kept() {
        let errors = ApiErrors::from_vec(vec![
            ApiError::new(ErrorKind::InvalidRequest, "name is too long"),
            ApiError::new(ErrorKind::InvalidRequest, "energy is unknown"),
        ])
        .unwrap();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first().message, "name is too long");
        assert!(errors.has_kind(ErrorKind::InvalidRequest));
        assert!(!errors.has_kind(ErrorKind::Server));
        assert_eq!(
            errors.to_string(),
            "invalid request: name is too long; invalid request: energy is unknown"
        );

        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["name is too long", "energy is unknown"]);
    }

    #[test]
    fn test_builder_fields() {
        let error = ApiError::new(ErrorKind::Unauthorized, "Token has expired")
            .with_tip("Refresh the token")
            .with_status(401);

        assert_eq!(error.tip.as_deref(), Some("Refresh the token"));
        assert_eq!(error.status, Some(401));
        assert!(error.cause.is_none());
        assert_eq!(error.to_string(), "unauthorized: Token has expired");
    }

    #[test]
    fn test_source_is_first_error() {
        use std::error::Error as _;

        let errors = ApiErrors::from(ApiError::new(ErrorKind::NotFound, "Vehicle not found"));

        assert_eq!(errors.to_string(), "not found: Vehicle not found");
        let source = errors.source().unwrap();
        assert_eq!(source.to_string(), "not found: Vehicle not found");
    }
}
