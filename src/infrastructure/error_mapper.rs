// Error mapping - Transport, HTTP status and body failures into domain errors
use crate::domain::error::{ApiError, ApiErrors, ErrorKind};
use reqwest::StatusCode;
use serde::Deserialize;

/// One entry of the API's error body: `[{ "type", "message", "tip" }]`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    tip: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    Many(Vec<ErrorBody>),
    One(ErrorBody),
}

pub fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status.as_u16() {
        400 | 422 => ErrorKind::InvalidRequest,
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        429 => ErrorKind::RateLimited,
        500..=599 => ErrorKind::Server,
        _ => ErrorKind::UnexpectedStatus,
    }
}

/// Errors for a non-success response. The kind always follows the status;
/// messages come from the body when the API sent any.
pub fn status_errors(status: StatusCode, body: &str) -> ApiErrors {
    let kind = kind_for_status(status);
    let code = status.as_u16();

    let entries = match serde_json::from_str::<ErrorPayload>(body) {
        Ok(ErrorPayload::Many(entries)) => entries,
        Ok(ErrorPayload::One(entry)) => vec![entry],
        Err(_) => Vec::new(),
    };

    let errors: Vec<ApiError> = entries
        .into_iter()
        .filter_map(|entry| {
            let message = entry.message.or(entry.error_type)?;
            let mut error = ApiError::new(kind, message).with_status(code);
            error.tip = entry.tip;
            Some(error)
        })
        .collect();

    ApiErrors::from_vec(errors).unwrap_or_else(|| {
        ApiError::new(kind, fallback_message(status, body))
            .with_status(code)
            .into()
    })
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() && body.len() <= 200 && !body.starts_with(['{', '[', '<']) {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

pub fn request_error(error: reqwest::Error) -> ApiErrors {
    let (kind, message) = if error.is_builder() {
        (ErrorKind::Configuration, "Invalid request")
    } else if error.is_timeout() {
        (ErrorKind::Transport, "Request to the API timed out")
    } else if error.is_connect() {
        (ErrorKind::Transport, "Failed to connect to the API")
    } else {
        (ErrorKind::Transport, "Failed to send request to the API")
    };

    ApiError::new(kind, message).with_cause(error).into()
}

pub fn body_decode_error(error: serde_json::Error) -> ApiErrors {
    ApiError::new(ErrorKind::Decode, "Failed to parse API response")
        .with_cause(error)
        .into()
}
