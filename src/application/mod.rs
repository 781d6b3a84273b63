// Application layer - Routes over the transport seam
pub mod decode;
pub mod session;
pub mod transport;
pub mod trip_route;
pub mod user_route;
pub mod vehicle_route;

#[cfg(test)]
pub(crate) mod mock_transport;

use crate::domain::error::{ApiError, ErrorKind, RouteResult};

/// Percent-encode an identifier used as a path segment. A blank id would
/// address the parent collection instead, so it is rejected.
pub(crate) fn segment(id: &str) -> RouteResult<String> {
    if id.trim().is_empty() {
        return Err(ApiError::new(ErrorKind::InvalidRequest, "Identifier must not be empty").into());
    }
    Ok(urlencoding::encode(id).into_owned())
}
