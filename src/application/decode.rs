// Decoding - JSON values into domain records
use crate::domain::error::{ApiError, ErrorKind, RouteResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn decode<T: DeserializeOwned>(value: Value) -> RouteResult<T> {
    serde_json::from_value(value).map_err(|e| {
        tracing::warn!("Failed to decode {}: {}", std::any::type_name::<T>(), e);
        ApiError::new(
            ErrorKind::Decode,
            format!("Unexpected response for {}", short_type_name::<T>()),
        )
        .with_cause(e)
        .into()
    })
}

/// Like `decode`, but a `null` (empty) body is an empty list
pub fn decode_list<T: DeserializeOwned>(value: Value) -> RouteResult<Vec<T>> {
    match value {
        Value::Null => Ok(Vec::new()),
        other => decode(other),
    }
}

/// Request bodies for updates
pub fn encode<T: Serialize>(value: &T) -> RouteResult<Value> {
    serde_json::to_value(value).map_err(|e| {
        ApiError::new(
            ErrorKind::InvalidRequest,
            format!("Cannot encode {}", short_type_name::<T>()),
        )
        .with_cause(e)
        .into()
    })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full).trim_end_matches('>')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::Device;
    use serde_json::json;

    #[test]
    fn test_decode_error_kind() {
        let errors = decode::<Device>(json!({ "name": "no id" })).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.kind(), ErrorKind::Decode);
        assert!(errors.first().cause.as_deref().unwrap().contains("id"));
    }

    #[test]
    fn test_decode_list_null_is_empty() {
        let devices = decode_list::<Device>(Value::Null).unwrap();
        assert!(devices.is_empty());
    }

    #[test]
    fn test_decode_list_rejects_object() {
        let errors = decode_list::<Device>(json!({ "id": "d1" })).unwrap_err();
        assert_eq!(errors.kind(), ErrorKind::Decode);
    }
}
