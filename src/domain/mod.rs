// Domain layer - Plain records decoded from the car-data API
pub mod car_status;
pub mod error;
pub mod privacy;
pub mod trip;
pub mod user;
pub mod vehicle;

use serde::{Deserialize, Deserializer};

/// Treat a missing or `null` JSON array as an empty list.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
