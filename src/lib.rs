//! Client SDK for the Xee car-data API.
//!
//! Build a [`Session`] over a [`Transport`] (usually [`HttpTransport`]) and
//! query users, vehicles and trips through its routes. Every call performs a
//! single request and resolves with either the decoded value or a non-empty
//! [`ApiErrors`] list.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::session::Session;
pub use application::transport::{ApiRequest, HttpMethod, Transport};
pub use application::trip_route::TripRoute;
pub use application::user_route::UserRoute;
pub use application::vehicle_route::{PrivacyFilter, VehicleRoute};
pub use domain::car_status::{Accelerometer, CarStatus, Location, Signal};
pub use domain::error::{ApiError, ApiErrors, ErrorKind, RouteResult};
pub use domain::privacy::Privacy;
pub use domain::trip::Trip;
pub use domain::user::User;
pub use domain::vehicle::{Device, Vehicle};
pub use infrastructure::http_transport::HttpTransport;
