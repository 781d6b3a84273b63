// User route - Queries scoped to the authenticated user
use crate::application::decode::{decode, decode_list, encode};
use crate::application::segment;
use crate::application::transport::{ApiRequest, Transport};
use crate::domain::error::RouteResult;
use crate::domain::user::User;
use crate::domain::vehicle::{Device, Vehicle};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserRoute {
    transport: Arc<dyn Transport>,
}

impl UserRoute {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Profile of the authenticated user
    pub async fn me(&self) -> RouteResult<User> {
        let value = self.transport.perform(ApiRequest::get("users/me")).await?;
        decode(value)
    }

    /// Vehicles owned by the authenticated user
    pub async fn me_vehicles(&self) -> RouteResult<Vec<Vehicle>> {
        self.vehicles_of("me").await
    }

    /// Vehicles owned by any user the token may read; `"me"` is the authenticated user
    pub async fn vehicles_of(&self, user_id: &str) -> RouteResult<Vec<Vehicle>> {
        let request = ApiRequest::get(format!("users/{}/vehicles", segment(user_id)?));
        decode_list(self.transport.perform(request).await?)
    }

    /// Devices owned by the authenticated user
    pub async fn me_devices(&self) -> RouteResult<Vec<Device>> {
        let value = self
            .transport
            .perform(ApiRequest::get("users/me/devices"))
            .await?;
        decode_list(value)
    }

    pub async fn update_me(&self, user: &User) -> RouteResult<User> {
        let body = encode(user)?;
        let request = ApiRequest::patch(format!("users/{}", segment(&user.id)?)).with_body(body);
        let value = self.transport.perform(request).await?;
        decode(value)
    }

    /// Pair a device with the user's account, creating the vehicle it's plugged into
    pub async fn associate_vehicle(&self, device_id: &str, pin: &str) -> RouteResult<Vehicle> {
        let request = ApiRequest::post("users/me/vehicles").with_body(json!({
            "deviceId": device_id,
            "devicePin": pin,
        }));
        let value = self.transport.perform(request).await?;
        decode(value)
    }
}
