// Vehicle route - Per-vehicle resources: status, device, trips and privacy periods
use crate::application::decode::{decode, decode_list, encode};
use crate::application::segment;
use crate::application::transport::{ApiRequest, Transport};
use crate::domain::car_status::CarStatus;
use crate::domain::error::RouteResult;
use crate::domain::privacy::Privacy;
use crate::domain::trip::Trip;
use crate::domain::vehicle::{Device, Vehicle};
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Arc;

/// Optional bounds for listing privacy periods
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrivacyFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
}

impl PrivacyFilter {
    fn apply(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(from) = self.from {
            request = request.with_query("from", iso8601(from));
        }
        if let Some(to) = self.to {
            request = request.with_query("to", iso8601(to));
        }
        if let Some(limit) = self.limit {
            request = request.with_query("limit", limit.to_string());
        }
        request
    }
}

fn iso8601(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Clone)]
pub struct VehicleRoute {
    transport: Arc<dyn Transport>,
}

impl VehicleRoute {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn vehicle(&self, vehicle_id: &str) -> RouteResult<Vehicle> {
        let request = ApiRequest::get(format!("vehicles/{}", segment(vehicle_id)?));
        decode(self.transport.perform(request).await?)
    }

    pub async fn update_vehicle(&self, vehicle: &Vehicle) -> RouteResult<Vehicle> {
        let request = ApiRequest::patch(format!("vehicles/{}", segment(&vehicle.id)?))
            .with_body(encode(vehicle)?);
        decode(self.transport.perform(request).await?)
    }

    /// Latest known status (accelerometer, location, signals) of a vehicle
    pub async fn status(&self, vehicle_id: &str) -> RouteResult<CarStatus> {
        let request = ApiRequest::get(format!("vehicles/{}/status", segment(vehicle_id)?));
        decode(self.transport.perform(request).await?)
    }

    pub async fn device(&self, vehicle_id: &str) -> RouteResult<Device> {
        let request = ApiRequest::get(format!("vehicles/{}/device", segment(vehicle_id)?));
        decode(self.transport.perform(request).await?)
    }

    pub async fn trips(&self, vehicle_id: &str) -> RouteResult<Vec<Trip>> {
        let request = ApiRequest::get(format!("vehicles/{}/trips", segment(vehicle_id)?));
        decode_list(self.transport.perform(request).await?)
    }

    pub async fn privacies(
        &self,
        vehicle_id: &str,
        filter: &PrivacyFilter,
    ) -> RouteResult<Vec<Privacy>> {
        let request = filter.apply(ApiRequest::get(format!(
            "vehicles/{}/privacies",
            segment(vehicle_id)?
        )));
        decode_list(self.transport.perform(request).await?)
    }

    /// Stop data collection for a vehicle until `stop_privacy` is called
    pub async fn start_privacy(&self, vehicle_id: &str) -> RouteResult<Privacy> {
        let request = ApiRequest::post(format!("vehicles/{}/privacies", segment(vehicle_id)?));
        decode(self.transport.perform(request).await?)
    }

    pub async fn stop_privacy(&self, privacy_id: &str) -> RouteResult<Privacy> {
        let request = ApiRequest::put(format!("privacies/{}", segment(privacy_id)?));
        decode(self.transport.perform(request).await?)
    }
}
