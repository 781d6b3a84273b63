// Trip route - A recorded trip and the readings captured during it
use crate::application::decode::{decode, decode_list};
use crate::application::segment;
use crate::application::transport::{ApiRequest, Transport};
use crate::domain::car_status::{Location, Signal};
use crate::domain::error::RouteResult;
use crate::domain::trip::Trip;
use std::sync::Arc;

#[derive(Clone)]
pub struct TripRoute {
    transport: Arc<dyn Transport>,
}

impl TripRoute {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn trip(&self, trip_id: &str) -> RouteResult<Trip> {
        let request = ApiRequest::get(format!("trips/{}", segment(trip_id)?));
        decode(self.transport.perform(request).await?)
    }

    // Readings are served from another host behind a redirect that still needs the token
    pub async fn signals(&self, trip_id: &str) -> RouteResult<Vec<Signal>> {
        let request = ApiRequest::get(format!("trips/{}/signals", segment(trip_id)?))
            .with_authorized_redirect();
        decode_list(self.transport.perform(request).await?)
    }

    pub async fn locations(&self, trip_id: &str) -> RouteResult<Vec<Location>> {
        let request = ApiRequest::get(format!("trips/{}/locations", segment(trip_id)?))
            .with_authorized_redirect();
        decode_list(self.transport.perform(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mock_transport::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_signals() {
        let transport = Arc::new(MockTransport::replying(Ok(json!([
            { "name": "EngineSpeed", "value": 2100.0, "date": "2017-10-05T08:01:00.000Z" },
            { "name": "EngineSpeed", "value": 2350.0, "date": "2017-10-05T08:01:01.000Z" }
        ]))));
        let route = TripRoute::new(transport.clone());

        let signals = route.signals("t1").await.unwrap();

        assert_eq!(signals.len(), 2);
        assert_eq!(signals[1].value, 2350.0);
        let request = &transport.requests()[0];
        assert_eq!(request.path, "trips/t1/signals");
        assert!(request.authorize_redirect);
    }

    #[tokio::test]
    async fn test_locations_empty() {
        let transport = Arc::new(MockTransport::replying(Ok(json!([]))));
        let route = TripRoute::new(transport.clone());

        assert!(route.locations("t1").await.unwrap().is_empty());
        let request = &transport.requests()[0];
        assert_eq!(request.path, "trips/t1/locations");
        assert!(request.authorize_redirect);
    }

    #[tokio::test]
    async fn test_trip() {
        let transport = Arc::new(MockTransport::replying(Ok(json!({
            "id": "t1",
            "endLocation": { "latitude": 50.6, "longitude": 3.0 }
        }))));
        let route = TripRoute::new(transport.clone());

        let trip = route.trip("t1").await.unwrap();

        assert_eq!(trip.end_location.and_then(|l| l.latitude), Some(50.6));
        assert!(!transport.requests()[0].authorize_redirect);
    }
}
