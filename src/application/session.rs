// Session - Explicit owner of the transport all routes share
use crate::application::transport::Transport;
use crate::application::trip_route::TripRoute;
use crate::application::user_route::UserRoute;
use crate::application::vehicle_route::VehicleRoute;
use std::sync::Arc;

#[derive(Clone)]
pub struct Session {
    transport: Arc<dyn Transport>,
}

impl Session {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn users(&self) -> UserRoute {
        UserRoute::new(self.transport.clone())
    }

    pub fn vehicles(&self) -> VehicleRoute {
        VehicleRoute::new(self.transport.clone())
    }

    pub fn trips(&self) -> TripRoute {
        TripRoute::new(self.transport.clone())
    }
}
