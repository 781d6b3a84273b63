// Car status domain model - Point-in-time snapshot of a vehicle's sensors
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Accelerometer {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub z: Option<f64>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub satellites: Option<u32>,
    #[serde(default)]
    pub heading: Option<f64>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Snapshot of a vehicle's state. Every part is optional on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarStatus {
    #[serde(default)]
    pub accelerometer: Option<Accelerometer>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub signals: Vec<Signal>,
}

impl CarStatus {
    /// Latest reading for a named signal, if the snapshot carries one
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.name == name)
    }
}
