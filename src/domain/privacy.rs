// Privacy domain model - Periods during which a vehicle's data is not collected
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Privacy {
    pub id: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
}

impl Privacy {
    /// A privacy period is active until the server stamps its end
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_active() {
        let open: Privacy = serde_json::from_value(json!({
            "id": "p1",
            "startedAt": "2017-10-05T08:00:00.000+00:00"
        }))
        .unwrap();
        assert!(open.is_active());

        let closed: Privacy = serde_json::from_value(json!({
            "id": "p2",
            "startedAt": "2017-10-05T08:00:00.000+00:00",
            "endedAt": "2017-10-05T09:00:00.000+00:00"
        }))
        .unwrap();
        assert!(!closed.is_active());
    }
}
