//! Problem record model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A crop problem reported by a farmer, owned by the remote problem service.
///
/// Identified by `problemId` and tied to exactly one farmer via `farmerId`.
/// As with [`crate::Farmer`], the remaining fields are opaque to the gateway
/// and pass through in `details` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<i32>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn captures_both_identity_fields() {
        let problem: Problem = serde_json::from_value(json!({
            "problemId": 5,
            "farmerId": 7,
            "description": "leaf blight",
            "severity": "high"
        }))
        .unwrap();

        assert_eq!(problem.problem_id, Some(5));
        assert_eq!(problem.farmer_id, Some(7));
        assert_eq!(problem.details.get("description"), Some(&json!("leaf blight")));
        assert_eq!(problem.details.get("severity"), Some(&json!("high")));
    }

    #[test]
    fn absent_ids_stay_absent_after_serialization() {
        let problem: Problem =
            serde_json::from_value(json!({ "description": "aphids" })).unwrap();

        let back = serde_json::to_value(&problem).unwrap();
        assert_eq!(back, json!({ "description": "aphids" }));
    }

    #[test]
    fn payload_round_trips_field_for_field() {
        let original = json!({
            "problemId": 12,
            "farmerId": 3,
            "description": "stem borer",
            "reportedOn": "2024-06-01",
            "photos": ["a.jpg", "b.jpg"]
        });

        let problem: Problem = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(serde_json::to_value(&problem).unwrap(), original);
    }
}
