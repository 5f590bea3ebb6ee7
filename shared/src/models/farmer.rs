//! Farmer record model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A farmer record.
///
/// Only the identity field is typed; every other field (name, gender, age,
/// city, soil type, ...) is owned by the farmer-records service and carried
/// in `details` untouched, so a payload survives the gateway field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<i32>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Farmer {
    /// Returns a copy of this record with the given identity assigned.
    pub fn with_id(mut self, farmer_id: i32) -> Self {
        self.farmer_id = Some(farmer_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn captures_id_and_keeps_other_fields_opaque() {
        let farmer: Farmer = serde_json::from_value(json!({
            "farmerId": 7,
            "name": "Anita",
            "age": 40,
            "soil": "clay"
        }))
        .unwrap();

        assert_eq!(farmer.farmer_id, Some(7));
        assert_eq!(farmer.details.get("name"), Some(&json!("Anita")));
        assert_eq!(farmer.details.get("age"), Some(&json!(40)));
        assert_eq!(farmer.details.get("soil"), Some(&json!("clay")));
        assert!(!farmer.details.contains_key("farmerId"));
    }

    #[test]
    fn missing_id_stays_absent_after_serialization() {
        let farmer: Farmer =
            serde_json::from_value(json!({ "name": "A", "age": 40 })).unwrap();
        assert_eq!(farmer.farmer_id, None);

        let back = serde_json::to_value(&farmer).unwrap();
        assert_eq!(back, json!({ "name": "A", "age": 40 }));
    }

    #[test]
    fn with_id_only_touches_the_identity_field() {
        let farmer: Farmer =
            serde_json::from_value(json!({ "name": "A", "age": 40 })).unwrap();
        let assigned = farmer.clone().with_id(7);

        assert_eq!(assigned.farmer_id, Some(7));
        assert_eq!(assigned.details, farmer.details);
    }

    fn detail_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-zA-Z ]{0,12}".prop_map(Value::from),
        ]
    }

    fn detail_map() -> impl Strategy<Value = Map<String, Value>> {
        // Lowercase keys cannot collide with the typed `farmerId` field.
        prop::collection::btree_map("[a-z]{1,8}", detail_value(), 0..6)
            .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        /// Any JSON object round-trips through `Farmer` field-for-field.
        #[test]
        fn payload_passes_through_unchanged(
            id in prop::option::of(0..10_000i32),
            details in detail_map(),
        ) {
            let mut object = details;
            if let Some(id) = id {
                object.insert("farmerId".to_string(), Value::from(id));
            }
            let original = Value::Object(object);

            let farmer: Farmer = serde_json::from_value(original.clone()).unwrap();
            prop_assert_eq!(serde_json::to_value(&farmer).unwrap(), original);
        }
    }
}
