use serde::{Deserialize, Deserializer, Serialize};

/// Shipment record as returned by the backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sender_full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub receiver_full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub package_type: String,
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub last_known_location: Option<String>,
    #[serde(default)]
    pub estimated_delivery_time: Option<String>,

    // Milestones
    #[serde(default)]
    pub processing_date_time: Option<String>,
    /// Backend spells it `pickedUpDataTime`
    #[serde(default)]
    pub picked_up_data_time: Option<String>,
    #[serde(default)]
    pub departed_date_time: Option<String>,
    #[serde(default)]
    pub delivered_date_time: Option<String>,
    #[serde(default)]
    pub cancelled_date_time: Option<String>,
}

/// One of the five optional lifecycle timestamps
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Milestone {
    Processing,
    PickedUp,
    Departed,
    Delivered,
    Cancelled,
}

impl Milestone {
    /// Scan order used when deriving the latest status; ties go to the earlier entry
    pub const PRIORITY: [Milestone; 5] = [
        Milestone::Cancelled,
        Milestone::Delivered,
        Milestone::Departed,
        Milestone::PickedUp,
        Milestone::Processing,
    ];
}

impl Package {
    /// Raw milestone value, `None` when missing or blank
    pub fn milestone(&self, milestone: Milestone) -> Option<&str> {
        let value = match milestone {
            Milestone::Processing => &self.processing_date_time,
            Milestone::PickedUp => &self.picked_up_data_time,
            Milestone::Departed => &self.departed_date_time,
            Milestone::Delivered => &self.delivered_date_time,
            Milestone::Cancelled => &self.cancelled_date_time,
        };
        non_blank(value)
    }

    pub fn created_at(&self) -> Option<&str> {
        non_blank(&self.created_at)
    }

    /// Last six characters of the id, as shown on cards
    pub fn short_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }
}

/// `null` and missing both decode to an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_document() {
        let json = r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "senderFullName": "Ada Lovelace",
            "receiverFullName": "Charles Babbage",
            "packageType": "Parcel",
            "createdAt": "2025-01-01T08:00:00.000Z",
            "processingDateTime": "2025-01-01T09:00:00.000Z",
            "pickedUpDataTime": null,
            "lastKnownLocation": "Depot 4",
            "__v": 0
        }"#;
        let pkg: Package = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.id, "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(pkg.sender_full_name, "Ada Lovelace");
        assert_eq!(pkg.milestone(Milestone::Processing), Some("2025-01-01T09:00:00.000Z"));
        assert_eq!(pkg.milestone(Milestone::PickedUp), None);
        assert_eq!(pkg.last_known_location.as_deref(), Some("Depot 4"));
    }

    #[test]
    fn null_names_do_not_reject_the_list() {
        let json = r#"[
            {"_id": "a1", "senderFullName": null, "receiverFullName": "Bob", "packageType": null},
            {"_id": "b2", "senderFullName": "Eve", "receiverFullName": "Mallory", "packageType": "Letter"}
        ]"#;
        let packages: Vec<Package> = serde_json::from_str(json).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].sender_full_name, "");
        assert_eq!(packages[0].receiver_full_name, "Bob");
        assert_eq!(packages[0].package_type, "");
        assert_eq!(packages[1].sender_full_name, "Eve");
    }

    #[test]
    fn missing_names_default_to_empty() {
        let pkg: Package = serde_json::from_str(r#"{"_id": "c3"}"#).unwrap();
        assert_eq!(pkg.sender_full_name, "");
        assert_eq!(pkg.created_at(), None);
    }

    #[test]
    fn blank_milestones_are_absent() {
        let pkg = Package {
            delivered_date_time: Some("  ".into()),
            created_at: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(pkg.milestone(Milestone::Delivered), None);
        assert_eq!(pkg.created_at(), None);
    }

    #[test]
    fn short_id_takes_last_six() {
        let pkg = Package { id: "65a1f0c2e4b0a1b2c3d4e5f6".into(), ..Default::default() };
        assert_eq!(pkg.short_id(), "d4e5f6");

        let short = Package { id: "abc".into(), ..Default::default() };
        assert_eq!(short.short_id(), "abc");
    }
}
