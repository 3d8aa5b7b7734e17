use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::common::error::Result;

/// Raw location data as returned from a source, keyed by field name
pub type RawLocation = Map<String, Value>;

/// A canonical artisan location, produced by the normalizer and read by every exporter.
///
/// Field order here is the serialized order in the JSON and CSV outputs.
/// Keys the normalizer does not recognise are kept in `extra`, after the
/// canonical fields, in the order they were authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub governorate: String,
    /// Authored value of any JSON type; `None` only when the key was absent
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<Value>,
    pub handicraft_types: Vec<String>,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub image_url: String,
    pub opening_hours: String,
    pub specialties: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationRecord {
    /// Identifier used by the front end: lowercased name, spaces to dashes, commas dropped
    pub fn id(&self) -> String {
        location_id(&self.name)
    }

    /// Handicraft types joined for prose, e.g. "pottery, ceramics"
    pub fn craft_list(&self) -> String {
        self.handicraft_types.join(", ").to_lowercase()
    }

    pub fn history(&self) -> String {
        format!(
            "Traditional {} craftsmanship with deep cultural roots.",
            self.craft_list()
        )
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it survives a round trip
fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

pub fn location_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "-").replace(',', "")
}

/// Core trait that all location data sources must implement
pub trait LocationSource: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Fetch one ordered batch of raw locations from this source
    fn fetch_batch(&self) -> Result<Vec<RawLocation>>;
}

/// Look up a location by its generated id
pub fn find_by_id<'a>(records: &'a [LocationRecord], id: &str) -> Option<&'a LocationRecord> {
    records.iter().find(|record| record.id() == id)
}

/// All locations in a governorate, in input order
pub fn filter_by_governorate<'a>(
    records: &'a [LocationRecord],
    governorate: &str,
) -> Vec<&'a LocationRecord> {
    records
        .iter()
        .filter(|record| record.governorate == governorate)
        .collect()
}
