use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::common::constants::{
    is_known_governorate, DEFAULT_OPENING_HOURS, PLACEHOLDER_IMAGE_URL,
};
use crate::common::types::{LocationRecord, RawLocation};
use crate::observability::metrics;

static PHONE_DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\d+\-\s()]").expect("phone pattern is valid")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

/// Raw keys the normalizer maps onto [`LocationRecord`] fields.
/// Everything else is carried through in `LocationRecord::extra`.
const CANONICAL_FIELDS: &[&str] = &[
    "name",
    "governorate",
    "city",
    "handicraft_types",
    "description",
    "address",
    "phone",
    "email",
    "website",
    "image_url",
    "opening_hours",
    "specialties",
];

/// Why a raw record was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingField(&'static str),
}

/// Result of normalizing a batch: the kept records, in input order, and how many were dropped
#[derive(Debug, Clone, Default)]
pub struct NormalizationOutcome {
    pub records: Vec<LocationRecord>,
    pub rejected: usize,
}

/// Validates raw locations and converts them into canonical [`LocationRecord`]s.
///
/// Records missing `name`, `governorate` or `handicraft_types` are dropped
/// without raising an error. Everything else is coerced and defaulted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocationNormalizer;

impl LocationNormalizer {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all, fields(raw_count = raw_locations.len()))]
    pub fn normalize(&self, raw_locations: Vec<RawLocation>) -> NormalizationOutcome {
        metrics::normalize::batch_size(raw_locations.len());
        let mut outcome = NormalizationOutcome::default();

        for (index, raw) in raw_locations.into_iter().enumerate() {
            match self.normalize_location(raw) {
                Ok(record) => {
                    metrics::normalize::record_accepted();
                    outcome.records.push(record);
                }
                Err(Rejection::MissingField(field)) => {
                    debug!("Dropping raw location #{}: missing {}", index, field);
                    metrics::normalize::record_rejected(field);
                    outcome.rejected += 1;
                }
            }
        }

        info!(
            "Normalized {} locations ({} dropped)",
            outcome.records.len(),
            outcome.rejected
        );
        outcome
    }

    /// Normalize a single raw location
    pub fn normalize_location(&self, raw: RawLocation) -> Result<LocationRecord, Rejection> {
        let name = NormalizerUtils::extract_text(raw.get("name"))
            .ok_or(Rejection::MissingField("name"))?;
        let governorate = NormalizerUtils::extract_text(raw.get("governorate"))
            .ok_or(Rejection::MissingField("governorate"))?;
        let handicraft_types = NormalizerUtils::extract_string_list(raw.get("handicraft_types"))
            .ok_or(Rejection::MissingField("handicraft_types"))?;

        if !is_known_governorate(&governorate) {
            debug!("Unrecognised governorate '{}' for {}", governorate, name);
        }

        let city = raw.get("city").cloned();

        let phone = NormalizerUtils::scalar_text(raw.get("phone"))
            .map(|phone| NormalizerUtils::sanitize_phone(&phone))
            .unwrap_or_default();
        let email = NormalizerUtils::scalar_text(raw.get("email"))
            .and_then(|email| NormalizerUtils::validate_email(&email))
            .unwrap_or_default();

        let description = NormalizerUtils::non_empty_text(raw.get("description"))
            .unwrap_or_else(|| {
                NormalizerUtils::default_description(&handicraft_types, &governorate)
            });
        let address = NormalizerUtils::non_empty_text(raw.get("address"))
            .unwrap_or_else(|| {
                let city_text = NormalizerUtils::scalar_text(city.as_ref());
                NormalizerUtils::default_address(city_text.as_deref(), &governorate)
            });
        let website = NormalizerUtils::non_empty_text(raw.get("website")).unwrap_or_default();
        let image_url = NormalizerUtils::non_empty_text(raw.get("image_url"))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
        let opening_hours = NormalizerUtils::non_empty_text(raw.get("opening_hours"))
            .unwrap_or_else(|| DEFAULT_OPENING_HOURS.to_string());
        let specialties = NormalizerUtils::extract_string_list(raw.get("specialties"))
            .unwrap_or_else(|| handicraft_types.clone());

        Ok(LocationRecord {
            name,
            governorate,
            city,
            handicraft_types,
            description,
            address,
            phone,
            email,
            website,
            image_url,
            opening_hours,
            specialties,
            extra: extra_fields(&raw),
        })
    }
}

/// Shared field helpers for the normalizer
pub struct NormalizerUtils;

impl NormalizerUtils {
    /// A string value as authored, or None when missing, not a string, or blank
    pub fn extract_text(value: Option<&Value>) -> Option<String> {
        value
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    }

    /// A string value as authored, or None when missing, not a string, or empty
    pub fn non_empty_text(value: Option<&Value>) -> Option<String> {
        value
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Strings and numbers as text; phone numbers sometimes arrive as numbers
    pub fn scalar_text(value: Option<&Value>) -> Option<String> {
        match value? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// A list of strings, coercing a single string into a one-element list.
    ///
    /// Non-string items and blank strings are skipped; an empty result is None.
    pub fn extract_string_list(value: Option<&Value>) -> Option<Vec<String>> {
        let items: Vec<String> = match value? {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => return None,
        };
        let items: Vec<String> = items
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }

    /// Remove every character other than digits, `+`, `-`, whitespace and parentheses
    pub fn sanitize_phone(phone: &str) -> String {
        PHONE_DISALLOWED.replace_all(phone, "").into_owned()
    }

    /// The address unchanged if it looks like an email address
    pub fn validate_email(email: &str) -> Option<String> {
        if EMAIL_PATTERN.is_match(email) {
            Some(email.to_string())
        } else {
            None
        }
    }

    pub fn default_description(handicraft_types: &[String], governorate: &str) -> String {
        format!(
            "Traditional {} workshop in {}.",
            handicraft_types.join(", ").to_lowercase(),
            governorate
        )
    }

    pub fn default_address(city: Option<&str>, governorate: &str) -> String {
        format!("{}, {} Governorate", city.unwrap_or(""), governorate)
    }
}

/// Extra keys of a raw location, in authored order
pub fn extra_fields(raw: &RawLocation) -> Map<String, Value> {
    raw.iter()
        .filter(|(key, _)| !CANONICAL_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
