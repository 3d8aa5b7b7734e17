use std::path::{Path, PathBuf};

use super::Exporter;
use crate::common::error::Result;
use crate::common::types::LocationRecord;

/// Pretty-printed JSON array, two-space indent, non-ASCII written as-is
pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Exporter for JsonExporter {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn output_path(&self) -> &Path {
        &self.path
    }

    fn render(&self, records: &[LocationRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn record() -> LocationRecord {
        let mut extra = Map::new();
        extra.insert("rating".to_string(), json!(4.5));
        LocationRecord {
            name: "Café Fustat".to_string(),
            governorate: "Cairo".to_string(),
            city: Some(json!("Old Cairo")),
            handicraft_types: vec!["Pottery".to_string()],
            description: "Kilns, wheels and \"glaze\"".to_string(),
            address: "Fustat, Old Cairo".to_string(),
            phone: "+20 2 2365 4789".to_string(),
            email: "info@fustat.com".to_string(),
            website: String::new(),
            image_url: "/api/placeholder/600/400".to_string(),
            opening_hours: "9:00 AM - 6:00 PM".to_string(),
            specialties: vec!["Bowls".to_string()],
            extra,
        }
    }

    #[test]
    fn test_render_field_order_and_indent() {
        let rendered = JsonExporter::new("out.json").render(&[record()]).unwrap();
        assert!(rendered.starts_with("[\n  {\n    \"name\": \"Café Fustat\",\n    \"governorate\""));

        let order = [
            "\"name\"",
            "\"governorate\"",
            "\"city\"",
            "\"handicraft_types\"",
            "\"description\"",
            "\"address\"",
            "\"phone\"",
            "\"email\"",
            "\"website\"",
            "\"image_url\"",
            "\"opening_hours\"",
            "\"specialties\"",
            "\"rating\"",
        ];
        let positions: Vec<usize> = order.iter().map(|k| rendered.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_keeps_non_ascii() {
        let rendered = JsonExporter::new("out.json").render(&[record()]).unwrap();
        assert!(rendered.contains("Café"));
        assert!(!rendered.contains("\\u00e9"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let exporter = JsonExporter::new("out.json");
        let records = vec![record(), record()];
        assert_eq!(
            exporter.render(&records).unwrap(),
            exporter.render(&records).unwrap()
        );
    }

    #[test]
    fn test_round_trip() {
        let records = vec![record()];
        let rendered = JsonExporter::new("out.json").render(&records).unwrap();
        let parsed: Vec<LocationRecord> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_empty_list() {
        let rendered = JsonExporter::new("out.json").render(&[]).unwrap();
        assert_eq!(rendered, "[]");
    }
}
