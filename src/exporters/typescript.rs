use askama::Template;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use super::Exporter;
use crate::common::constants::{PLACEHOLDER_IMAGE_URL, PLACEHOLDER_LATITUDE, PLACEHOLDER_LONGITUDE};
use crate::common::error::Result;
use crate::common::types::LocationRecord;

/// Front-end data module: a `scrapedLocations` array plus lookup helpers.
///
/// The `ArtisanLocation` and `Product` types are imported from `./marketplace-data`,
/// which the front end already defines.
pub struct TypeScriptExporter {
    path: PathBuf,
}

impl TypeScriptExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Exporter for TypeScriptExporter {
    fn format_name(&self) -> &'static str {
        "typescript"
    }

    fn output_path(&self) -> &Path {
        &self.path
    }

    fn render(&self, records: &[LocationRecord]) -> Result<String> {
        let template = MarketplaceModuleTemplate {
            locations: records.iter().map(TsLocation::from_record).collect(),
            placeholder_image: PLACEHOLDER_IMAGE_URL,
            longitude: PLACEHOLDER_LONGITUDE,
            latitude: PLACEHOLDER_LATITUDE,
        };
        let mut module = template.render()?;
        // askama drops the template's final newline
        if !module.ends_with('\n') {
            module.push('\n');
        }
        Ok(module)
    }
}

#[derive(Template)]
#[template(path = "marketplace_data.ts", escape = "none")]
struct MarketplaceModuleTemplate<'a> {
    locations: Vec<TsLocation<'a>>,
    placeholder_image: &'a str,
    longitude: f64,
    latitude: f64,
}

struct TsLocation<'a> {
    id: String,
    name: &'a str,
    governorate: &'a str,
    description: &'a str,
    history: String,
    image_url: &'a str,
    opening_hours: &'a str,
    specialties: &'a [String],
}

impl<'a> TsLocation<'a> {
    fn from_record(record: &'a LocationRecord) -> Self {
        Self {
            id: record.id(),
            name: &record.name,
            governorate: &record.governorate,
            description: &record.description,
            history: record.history(),
            image_url: &record.image_url,
            opening_hours: &record.opening_hours,
            specialties: &record.specialties,
        }
    }
}

/// Quote and escape a value as a double-quoted TypeScript string literal
pub fn ts_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

mod filters {
    /// Render any value as an escaped TypeScript string literal
    pub fn ts_str<T: std::fmt::Display>(value: T) -> ::askama::Result<String> {
        Ok(super::ts_string_literal(&value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn record(name: &str, governorate: &str) -> LocationRecord {
        LocationRecord {
            name: name.to_string(),
            governorate: governorate.to_string(),
            city: None,
            handicraft_types: vec!["Pottery".to_string(), "Ceramics".to_string()],
            description: "Ancient pottery village.".to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            image_url: "/img/fustat.jpg".to_string(),
            opening_hours: "9:00 AM - 6:00 PM".to_string(),
            specialties: vec!["Traditional pottery".to_string(), "Decorative ceramics".to_string()],
            extra: Map::new(),
        }
    }

    #[test]
    fn test_ts_string_literal() {
        assert_eq!(ts_string_literal("plain"), "\"plain\"");
        assert_eq!(ts_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(ts_string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(ts_string_literal("two\nlines"), "\"two\\nlines\"");
        assert_eq!(ts_string_literal("bell\u{7}"), "\"bell\\u0007\"");
        assert_eq!(ts_string_literal("Café"), "\"Café\"");
    }

    #[test]
    fn test_render_location_entry() {
        let rendered = TypeScriptExporter::new("out.ts")
            .render(&[record("Potters Village, Fustat", "Cairo")])
            .unwrap();

        assert!(rendered.contains("import { ArtisanLocation, Product } from \"./marketplace-data\";"));
        assert!(rendered.contains("export const scrapedLocations: ArtisanLocation[] = ["));
        assert!(rendered.contains("    id: \"potters-village-fustat\",\n"));
        assert!(rendered.contains("    name: \"Potters Village, Fustat\",\n"));
        assert!(rendered.contains("    governorate: \"Cairo\",\n"));
        assert!(rendered.contains(
            "    history: \"Traditional pottery, ceramics craftsmanship with deep cultural roots.\",\n"
        ));
        assert!(rendered.contains(
            "    images: [\"/img/fustat.jpg\", \"/api/placeholder/600/400\"],\n"
        ));
        assert!(rendered.contains("    openingHours: \"9:00 AM - 6:00 PM\",\n"));
        assert!(rendered.contains("    coordinates: [31.2357, 30.0131],"));
        assert!(rendered.contains(
            "    specialties: [\"Traditional pottery\", \"Decorative ceramics\"],\n"
        ));
        assert!(rendered.contains("[\n  {\n    id: "));
        assert!(rendered.contains("    products: [] // Products to be added separately\n  }\n\n];\n"));
        assert!(rendered.ends_with(
            "  return scrapedLocations.filter(location => location.governorate === governorate);\n}\n"
        ));
        assert!(rendered.contains("export function getScrapedLocationById(id: string): ArtisanLocation | undefined {"));
        assert!(rendered.contains(
            "export function getScrapedLocationsByGovernorate(governorate: string): ArtisanLocation[] {"
        ));
    }

    #[test]
    fn test_render_separates_entries() {
        let rendered = TypeScriptExporter::new("out.ts")
            .render(&[record("Fustat", "Cairo"), record("Luxor Alabaster", "Luxor")])
            .unwrap();
        assert_eq!(rendered.matches("  },\n").count(), 1);
        assert!(rendered.contains("  }\n\n];"));
        assert!(rendered.find("\"fustat\"").unwrap() < rendered.find("\"luxor-alabaster\"").unwrap());
    }

    #[test]
    fn test_render_escapes_user_strings() {
        let mut tricky = record("The \"Real\" Workshop", "Cairo");
        tricky.description = "Line one\nline \\ two".to_string();
        let rendered = TypeScriptExporter::new("out.ts").render(&[tricky]).unwrap();

        assert!(rendered.contains("    name: \"The \\\"Real\\\" Workshop\",\n"));
        assert!(rendered.contains("    id: \"the-\\\"real\\\"-workshop\",\n"));
        assert!(rendered.contains("    description: \"Line one\\nline \\\\ two\",\n"));
    }

    #[test]
    fn test_render_empty() {
        let rendered = TypeScriptExporter::new("out.ts").render(&[]).unwrap();
        assert!(rendered.contains("ArtisanLocation[] = [\n\n];"));
        assert!(rendered.ends_with("}\n"));
    }
}
