/// Source name constants to ensure consistency across the codebase
// Source names (used by the factory and in log spans)
pub const TOURISM_SITES_SOURCE: &str = "tourism_sites";
pub const BUSINESS_DIRECTORIES_SOURCE: &str = "business_directories";

// Output file names, relative to the output directory
pub const JSON_OUTPUT_FILE: &str = "egyptian_handicrafts.json";
pub const CSV_OUTPUT_FILE: &str = "egyptian_handicrafts.csv";
pub const TYPESCRIPT_OUTPUT_FILE: &str = "marketplace-data-scraped.ts";

// Defaults applied by the normalizer
pub const PLACEHOLDER_IMAGE_URL: &str = "/api/placeholder/600/400";
pub const DEFAULT_OPENING_HOURS: &str = "9:00 AM - 6:00 PM";

// Placeholder map position for every generated location (longitude, latitude).
// Nothing is geocoded; the front end is expected to replace these.
pub const PLACEHOLDER_LONGITUDE: f64 = 31.2357;
pub const PLACEHOLDER_LATITUDE: f64 = 30.0131;

/// Egyptian governorates the sample data is drawn from.
/// Not enforced: unknown governorates are kept and only logged.
pub const KNOWN_GOVERNORATES: &[&str] = &[
    "Cairo",
    "Luxor",
    "Aswan",
    "Fayoum",
    "Siwa",
    "Alexandria",
    "Giza",
    "Sinai",
    "South Sinai",
    "Red Sea",
    "Matrouh",
    "Qena",
    "Sohag",
];

/// Get all supported source names, in the order the default run fetches them
pub fn get_supported_sources() -> Vec<&'static str> {
    vec![TOURISM_SITES_SOURCE, BUSINESS_DIRECTORIES_SOURCE]
}

pub fn is_known_governorate(governorate: &str) -> bool {
    KNOWN_GOVERNORATES.contains(&governorate)
}
