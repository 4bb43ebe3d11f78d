/// vCard record delimiters and skipped property names
pub const VCARD_COMPONENT: &str = "VCARD";
pub const BEGIN_VCARD: &str = const_str::concat!("BEGIN:", VCARD_COMPONENT);
pub const END_VCARD: &str = const_str::concat!("END:", VCARD_COMPONENT);

/// Lines containing any of these markers carry nothing worth rendering.
pub const SKIPPED_MARKERS: [&str; 3] = [END_VCARD, "VERSION", "PRODID"];

/// Configuration file and environment naming
pub const APP_NAME: &str = "cardtext";
pub const CONFIG_FILE_NAME: &str = const_str::concat!(APP_NAME, ".toml");
pub const ENV_PREFIX: &str = "CARDTEXT";
