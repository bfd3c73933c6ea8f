//! Build Configuration
//!
//! Catalog settings baked in at compile time.

use course_filter::CatalogConfig;

/// Resolve settings from `CATALOG_*` variables set when building the bundle
pub fn load_config() -> CatalogConfig {
    CatalogConfig::from_lookup(|key| {
        let value = match key {
            "CATALOG_API_URL" => option_env!("CATALOG_API_URL"),
            "CATALOG_LOCALE" => option_env!("CATALOG_LOCALE"),
            "CATALOG_BOOKMARKS_KEY" => option_env!("CATALOG_BOOKMARKS_KEY"),
            "CATALOG_PAGE_SIZE" => option_env!("CATALOG_PAGE_SIZE"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// Log level, `CATALOG_LOG` (defaults to `info`)
pub fn log_level() -> log::LevelFilter {
    option_env!("CATALOG_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}
