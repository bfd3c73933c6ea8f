//! Catalog Configuration
//!
//! Values resolved from a key lookup (compile-time env in the browser build).

use crate::bookmarks::BOOKMARKS_KEY;

pub const DEFAULT_API_URL: &str = "http://localhost:8055";
pub const DEFAULT_LOCALE: &str = "fr";
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directus base URL, without trailing slash
    pub api_url: String,
    /// Language code used to pick translations
    pub default_locale: String,
    /// localStorage key holding bookmarks
    pub bookmarks_key: String,
    /// `limit` sent with course list requests
    pub page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            bookmarks_key: BOOKMARKS_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Build from `CATALOG_API_URL`, `CATALOG_LOCALE`, `CATALOG_BOOKMARKS_KEY`
    /// and `CATALOG_PAGE_SIZE`; blank or invalid values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get("CATALOG_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(locale) = get("CATALOG_LOCALE") {
            config.default_locale = locale;
        }
        if let Some(key) = get("CATALOG_BOOKMARKS_KEY") {
            config.bookmarks_key = key;
        }
        if let Some(size) = get("CATALOG_PAGE_SIZE") {
            match size.parse::<u32>() {
                Ok(n) if n > 0 => config.page_size = n,
                _ => log::warn!(target: "config", "invalid CATALOG_PAGE_SIZE {:?}, using {}", size, DEFAULT_PAGE_SIZE),
            }
        }
        config
    }

    /// Absolute URL of a collection endpoint
    pub fn items_url(&self, collection: &str) -> String {
        format!("{}/items/{}", self.api_url, collection)
    }
}
