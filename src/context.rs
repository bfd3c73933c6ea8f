//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use course_filter::CatalogConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload data from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload data from the API - write
    set_reload_trigger: WriteSignal<u32>,
    /// Build configuration
    config: StoredValue<CatalogConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: CatalogConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of courses, competences and the weekly course
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> CatalogConfig {
        self.config.get_value()
    }

    /// Language used to pick translations
    pub fn locale(&self) -> String {
        self.config.with_value(|c| c.default_locale.clone())
    }

    pub fn bookmarks_key(&self) -> String {
        self.config.with_value(|c| c.bookmarks_key.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
