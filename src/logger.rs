//! Console Logger
//!
//! Forwards `log` records to the browser console as `[TARGET] message`.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.target(), &record.args().to_string());
        let value = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug | Level::Trace => web_sys::console::log_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger (no-op if a logger is already set)
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `catalog_ui::api::courses` -> `[COURSES] ...`
fn format_line(target: &str, message: &str) -> String {
    let short = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", short.to_uppercase(), message)
}
