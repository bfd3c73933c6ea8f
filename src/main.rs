//! Course Catalog Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod hooks;
mod logger;
mod markdown;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    mount_to_body(App);
}
