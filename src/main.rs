//! Card Reorder Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod models;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
