//! App Configuration
//!
//! Compiled-in settings; there is no runtime configuration source.

use log::LevelFilter;
use leptos_dragdrop::DndConfig;

#[derive(Clone, Copy, Debug)]
pub struct AppConfig {
    pub title: &'static str,
    pub log_level: LevelFilter,
    pub dnd: DndConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Draggable List",
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
            dnd: DndConfig::default(),
        }
    }
}
