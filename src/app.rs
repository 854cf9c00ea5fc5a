//! Card Reorder App
//!
//! Owns the card list and renders it as a draggable list.

use leptos::prelude::*;

use crate::components::DraggableList;
use crate::config::AppConfig;
use crate::context::CardList;
use crate::models::seed_cards;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(config.title);
    }

    let seed = match seed_cards() {
        Ok(cards) => {
            log::info!("[APP] Loaded {} cards", cards.len());
            cards
        }
        Err(e) => {
            log::error!("[APP] Failed to load cards: {}", e);
            Vec::new()
        }
    };

    // State, lost on reload
    let (cards, set_cards) = signal(seed);

    // Provide context to all children
    provide_context(CardList::new((cards, set_cards)));

    view! {
        <main class="page">
            <DraggableList dnd_config=config.dnd />
        </main>
    }
}
