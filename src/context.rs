//! Application Context
//!
//! The card list, provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::move_item;

use crate::models::Card;

/// The ordered card list. Children read it; `move_item` is the only writer.
#[derive(Clone, Copy)]
pub struct CardList {
    /// Cards in display order - read
    pub cards: ReadSignal<Vec<Card>>,
    /// Cards in display order - write
    set_cards: WriteSignal<Vec<Card>>,
}

impl CardList {
    pub fn new(cards: (ReadSignal<Vec<Card>>, WriteSignal<Vec<Card>>)) -> Self {
        Self {
            cards: cards.0,
            set_cards: cards.1,
        }
    }

    /// Move the card at `from` to `to` in one update
    pub fn move_item(&self, from: usize, to: usize) {
        self.set_cards.update(|cards| move_item(cards, from, to));
    }

    /// Current index of a card (tracked)
    pub fn index_of(&self, card_id: u32) -> Option<usize> {
        self.cards.with(|cards| cards.iter().position(|c| c.id == card_id))
    }
}

pub fn use_card_list() -> CardList {
    expect_context::<CardList>()
}
