//! Frontend Models
//!
//! Card data and the seed list shown at mount.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use leptos_dragdrop::DragItem;

/// Seed cards, embedded at build time
const SEED_JSON: &str = include_str!("../assets/cards.json");

/// Card data structure. Position is the index in the list, never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub text: String,
    pub image: String,
    pub location: String,
}

impl Card {
    /// What the drag preview shows for this card
    pub fn drag_item(&self) -> DragItem {
        DragItem {
            id: self.id,
            text: self.text.clone(),
            image: self.image.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("malformed card list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate card id {0}")]
    DuplicateId(u32),
}

/// Parse a card list, rejecting repeated ids
pub fn parse_cards(json: &str) -> Result<Vec<Card>, SeedError> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for card in &cards {
        if !seen.insert(card.id) {
            return Err(SeedError::DuplicateId(card.id));
        }
    }
    Ok(cards)
}

pub fn seed_cards() -> Result<Vec<Card>, SeedError> {
    parse_cards(SEED_JSON)
}
