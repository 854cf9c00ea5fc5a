//! UI Components
//!
//! Leptos components for the draggable card list.

mod card_item;
mod drag_layer;
mod draggable_list;

pub use card_item::CardItem;
pub use drag_layer::DragLayer;
pub use draggable_list::DraggableList;
