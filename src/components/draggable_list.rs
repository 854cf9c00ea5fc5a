//! Draggable List Component
//!
//! Displays the cards in order with drag-to-reorder support.
//! Moves are committed while hovering; dropping only ends the drag.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{CardItem, DragLayer};
use crate::context::use_card_list;

#[component]
pub fn DraggableList(dnd_config: DndConfig) -> impl IntoView {
    let list = use_card_list();

    // Create DnD signals
    let dnd = create_dnd_signals(dnd_config);

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |session: DragSession| {
        log::info!(
            "[DND] Drop: id={}, origin={}, final={}",
            session.item.id,
            session.origin_index,
            session.index
        );
    });

    view! {
        <div class="card-list">
            <For
                each=move || list.cards.get()
                key=|card| card.id
                children=move |card| view! { <CardItem card=card dnd=dnd /> }
            />
            <DragLayer dnd=dnd />
        </div>
    }
}
