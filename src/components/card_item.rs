//! Card Item Component
//!
//! A single card in the list; both drag source and drop target.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_card_list;
use crate::models::Card;

#[component]
pub fn CardItem(card: Card, dnd: DndSignals) -> impl IntoView {
    let list = use_card_list();

    let id = card.id;
    // Position changes as the list reorders while this row stays mounted
    let index = Signal::derive(move || list.index_of(id));

    let on_mousedown = make_on_mousedown(dnd, card.drag_item(), index);
    let on_mousemove = make_on_item_mousemove(dnd, index, move |from, to| list.move_item(from, to));

    let dragging_opacity = dnd.config.dragging_opacity;
    let opacity = move || if dnd.is_dragging(id) { dragging_opacity } else { 1.0 };
    let card_class = move || {
        let mut c = String::from("card");
        if dnd.is_dragging(id) { c.push_str(" dragging"); }
        c
    };

    view! {
        <div
            class=card_class
            style:opacity=move || opacity().to_string()
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
        >
            <img src=card.image.clone() alt=card.text.clone() class="card-image" draggable="false" />
            <div>
                <div class="card-title">{card.text.clone()}</div>
                <div class="card-location">
                    <img src="/icons/location.svg" alt="Location" class="location-icon" draggable="false" />
                    {card.location.clone()}
                </div>
            </div>
        </div>
    }
}
