//! Drag Layer Component
//!
//! Fixed-position preview that follows the pointer during a drag.
//! Renders nothing while idle.

use leptos::prelude::*;
use leptos_dragdrop::{DndSignals, DragSession};

#[component]
pub fn DragLayer(dnd: DndSignals) -> impl IntoView {
    // Only changes when a drag starts or ends, not on every pointer move
    let preview = Memo::new(move |_| dnd.session_read.with(|s| s.as_ref().map(|s| s.item.clone())));
    let transform = move || {
        dnd.session_read
            .with(|s| s.as_ref().map(DragSession::preview_transform).unwrap_or_default())
    };

    view! {
        <Show when=move || preview.with(Option::is_some)>
            <div class="drag-layer">
                <div class="drag-preview" style:transform=transform>
                    {move || preview.get().map(|item| view! {
                        <div class="drag-preview-card">
                            <img src=item.image alt=item.text.clone() class="drag-preview-image" />
                            <div class="drag-preview-title">{item.text}</div>
                        </div>
                    })}
                </div>
            </div>
        </Show>
    }
}
