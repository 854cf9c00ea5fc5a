//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for vertical lists in Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and the
//! hovered item's midpoint to decide when to swap.

mod reorder;
mod session;

pub use reorder::move_item;
pub use session::{crosses_midpoint, DragItem, DragSession, HoverRect, Move, PendingDrag, XY};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Tunables for the drag interaction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DndConfig {
    /// Movement threshold in pixels to start dragging
    pub drag_threshold_px: i32,
    /// Opacity of the source item while it is being dragged
    pub dragging_opacity: f64,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 5,
            dragging_opacity: 0.4,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Active drag, if any
    pub session_read: ReadSignal<Option<DragSession>>,
    pub session_write: WriteSignal<Option<DragSession>>,
    /// Pending drag (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<PendingDrag>>,
    pub pending_write: WriteSignal<Option<PendingDrag>>,
    /// Id of the dragged item; unlike the session, unchanged by pointer moves
    pub dragging_id: Memo<Option<u32>>,
    pub config: DndConfig,
}

impl DndSignals {
    /// Is the item with this id the one being dragged? (tracked)
    pub fn is_dragging(&self, item_id: u32) -> bool {
        self.dragging_id.get() == Some(item_id)
    }
}

pub fn create_dnd_signals(config: DndConfig) -> DndSignals {
    let (session_read, session_write) = signal(None::<DragSession>);
    let (pending_read, pending_write) = signal(None::<PendingDrag>);
    let dragging_id = Memo::new(move |_| session_read.with(|s| s.as_ref().map(|s| s.item.id)));
    DndSignals {
        session_read,
        session_write,
        pending_read,
        pending_write,
        dragging_id,
        config,
    }
}

/// End drag operation, returning the session that was active
pub fn end_drag(dnd: &DndSignals) -> Option<DragSession> {
    let session = dnd.session_read.get_untracked();
    dnd.session_write.set(None);
    dnd.pending_write.set(None);
    session
}

fn client_xy(ev: &web_sys::MouseEvent) -> XY {
    XY::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Bounding box of the element the handler is attached to
fn current_target_rect(ev: &web_sys::MouseEvent) -> Option<web_sys::DomRect> {
    let el = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    Some(el.get_bounding_client_rect())
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position and grab offset
pub fn make_on_mousedown(
    dnd: DndSignals,
    item: DragItem,
    index: Signal<Option<usize>>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        let Some(index) = index.get_untracked() else { return };
        let Some(rect) = current_target_rect(&ev) else { return };

        // No native image ghost or text selection; the drag layer draws the preview
        ev.prevent_default();

        let start = client_xy(&ev);
        dnd.pending_write.set(Some(PendingDrag {
            item: item.clone(),
            index,
            start,
            grab_offset: XY::new(start.x - rect.left(), start.y - rect.top()),
        }));
    }
}

/// Create mousemove handler for items - commits a move when the pointer
/// crosses the hovered item's midpoint
pub fn make_on_item_mousemove<F>(
    dnd: DndSignals,
    index: Signal<Option<usize>>,
    on_move: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(usize, usize) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let Some(mut session) = dnd.session_read.get_untracked() else { return };
        let Some(hover_index) = index.get_untracked() else { return };
        let rect = current_target_rect(&ev).map(|r| HoverRect {
            top: r.top(),
            bottom: r.bottom(),
        });

        if let Some(mv) = session.hover(hover_index, rect, f64::from(ev.client_y())) {
            log::debug!("[DND] Move: id={}, {} -> {}", session.item.id, mv.from, mv.to);
            dnd.session_write.set(Some(session));
            on_move(mv.from, mv.to);
        }
    }
}

/// Bind document mousemove - starts drag if moved enough, then tracks the pointer
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pointer = client_xy(&ev);

        if dnd.session_read.with_untracked(Option::is_some) {
            dnd.session_write.update(|s| {
                if let Some(s) = s {
                    s.pointer = pointer;
                }
            });
            return;
        }

        // If we have a pending drag and haven't started dragging yet
        if let Some(pending) = dnd.pending_read.get_untracked() {
            if pending.exceeds_threshold(pointer, dnd.config.drag_threshold_px) {
                log::debug!("[DND] Drag start: id={}, index={}", pending.item.id, pending.index);
                dnd.pending_write.set(None);
                dnd.session_write.set(Some(DragSession::start(pending, pointer)));
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection, and window blur for cancel.
/// Moves are committed while hovering, so neither rolls anything back.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragSession) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        // Not dragging - just clears any pending state
        if let Some(session) = end_drag(&dnd) {
            on_drop(session);
        }
    });

    let on_blur = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(session) = end_drag(&dnd) {
            log::debug!("[DND] Drag cancelled: id={}, index={}", session.item.id, session.index);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
    on_blur.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
