//! Drag Session
//!
//! Pure state of a reorder gesture, independent of the DOM.
//! The web layer in the crate root feeds it pointer coordinates and
//! bounding boxes; everything here is plain data and arithmetic.

/// A point in client (viewport) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What the preview needs to show about the dragged card
#[derive(Clone, Debug, PartialEq)]
pub struct DragItem {
    pub id: u32,
    pub text: String,
    pub image: String,
}

/// Vertical extent of a hovered element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverRect {
    pub top: f64,
    pub bottom: f64,
}

/// A committed list move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

/// Mouse is down on an item but has not travelled far enough to drag
#[derive(Clone, Debug, PartialEq)]
pub struct PendingDrag {
    pub item: DragItem,
    pub index: usize,
    /// Pointer position at mousedown
    pub start: XY,
    /// Pointer position relative to the item's top-left corner at mousedown
    pub grab_offset: XY,
}

impl PendingDrag {
    /// True once the pointer moved strictly more than `threshold_px` on either axis
    pub fn exceeds_threshold(&self, pointer: XY, threshold_px: i32) -> bool {
        let threshold = f64::from(threshold_px);
        (pointer.x - self.start.x).abs() > threshold || (pointer.y - self.start.y).abs() > threshold
    }
}

/// An active drag
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub item: DragItem,
    /// Index the item had when the drag started
    pub origin_index: usize,
    /// Index the item has now, after any committed moves
    pub index: usize,
    pub grab_offset: XY,
    /// Latest pointer position
    pub pointer: XY,
}

impl DragSession {
    pub fn start(pending: PendingDrag, pointer: XY) -> Self {
        Self {
            item: pending.item,
            origin_index: pending.index,
            index: pending.index,
            grab_offset: pending.grab_offset,
            pointer,
        }
    }

    /// Where the dragged item's top-left corner would be if it followed the pointer
    pub fn source_offset(&self) -> XY {
        XY::new(self.pointer.x - self.grab_offset.x, self.pointer.y - self.grab_offset.y)
    }

    /// CSS transform placing the preview at the source offset
    pub fn preview_transform(&self) -> String {
        let XY { x, y } = self.source_offset();
        format!("translate({}px, {}px)", x, y)
    }

    /// Handle the pointer hovering the item rendered at `hover_index`.
    ///
    /// `rect` is `None` when the hovered element has no geometry yet; the
    /// event is skipped. On a committed move the tracked index follows the
    /// item so later hovers in the same gesture compare against it.
    pub fn hover(&mut self, hover_index: usize, rect: Option<HoverRect>, client_y: f64) -> Option<Move> {
        if self.index == hover_index {
            return None;
        }
        let rect = rect?;
        if !crosses_midpoint(self.index, hover_index, rect, client_y) {
            return None;
        }
        let mv = Move { from: self.index, to: hover_index };
        self.index = hover_index;
        Some(mv)
    }
}

/// Hover threshold for a drag from `drag_index` over `hover_index`.
///
/// Both the midpoint and the pointer are measured from the hovered
/// element's top: half its height against the pointer's offset into it.
/// Dragging down must reach the midpoint, dragging up must not be below it.
pub fn crosses_midpoint(drag_index: usize, hover_index: usize, rect: HoverRect, client_y: f64) -> bool {
    let hover_middle_y = (rect.bottom - rect.top) / 2.0;
    let hover_client_y = client_y - rect.top;

    if drag_index < hover_index && hover_client_y < hover_middle_y {
        return false;
    }
    if drag_index > hover_index && hover_client_y > hover_middle_y {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reorder::move_item;

    const ROW: f64 = 100.0;

    fn item(id: u32) -> DragItem {
        DragItem {
            id,
            text: format!("Card {}", id),
            image: format!("/images/{}.svg", id),
        }
    }

    fn row_rect(index: usize) -> HoverRect {
        let top = index as f64 * ROW;
        HoverRect { top, bottom: top + ROW }
    }

    fn session_at(index: usize, pointer_y: f64) -> DragSession {
        let pending = PendingDrag {
            item: item(index as u32 + 1),
            index,
            start: XY::new(20.0, pointer_y),
            grab_offset: XY::new(20.0, pointer_y - row_rect(index).top),
        };
        DragSession::start(pending, XY::new(20.0, pointer_y))
    }

    /// Sweep the pointer over uniformly tall rows, applying moves as they commit
    fn sweep(list: &mut Vec<u32>, session: &mut DragSession, ys: impl IntoIterator<Item = f64>) -> Vec<Move> {
        let mut moves = Vec::new();
        for y in ys {
            session.pointer.y = y;
            let hover_index = (y / ROW) as usize;
            if let Some(mv) = session.hover(hover_index, Some(row_rect(hover_index)), y) {
                move_item(list, mv.from, mv.to);
                moves.push(mv);
            }
        }
        moves
    }

    #[test]
    fn test_threshold_requires_strict_excess() {
        let pending = PendingDrag {
            item: item(1),
            index: 0,
            start: XY::new(100.0, 100.0),
            grab_offset: XY::default(),
        };
        assert!(!pending.exceeds_threshold(XY::new(105.0, 95.0), 5));
        assert!(pending.exceeds_threshold(XY::new(106.0, 100.0), 5));
        assert!(pending.exceeds_threshold(XY::new(100.0, 94.0), 5));
    }

    #[test]
    fn test_crosses_midpoint_downward() {
        let rect = row_rect(2);
        assert!(!crosses_midpoint(1, 2, rect, 249.0));
        assert!(crosses_midpoint(1, 2, rect, 250.0));
        assert!(crosses_midpoint(1, 2, rect, 290.0));
    }

    #[test]
    fn test_crosses_midpoint_upward() {
        let rect = row_rect(2);
        assert!(!crosses_midpoint(3, 2, rect, 251.0));
        assert!(crosses_midpoint(3, 2, rect, 250.0));
        assert!(crosses_midpoint(3, 2, rect, 210.0));
    }

    #[test]
    fn test_midpoint_is_relative_to_element_top() {
        // A short row far down the page: the midpoint is half its height
        // measured from its own top, not a page coordinate.
        let rect = HoverRect { top: 1000.0, bottom: 1040.0 };
        assert!(!crosses_midpoint(0, 1, rect, 1019.0));
        assert!(crosses_midpoint(0, 1, rect, 1020.0));
    }

    #[test]
    fn test_hover_own_index_is_noop() {
        let mut session = session_at(2, 250.0);
        for y in [210.0, 250.0, 299.0] {
            assert_eq!(session.hover(2, Some(row_rect(2)), y), None);
        }
        assert_eq!(session.index, 2);
    }

    #[test]
    fn test_hover_without_geometry_is_skipped() {
        let mut session = session_at(0, 50.0);
        assert_eq!(session.hover(1, None, 190.0), None);
        assert_eq!(session.index, 0);
        assert_eq!(session.hover(1, Some(row_rect(1)), 190.0), Some(Move { from: 0, to: 1 }));
    }

    #[test]
    fn test_upward_drag_cascades_one_index_at_a_time() {
        let mut list: Vec<u32> = (1..=6).collect();
        let mut session = session_at(4, 450.0);
        let ys = (15..=45).rev().map(|step| step as f64 * 10.0);

        let moves = sweep(&mut list, &mut session, ys);

        assert_eq!(
            moves,
            vec![
                Move { from: 4, to: 3 },
                Move { from: 3, to: 2 },
                Move { from: 2, to: 1 },
            ]
        );
        assert_eq!(session.index, 1);
        assert_eq!(session.origin_index, 4);
        assert_eq!(list, vec![1, 5, 2, 3, 4, 6]);
    }

    #[test]
    fn test_downward_drag_waits_for_midpoint() {
        let mut list: Vec<u32> = (1..=6).collect();
        let mut session = session_at(0, 50.0);

        // Into the top half of row 1: nothing yet
        let moves = sweep(&mut list, &mut session, [60.0, 110.0, 140.0]);
        assert!(moves.is_empty());

        let moves = sweep(&mut list, &mut session, [150.0]);
        assert_eq!(moves, vec![Move { from: 0, to: 1 }]);
        assert_eq!(list, vec![2, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_cancel_keeps_committed_moves() {
        let mut list: Vec<u32> = (1..=6).collect();
        let mut slot = Some(session_at(4, 450.0));
        if let Some(session) = slot.as_mut() {
            sweep(&mut list, session, [350.0, 320.0]);
        }
        let after_moves = list.clone();

        // Cancelling just discards the session
        let ended = slot.take();
        assert_eq!(ended.map(|s| s.index), Some(3));
        assert_eq!(list, after_moves);
        assert_eq!(list, vec![1, 2, 3, 5, 4, 6]);
    }

    #[test]
    fn test_preview_follows_pointer_minus_grab_offset() {
        let pending = PendingDrag {
            item: item(3),
            index: 2,
            start: XY::new(40.0, 230.0),
            grab_offset: XY::new(30.0, 25.0),
        };
        let mut session = DragSession::start(pending, XY::new(46.0, 230.0));
        session.pointer = XY::new(100.0, 125.0);

        assert_eq!(session.source_offset(), XY::new(70.0, 100.0));
        assert_eq!(session.preview_transform(), "translate(70px, 100px)");
    }
}
