//! List Reordering
//!
//! The single mutation the reorder list allows.

/// Remove the element at `from` and reinsert it at `to`.
///
/// All other elements keep their relative order. Both indices must be in
/// `0..items.len()`; callers derive them from rendered positions.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    debug_assert!(
        from < items.len() && to < items.len(),
        "move_item({}, {}) out of range for len {}",
        from,
        to,
        items.len()
    );
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        let mut v = vec![1, 2, 3, 4, 5, 6];
        move_item(&mut v, 0, 2);
        assert_eq!(v, vec![2, 3, 1, 4, 5, 6]);
    }

    #[test]
    fn test_move_backward() {
        let mut v = vec![1, 2, 3, 4, 5, 6];
        move_item(&mut v, 4, 1);
        assert_eq!(v, vec![1, 5, 2, 3, 4, 6]);
    }

    #[test]
    fn test_same_index_is_noop() {
        let mut v = vec![1, 2, 3];
        for i in 0..3 {
            move_item(&mut v, i, i);
            assert_eq!(v, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_first_to_last_and_back() {
        let mut v = vec![1, 2, 3, 4, 5, 6];
        move_item(&mut v, 0, 5);
        assert_eq!(v, vec![2, 3, 4, 5, 6, 1]);
        move_item(&mut v, 5, 0);
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);
        move_item(&mut v, 5, 0);
        assert_eq!(v, vec![6, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_moves_preserve_elements() {
        let mut v: Vec<u32> = (1..=6).collect();
        let moves = [(0, 5), (3, 1), (2, 2), (5, 0), (1, 4), (4, 3), (0, 1)];
        for (from, to) in moves {
            move_item(&mut v, from, to);
            let mut sorted = v.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
        }
    }
}
