//! Pointer drag tracking and scroll animation for the picker column.
//!
//! The terminal has no native scroll container, so the host turns left-button
//! drags into scroll offsets itself and eases the drawn offset toward the
//! engine's target after discrete commits and snaps.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut drag = DragTracker::default();
//! drag.press(10, 5, picker.scroll_offset());
//!
//! // In event loop:
//! if let Some(offset) = drag.drag_to(7, picker.layout().item_extent) {
//!     picker.handle(PickerEvent::Scrolled(offset), now);
//! }
//! ```

/// Where the left button went down.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    column: u16,
    row: u16,
    /// Engine offset while the pointer was on `origin_row`
    origin_offset: f64,
    origin_row: u16,
    /// Row the pointer was last seen on
    current_row: u16,
    /// Pointer moved to another row since the press
    dragged: bool,
}

/// How a press ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Released without moving rows: a click at the press position
    Click { column: u16, row: u16 },
    /// Released after dragging
    DragEnd,
}

/// Converts a left-button drag into scroll offsets.
///
/// One terminal row is one candidate, so moving the pointer down one row
/// scrolls back by one `item_extent`.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    press: Option<Press>,
}

impl DragTracker {
    pub fn press(&mut self, column: u16, row: u16, origin_offset: f64) {
        self.press = Some(Press {
            column,
            row,
            origin_offset,
            origin_row: row,
            current_row: row,
            dragged: false,
        });
    }

    /// Re-anchor an active press at the pointer's current row.
    ///
    /// Needed whenever the engine recomputes its offset under a held button
    /// (a resize changes the item extent).
    pub fn rebase(&mut self, offset: f64) {
        if let Some(press) = self.press.as_mut() {
            press.origin_offset = offset;
            press.origin_row = press.current_row;
        }
    }

    /// Offset for the pointer now being on `row`, if a press is active.
    pub fn drag_to(&mut self, row: u16, item_extent: f64) -> Option<f64> {
        let press = self.press.as_mut()?;
        press.current_row = row;
        if row != press.row {
            press.dragged = true;
        }
        if !press.dragged {
            return None;
        }
        let rows_moved = row as f64 - press.origin_row as f64;
        Some((press.origin_offset - rows_moved * item_extent).max(0.0))
    }

    pub fn release(&mut self) -> Option<Release> {
        let press = self.press.take()?;
        if press.dragged {
            Some(Release::DragEnd)
        } else {
            Some(Release::Click {
                column: press.column,
                row: press.row,
            })
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.press.map(|p| p.dragged).unwrap_or(false)
    }
}

/// Eases the drawn offset toward a target with exponential decay.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    /// Offset currently drawn
    displayed: f64,
    /// Fraction of the remaining distance covered per frame
    speed: f64,
}

impl OffsetAnimator {
    pub fn new(initial: f64, speed: f64) -> Self {
        Self {
            displayed: initial,
            speed: speed.clamp(0.05, 1.0),
        }
    }

    /// Move without animating (mount, resize, live drag).
    pub fn jump_to(&mut self, offset: f64) {
        self.displayed = offset;
    }

    /// Advance one frame toward `target`. Returns `true` while still moving.
    pub fn step(&mut self, target: f64) -> bool {
        let remaining = target - self.displayed;
        if remaining.abs() < 0.5 {
            self.displayed = target;
            return false;
        }
        self.displayed += remaining * self.speed;
        true
    }

    pub fn is_animating(&self, target: f64) -> bool {
        self.displayed != target
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_without_movement() {
        let mut drag = DragTracker::default();
        drag.press(4, 10, 480.0);

        assert_eq!(drag.drag_to(10, 48.0), None);
        assert!(!drag.is_dragging());
        assert_eq!(drag.release(), Some(Release::Click { column: 4, row: 10 }));
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn test_drag_converts_rows_to_offset() {
        let mut drag = DragTracker::default();
        drag.press(4, 10, 480.0);

        // Pulling content down reveals smaller values
        assert_eq!(drag.drag_to(12, 48.0), Some(384.0));
        assert_eq!(drag.drag_to(7, 48.0), Some(624.0));
        // Back on the press row is still part of the drag
        assert_eq!(drag.drag_to(10, 48.0), Some(480.0));
        assert!(drag.is_dragging());
        assert_eq!(drag.release(), Some(Release::DragEnd));
    }

    #[test]
    fn test_drag_never_goes_negative() {
        let mut drag = DragTracker::default();
        drag.press(0, 0, 48.0);
        assert_eq!(drag.drag_to(5, 48.0), Some(0.0));
    }

    #[test]
    fn test_rebase_keeps_pointer_row_anchored() {
        let mut drag = DragTracker::default();
        drag.press(4, 10, 1440.0);
        assert_eq!(drag.drag_to(8, 48.0), Some(1536.0));

        // Extent shrank to 40 and the engine re-centered at 1200
        drag.rebase(1200.0);
        assert_eq!(drag.drag_to(8, 40.0), Some(1200.0));
        assert_eq!(drag.drag_to(7, 40.0), Some(1240.0));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_rebase_before_movement_still_clicks() {
        let mut drag = DragTracker::default();
        drag.press(4, 10, 1440.0);
        drag.rebase(1200.0);

        assert_eq!(drag.drag_to(10, 40.0), None);
        assert_eq!(drag.release(), Some(Release::Click { column: 4, row: 10 }));

        // No press, nothing to rebase
        drag.rebase(0.0);
        assert_eq!(drag.drag_to(3, 40.0), None);
    }

    #[test]
    fn test_drag_without_press_ignored() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.drag_to(3, 48.0), None);
    }

    #[test]
    fn test_animator_converges() {
        let mut animator = OffsetAnimator::new(0.0, 0.35);
        let target = 480.0;

        let mut frames = 0;
        while animator.step(target) {
            frames += 1;
            assert!(frames < 100, "animation did not settle");
        }

        assert_eq!(animator.displayed(), target);
        assert!(!animator.is_animating(target));
    }

    #[test]
    fn test_jump_skips_animation() {
        let mut animator = OffsetAnimator::new(0.0, 0.35);
        animator.jump_to(96.0);
        assert!(!animator.step(96.0));
        assert_eq!(animator.displayed(), 96.0);
    }
}
