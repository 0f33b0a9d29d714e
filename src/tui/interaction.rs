//! Component-level mouse interactivity system.
//!
//! This module provides a registry-based system for handling mouse interactions
//! at the component level. Components register their interactive regions during
//! render, and mouse events are automatically routed to the appropriate component.
//!
//! # Example
//!
//! ```ignore
//! // During render, register a candidate row:
//! registry.register_row(value, ClickRegion::new(x, y, width, 1));
//!
//! // Clicks and hovers over that row now resolve to the candidate
//! ```

use dialpick::picker::{PickerEvent, Step};

use crate::events::Action;

/// A rectangular screen area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is within the region (right and bottom edges exclusive)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// An interactive region that can respond to mouse events.
///
/// Components create these during render to define clickable/scrollable areas.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch while the pointer hovers (None = no hover feedback)
    pub on_hover: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(bounds: ClickRegion, action: Action) -> Self {
        Self {
            bounds,
            on_click: Some(action),
            on_hover: None,
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(bounds: ClickRegion, scroll_up: Action, scroll_down: Action) -> Self {
        Self {
            bounds,
            on_click: None,
            on_hover: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the hover action (for builder pattern)
    pub fn with_hover(mut self, action: Action) -> Self {
        self.on_hover = Some(action);
        self
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
///
/// Components register their interactive regions here during render,
/// and the mouse handler queries this registry to dispatch events.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register the picker column as a wheel target
    pub fn register_column(&mut self, bounds: ClickRegion) {
        self.register(InteractiveRegion::scrollable(
            bounds,
            Action::Picker(PickerEvent::Wheel(Step::Decrement)),
            Action::Picker(PickerEvent::Wheel(Step::Increment)),
        ));
    }

    /// Register one visible candidate row
    pub fn register_row(&mut self, value: i64, bounds: ClickRegion) {
        self.register(
            InteractiveRegion::clickable(bounds, Action::Picker(PickerEvent::Select(value)))
                .with_hover(Action::Picker(PickerEvent::Hover(Some(value))))
                .with_priority(1),
        );
    }

    /// Highest-priority region containing (x, y) that has `pick` set
    fn find<F>(&self, x: u16, y: u16, pick: F) -> Action
    where
        F: Fn(&InteractiveRegion) -> Option<Action>,
    {
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y) && pick(r).is_some())
            .collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        candidates
            .first()
            .and_then(|r| pick(r))
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_click)
    }

    /// Find the hover action at (x, y); clears the hover when nothing matches
    pub fn handle_hover(&self, x: u16, y: u16) -> Action {
        let action = self.find(x, y, |r| r.on_hover);
        if action.is_none() {
            Action::Picker(PickerEvent::Hover(None))
        } else {
            action
        }
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_up)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_down)
    }
}
