//! Presentation geometry derived from the viewport width.
//!
//! The width is measured in abstract units (CSS-pixel-like). Terminal hosts
//! convert columns to units with a cell width before asking for a layout.

use serde::Deserialize;

use crate::error::{PickerError, PickerResult};

/// Responsive size class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Medium,
    Wide,
}

impl ViewportClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            ViewportClass::Narrow => "narrow",
            ViewportClass::Medium => "medium",
            ViewportClass::Wide => "wide",
        }
    }
}

/// Width thresholds between viewport classes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Widths at or above this are at least `Medium`
    pub medium: u32,
    /// Widths at or above this are `Wide`
    pub wide: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: 640,
            wide: 1024,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width.
    pub fn classify(&self, width: u32) -> ViewportClass {
        if width >= self.wide {
            ViewportClass::Wide
        } else if width >= self.medium {
            ViewportClass::Medium
        } else {
            ViewportClass::Narrow
        }
    }
}

/// Row geometry of the candidate column.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// Height of one candidate row, in offset units
    pub item_extent: f64,
    /// Rows rendered above and below the centered candidate
    pub half_window: u16,
}

impl LayoutConfig {
    pub fn new(item_extent: f64, half_window: u16) -> PickerResult<Self> {
        let layout = Self {
            item_extent,
            half_window,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> PickerResult<()> {
        if !self.item_extent.is_finite() || self.item_extent <= 0.0 {
            return Err(PickerError::InvalidLayout(format!(
                "item extent must be positive, got {}",
                self.item_extent
            )));
        }
        Ok(())
    }

    /// Total rows in the visible window.
    pub fn window_len(&self) -> usize {
        2 * self.half_window as usize + 1
    }
}

/// Per-class layout table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutTable {
    pub narrow: LayoutConfig,
    pub medium: LayoutConfig,
    pub wide: LayoutConfig,
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self {
            narrow: LayoutConfig {
                item_extent: 40.0,
                half_window: 2,
            },
            medium: LayoutConfig {
                item_extent: 48.0,
                half_window: 3,
            },
            wide: LayoutConfig {
                item_extent: 56.0,
                half_window: 3,
            },
        }
    }
}

/// Pure mapping from viewport width to layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutPolicy {
    pub breakpoints: Breakpoints,
    pub table: LayoutTable,
}

impl LayoutPolicy {
    pub fn new(breakpoints: Breakpoints, table: LayoutTable) -> PickerResult<Self> {
        let policy = Self { breakpoints, table };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> PickerResult<()> {
        if self.breakpoints.medium >= self.breakpoints.wide {
            return Err(PickerError::InvalidLayout(format!(
                "breakpoints must increase, got medium {} and wide {}",
                self.breakpoints.medium, self.breakpoints.wide
            )));
        }
        self.table.narrow.validate()?;
        self.table.medium.validate()?;
        self.table.wide.validate()
    }

    pub fn classify(&self, width: u32) -> ViewportClass {
        self.breakpoints.classify(width)
    }

    pub fn layout_for_class(&self, class: ViewportClass) -> LayoutConfig {
        match class {
            ViewportClass::Narrow => self.table.narrow,
            ViewportClass::Medium => self.table.medium,
            ViewportClass::Wide => self.table.wide,
        }
    }

    pub fn layout_for(&self, width: u32) -> LayoutConfig {
        self.layout_for_class(self.classify(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        let breakpoints = Breakpoints::default();
        assert_eq!(breakpoints.classify(0), ViewportClass::Narrow);
        assert_eq!(breakpoints.classify(639), ViewportClass::Narrow);
        assert_eq!(breakpoints.classify(640), ViewportClass::Medium);
        assert_eq!(breakpoints.classify(1023), ViewportClass::Medium);
        assert_eq!(breakpoints.classify(1024), ViewportClass::Wide);
    }

    #[test]
    fn test_default_policy_table() {
        let policy = LayoutPolicy::default();
        assert_eq!(policy.layout_for(320).item_extent, 40.0);
        assert_eq!(policy.layout_for(800).item_extent, 48.0);
        assert_eq!(policy.layout_for(800).window_len(), 7);
        assert_eq!(policy.layout_for(1440).item_extent, 56.0);
    }

    #[test]
    fn test_invalid_layouts_rejected() {
        assert!(LayoutConfig::new(0.0, 2).is_err());
        assert!(LayoutConfig::new(f64::NAN, 2).is_err());
        assert!(LayoutConfig::new(-4.0, 2).is_err());
        assert!(LayoutConfig::new(32.0, 0).is_ok());

        let inverted = Breakpoints {
            medium: 1024,
            wide: 640,
        };
        assert!(LayoutPolicy::new(inverted, LayoutTable::default()).is_err());
    }
}
