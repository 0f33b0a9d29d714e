//! Conversion between candidate values and scroll offsets.

use super::domain::ValueDomain;
use super::layout::LayoutConfig;

/// Bidirectional value <-> offset mapping for one domain and geometry.
///
/// Offset 0 centers `min`; each candidate further down adds one `item_extent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMapper {
    domain: ValueDomain,
    item_extent: f64,
}

impl PositionMapper {
    pub fn new(domain: ValueDomain, layout: &LayoutConfig) -> Self {
        Self {
            domain,
            item_extent: layout.item_extent,
        }
    }

    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    /// Candidate centered at `offset`, rounding half away from zero.
    pub fn value_at_offset(&self, offset: f64) -> i64 {
        if !offset.is_finite() {
            return self.domain.min();
        }
        let steps = (offset / self.item_extent).round();
        // Float-to-int `as` saturates, so far-out offsets still clamp below.
        let value = self.domain.min().saturating_add(steps as i64);
        self.domain.clamp(value)
    }

    /// Offset at which `value` is exactly centered.
    pub fn offset_for_value(&self, value: i64) -> f64 {
        self.domain.to_index(value) as f64 * self.item_extent
    }

    /// Largest meaningful offset (the `max` candidate centered).
    pub fn max_offset(&self) -> f64 {
        self.offset_for_value(self.domain.max())
    }
}
