//! The selectable range of a picker.

use crate::error::{PickerError, PickerResult};
use crate::log;

/// Immutable description of the candidate sequence `min..=max`.
///
/// Index and value correspond through `index = value - min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueDomain {
    min: i64,
    max: i64,
}

impl ValueDomain {
    /// Create a domain, collapsing an inverted range to `{min, min}`.
    ///
    /// An inverted range is a caller error; the picker keeps working on the
    /// degenerate single-candidate domain instead of panicking.
    pub fn new(min: i64, max: i64) -> Self {
        match Self::try_new(min, max) {
            Ok(domain) => domain,
            Err(e) => {
                log::log(&format!("Warning: {}, collapsing to {}", e, min));
                Self { min, max: min }
            }
        }
    }

    /// Create a domain, rejecting `min > max`.
    pub fn try_new(min: i64, max: i64) -> PickerResult<Self> {
        if min > max {
            return Err(PickerError::InvertedDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        (self.max.abs_diff(self.min) as usize).saturating_add(1)
    }

    /// A domain always has at least one candidate.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Project any value into `[min, max]`.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Index of a value in the candidate sequence (clamped first).
    pub fn to_index(&self, value: i64) -> usize {
        self.clamp(value).abs_diff(self.min) as usize
    }

    /// Value at an index of the candidate sequence (clamped to the last candidate).
    pub fn from_index(&self, index: usize) -> i64 {
        let last = self.len() - 1;
        self.min.saturating_add_unsigned(index.min(last) as u64)
    }

    /// Iterate the candidates in ascending order.
    pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_into_range() {
        let domain = ValueDomain::new(40, 150);
        assert_eq!(domain.clamp(10), 40);
        assert_eq!(domain.clamp(151), 150);
        assert_eq!(domain.clamp(70), 70);
    }

    #[test]
    fn test_index_correspondence() {
        let domain = ValueDomain::new(40, 150);
        assert_eq!(domain.len(), 111);
        assert_eq!(domain.to_index(40), 0);
        assert_eq!(domain.to_index(85), 45);
        assert_eq!(domain.from_index(45), 85);
        assert_eq!(domain.from_index(1_000), 150);
        assert_eq!(domain.to_index(-5), 0);
    }

    #[test]
    fn test_inverted_domain_collapses() {
        assert!(matches!(
            ValueDomain::try_new(10, 5),
            Err(PickerError::InvertedDomain { min: 10, max: 5 })
        ));

        let domain = ValueDomain::new(10, 5);
        assert_eq!(domain.min(), 10);
        assert_eq!(domain.max(), 10);
        assert_eq!(domain.len(), 1);
        assert_eq!(domain.clamp(3), 10);
        assert_eq!(domain.clamp(99), 10);
    }

    #[test]
    fn test_iter_is_ascending() {
        let domain = ValueDomain::new(-2, 2);
        let values: Vec<i64> = domain.iter().collect();
        assert_eq!(values, vec![-2, -1, 0, 1, 2]);
        assert!(domain.contains(0));
        assert!(!domain.contains(3));
    }
}
