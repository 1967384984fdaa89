//! `Threshold` newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

/// Minimum number of shares needed to reconstruct the secret (1..=255)
///
/// Invariant: threshold >= 1 (enforced at construction). The upper bound is
/// the share count, which [`ThresholdParams`](super::ThresholdParams) enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Minimum valid threshold
    pub const MIN: u8 = 1;

    /// Creates a new threshold
    ///
    /// # Errors
    /// Returns [`Error::InvalidThresholdParams`] if the threshold is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedshare::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::params("threshold (-m) must be at least 1"));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
