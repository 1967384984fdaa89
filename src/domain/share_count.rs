//! `ShareCount` newtype for Shamir Secret Sharing

use crate::error::{Error, Result};

/// Number of shares to create (2..=255)
///
/// A single share could only be combined with itself, so at least two are
/// required. The GF(256) dealer hands out x-coordinates 1..=255, which caps
/// the count at 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 2;

    /// Maximum valid share count
    pub const MAX: u8 = u8::MAX;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`Error::InvalidThresholdParams`] if count is 0 or 1
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedshare::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(ShareCount::MAX).is_ok());
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(1).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::params(format!(
                "share count (-n) must be at least {} (got {value})",
                Self::MIN
            )));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
