//! Threshold parameter validation for splits

use crate::error::{Error, Result};

use super::{ShareCount, Threshold};

/// Validated pair of threshold (M) and share count (N)
///
/// Enforces 1 <= M < N <= 255. Requiring every share (M == N) is rejected
/// along with M > N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdParams {
    threshold: Threshold,
    share_count: ShareCount,
}

impl ThresholdParams {
    /// Creates new threshold parameters
    ///
    /// # Errors
    /// Returns [`Error::InvalidThresholdParams`] if threshold is not strictly less than share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedshare::domain::{ShareCount, Threshold, ThresholdParams};
    ///
    /// let params = ThresholdParams::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap(),
    /// ).unwrap();
    ///
    /// assert_eq!(*params.threshold(), 3);
    /// assert_eq!(*params.share_count(), 5);
    ///
    /// // Requiring all shares is rejected
    /// assert!(ThresholdParams::new(Threshold::new(3).unwrap(), ShareCount::new(3).unwrap()).is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold >= *share_count {
            return Err(Error::params(format!(
                "threshold {} must be less than share count {}",
                *threshold, *share_count
            )));
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Creates threshold parameters from raw counts
    ///
    /// # Errors
    /// Returns [`Error::InvalidThresholdParams`] if either value is zero, exceeds 255,
    /// or the threshold is not strictly less than the share count
    pub fn from_counts(threshold: u32, share_count: u32) -> Result<Self> {
        let threshold = u8::try_from(threshold)
            .map_err(|_| Error::params(format!("threshold {threshold} exceeds 255")))
            .and_then(Threshold::new)?;
        let share_count = u8::try_from(share_count)
            .map_err(|_| Error::params(format!("share count {share_count} exceeds 255")))
            .and_then(ShareCount::new)?;
        Self::new(threshold, share_count)
    }

    /// Creates threshold parameters from optional flag values
    ///
    /// Both values must be supplied together.
    ///
    /// # Errors
    /// Returns [`Error::InvalidThresholdParams`] if either value is missing or invalid
    pub fn from_flags(threshold: Option<u32>, share_count: Option<u32>) -> Result<Self> {
        match (threshold, share_count) {
            (Some(m), Some(n)) => Self::from_counts(m, n),
            (None, Some(_)) => Err(Error::params("share count given without a threshold (-m)")),
            (Some(_), None) => Err(Error::params("threshold given without a share count (-n)")),
            (None, None) => Err(Error::params(
                "a threshold (-m) and share count (-n) are required",
            )),
        }
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
