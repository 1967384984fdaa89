//! `ShareIndex` newtype for Shamir Secret Sharing

/// Share index, the x-coordinate of a share (1..=255)
///
/// Zero is never a valid index: the polynomial evaluated at x = 0 is the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Minimum valid share index
    pub const MIN: u8 = 1;

    /// Creates a new share index, or `None` if `value` is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedshare::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(1).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// assert!(ShareIndex::new(255).is_some());
    /// assert!(ShareIndex::new(0).is_none());
    /// ```
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (value >= Self::MIN).then_some(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
