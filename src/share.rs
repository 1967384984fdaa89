//! Tagged share serialization
//!
//! A tagged share pairs the mnemonic of a share body with the share index,
//! which has no room in the mnemonic's entropy domain. It is stored as
//! `"<mnemonic>,<index>"`, e.g.
//!
//! ```text
//! legal winner thank year wave sausage worth useful legal winner thank yellow,3
//! ```

use std::str::FromStr;

use thiserror::Error;
use zeroize::Zeroizing;

use crate::domain::ShareIndex;

/// Separator between the mnemonic and the index
pub const DELIMITER: char = ',';

/// Reasons a tagged share string fails to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareFormatError {
    #[error("missing ',' between mnemonic and share index")]
    MissingDelimiter,

    #[error("mnemonic part is empty")]
    EmptyMnemonic,

    #[error("share index '{0}' is not a number between 1 and 255")]
    InvalidIndex(String),

    #[error("share index 0 is reserved for the secret")]
    ZeroIndex,
}

/// A share body mnemonic and the index it must be combined with
#[derive(Clone, PartialEq, Eq)]
pub struct TaggedShare {
    mnemonic: Zeroizing<String>,
    index: ShareIndex,
}

impl TaggedShare {
    #[must_use]
    pub fn new(mnemonic: Zeroizing<String>, index: ShareIndex) -> Self {
        Self { mnemonic, index }
    }

    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }
}

impl std::fmt::Display for TaggedShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{DELIMITER}{}", &*self.mnemonic, self.index)
    }
}

impl std::fmt::Debug for TaggedShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggedShare")
            .field("index", &*self.index)
            .field("words", &self.mnemonic.split_whitespace().count())
            .finish_non_exhaustive()
    }
}

impl FromStr for TaggedShare {
    type Err = ShareFormatError;

    /// Splits on the first delimiter; the mnemonic itself is not validated here
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mnemonic, index) = s
            .split_once(DELIMITER)
            .ok_or(ShareFormatError::MissingDelimiter)?;

        let mnemonic = mnemonic.trim();
        if mnemonic.is_empty() {
            return Err(ShareFormatError::EmptyMnemonic);
        }

        let index = index.trim();
        let value: u8 = index
            .parse()
            .map_err(|_| ShareFormatError::InvalidIndex(index.to_string()))?;
        let index = ShareIndex::new(value).ok_or(ShareFormatError::ZeroIndex)?;

        Ok(Self::new(Zeroizing::new(mnemonic.to_string()), index))
    }
}
