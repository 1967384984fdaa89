//! Error types for splitting and combining mnemonic shares

use thiserror::Error;

use crate::share::ShareFormatError;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Where a mnemonic that failed to decode came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicOrigin {
    /// The secret mnemonic supplied for splitting
    Secret,
    /// The mnemonic part of a tagged share (1-based position in the share set)
    Share(usize),
}

impl std::fmt::Display for MnemonicOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Secret => write!(f, "secret mnemonic"),
            Self::Share(position) => write!(f, "mnemonic in share #{position}"),
        }
    }
}

/// Everything that can go wrong in the split/combine pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// A phrase is not a valid BIP39 mnemonic (unknown word, bad word count or checksum)
    #[error("Invalid {origin}: {source}")]
    InvalidMnemonic {
        origin: MnemonicOrigin,
        #[source]
        source: bip39::Error,
    },

    /// Entropy of this length has no mnemonic encoding
    #[error("Cannot encode {len} bytes of entropy as a mnemonic: {source}")]
    EncodingFailure {
        len: usize,
        #[source]
        source: bip39::Error,
    },

    /// A tagged share string could not be parsed
    #[error("Malformed share #{position}: {source}")]
    MalformedShare {
        position: usize,
        #[source]
        source: ShareFormatError,
    },

    /// Fewer than two shares were supplied for reconstruction
    #[error("Insufficient shares: at least 2 are required, but only {provided} provided")]
    InsufficientShares { provided: usize },

    /// The threshold scheme rejected the share set
    #[error("Failed to reconstruct secret: {0}")]
    ReconstructionFailed(String),

    /// The threshold scheme produced output that breaks its own contract
    #[error("Failed to split secret: {0}")]
    SplitFailed(String),

    /// Threshold and share count do not satisfy 1 <= M < N <= 255
    #[error("Invalid threshold parameters: {0}")]
    InvalidThresholdParams(String),
}

impl Error {
    pub(crate) fn params<S: Into<String>>(msg: S) -> Self {
        Self::InvalidThresholdParams(msg.into())
    }

    pub(crate) fn reconstruction<S: Into<String>>(msg: S) -> Self {
        Self::ReconstructionFailed(msg.into())
    }
}
