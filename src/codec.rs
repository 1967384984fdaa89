//! BIP39 mnemonic codec
//!
//! Maps between entropy bytes and checksummed English word sequences. Only
//! the entropy sizes BIP39 defines are accepted:
//!
//! | entropy | words |
//! |---------|-------|
//! | 16 B    | 12    |
//! | 20 B    | 15    |
//! | 24 B    | 18    |
//! | 28 B    | 21    |
//! | 32 B    | 24    |
//!
//! # Examples
//!
//! ```rust
//! use seedshare::codec;
//! use seedshare::error::MnemonicOrigin;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let phrase = "abandon abandon abandon abandon abandon abandon \
//!               abandon abandon abandon abandon abandon about";
//! let entropy = codec::decode(phrase, MnemonicOrigin::Secret)?;
//! assert_eq!(*entropy, vec![0u8; 16]);
//!
//! let encoded = codec::encode(&entropy)?;
//! assert_eq!(encoded.as_str(), phrase.split_whitespace().collect::<Vec<_>>().join(" "));
//! # Ok(())
//! # }
//! ```

use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

use crate::error::{Error, MnemonicOrigin, Result};

/// Entropy lengths in bytes that have a mnemonic encoding
pub const SUPPORTED_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Number of mnemonic words for an entropy length, or `None` if unsupported
///
/// Every 32 bits of entropy carry one checksum bit, and each word holds 11 bits.
#[must_use]
pub fn word_count_for(entropy_len: usize) -> Option<usize> {
    SUPPORTED_ENTROPY_LENGTHS
        .contains(&entropy_len)
        .then(|| entropy_len * 3 / 4)
}

/// Decodes a mnemonic phrase into its entropy, validating the checksum
///
/// Words may be separated by any whitespace and are matched case-insensitively.
///
/// # Errors
/// Returns [`Error::InvalidMnemonic`] tagged with `origin` if the word count is
/// wrong, a word is not in the English list, or the checksum does not match
pub fn decode(phrase: &str, origin: MnemonicOrigin) -> Result<Zeroizing<Vec<u8>>> {
    let normalized = Zeroizing::new(
        phrase
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" "),
    );

    let mnemonic = Mnemonic::parse_in(Language::English, normalized.as_str())
        .map_err(|source| Error::InvalidMnemonic { origin, source })?;

    Ok(Zeroizing::new(mnemonic.to_entropy()))
}

/// Encodes entropy as a checksummed mnemonic phrase with single-space separators
///
/// # Errors
/// Returns [`Error::EncodingFailure`] if the entropy length is not one of
/// [`SUPPORTED_ENTROPY_LENGTHS`]
pub fn encode(entropy: &[u8]) -> Result<Zeroizing<String>> {
    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy).map_err(|source| {
        Error::EncodingFailure {
            len: entropy.len(),
            source,
        }
    })?;

    Ok(Zeroizing::new(mnemonic.to_string()))
}
