//! Split a BIP39 mnemonic into threshold shares and combine them back
//!
//! Each share is stored as `"<mnemonic>,<index>"`: the share body encoded as
//! a mnemonic of the same length as the secret, plus the share index that
//! the mnemonic cannot carry.
//!
//! ```rust
//! use seedshare::commands::{combine_shares, split_mnemonic};
//! use seedshare::domain::ThresholdParams;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let secret = "legal winner thank year wave sausage worth useful legal winner thank yellow";
//! let params = ThresholdParams::from_counts(2, 3)?;
//!
//! let shares: Vec<String> = split_mnemonic(secret, params)?
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(shares.len(), 3);
//!
//! let recovered = combine_shares(&shares[1..])?;
//! assert_eq!(recovered.as_str(), secret);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod share;
pub mod shares_file;
pub mod sharer;
pub mod wasm;

pub use error::{Error, Result};
