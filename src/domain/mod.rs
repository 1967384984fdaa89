//! Domain types for mnemonic secret sharing
//!
//! This module contains validated newtypes and configuration:
//! - [`Threshold`] - Minimum shares required for reconstruction (1..=255)
//! - [`ShareCount`] - Total number of shares to create (2..=255)
//! - [`ShareIndex`] - Share x-coordinate (1..=255)
//! - [`ThresholdParams`] - Validated threshold and share count pair (M < N)
//! - [`ShareFiles`] - Input/output share file paths
//! - [`Request`] / [`Response`] - Pipeline entry and exit values

mod config;
mod params;
mod request;
mod share_count;
mod share_index;
mod threshold;

pub use config::{DEFAULT_SHARES_FILE, ShareFiles};
pub use params::ThresholdParams;
pub use request::{Request, Response};
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
