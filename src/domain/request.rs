//! Explicit request and response types for the split/combine pipeline

use zeroize::Zeroizing;

use super::ThresholdParams;
use crate::share::TaggedShare;

/// One unit of work for [`run`](crate::commands::run)
///
/// Built once by the boundary layer; the pipeline reads nothing else.
pub enum Request {
    /// Split a secret mnemonic into tagged shares
    Split {
        mnemonic: Zeroizing<String>,
        params: ThresholdParams,
    },
    /// Reconstruct the secret mnemonic from serialized tagged shares
    Combine { shares: Vec<String> },
}

/// Output of a completed [`Request`]
pub enum Response {
    /// Tagged shares in the order the threshold scheme produced them
    Shares(Vec<TaggedShare>),
    /// The reconstructed secret mnemonic
    Secret(Zeroizing<String>),
}
