//! Split and combine pipelines
//!
//! Splitting: mnemonic -> entropy -> raw shares -> (body mnemonic, index) pairs.
//! Combining runs the same steps in reverse. Every stage returns a typed
//! [`Error`]; nothing is defaulted or dropped.

use tracing::debug;
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::{Request, Response, ThresholdParams};
use crate::error::{Error, MnemonicOrigin, Result};
use crate::share::TaggedShare;
use crate::sharer::{Gf256Sharer, RawShare, ThresholdSharer};

/// Fewest shares for which interpolation means anything
pub const MIN_COMBINE_SHARES: usize = 2;

/// Executes a single split or combine request with the GF(256) sharer
///
/// # Errors
/// Propagates the error of whichever pipeline the request selects
pub fn run(request: Request) -> Result<Response> {
    run_with(&Gf256Sharer, request)
}

/// Executes a single request with the given sharer
///
/// # Errors
/// Propagates the error of whichever pipeline the request selects
pub fn run_with<S: ThresholdSharer>(sharer: &S, request: Request) -> Result<Response> {
    match request {
        Request::Split { mnemonic, params } => {
            split_mnemonic_with(sharer, &mnemonic, params).map(Response::Shares)
        }
        Request::Combine { shares } => combine_shares_with(sharer, &shares).map(Response::Secret),
    }
}

/// Split a mnemonic into tagged shares
///
/// Returns `params.share_count()` shares in the order the sharer produced them.
///
/// # Errors
/// Returns an error if the mnemonic is invalid, the sharer fails, or a share
/// body cannot be re-encoded
pub fn split_mnemonic(mnemonic: &str, params: ThresholdParams) -> Result<Vec<TaggedShare>> {
    split_mnemonic_with(&Gf256Sharer, mnemonic, params)
}

/// Split a mnemonic into tagged shares using the given sharer
///
/// # Errors
/// See [`split_mnemonic`]
pub fn split_mnemonic_with<S: ThresholdSharer>(
    sharer: &S,
    mnemonic: &str,
    params: ThresholdParams,
) -> Result<Vec<TaggedShare>> {
    let entropy = codec::decode(mnemonic, MnemonicOrigin::Secret)?;
    debug!(entropy_len = entropy.len(), "decoded secret mnemonic");

    let raw_shares = sharer.split(&entropy, params)?;

    let tagged = raw_shares
        .iter()
        .map(|share| {
            // Bodies are exactly as long as the entropy, so this only fails
            // if the sharer breaks its contract
            let body_mnemonic = codec::encode(share.body())?;
            Ok(TaggedShare::new(body_mnemonic, share.index()))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(share_count = tagged.len(), "encoded tagged shares");
    Ok(tagged)
}

/// Combine tagged shares to reconstruct the original mnemonic
///
/// Returns the reconstructed BIP39 mnemonic.
///
/// # Errors
/// Returns an error if fewer than two shares are supplied, a share is
/// malformed or carries an invalid mnemonic, or reconstruction fails
pub fn combine_shares<T: AsRef<str>>(share_strings: &[T]) -> Result<Zeroizing<String>> {
    combine_shares_with(&Gf256Sharer, share_strings)
}

/// Combine tagged shares using the given sharer
///
/// # Errors
/// See [`combine_shares`]
pub fn combine_shares_with<S: ThresholdSharer, T: AsRef<str>>(
    sharer: &S,
    share_strings: &[T],
) -> Result<Zeroizing<String>> {
    if share_strings.len() < MIN_COMBINE_SHARES {
        return Err(Error::InsufficientShares {
            provided: share_strings.len(),
        });
    }

    // Parse every share before touching the codec
    let tagged = share_strings
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            s.as_ref()
                .parse::<TaggedShare>()
                .map_err(|source| Error::MalformedShare {
                    position: idx + 1,
                    source,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let raw_shares = tagged
        .iter()
        .enumerate()
        .map(|(idx, share)| {
            let body = codec::decode(share.mnemonic(), MnemonicOrigin::Share(idx + 1))?;
            Ok(RawShare::from_parts(&body, share.index()))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(share_count = raw_shares.len(), "decoded share mnemonics");

    let entropy = sharer.combine(&raw_shares)?;

    codec::encode(&entropy)
}
