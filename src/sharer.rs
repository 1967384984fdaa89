//! Threshold secret sharing over GF(256)
//!
//! [`ThresholdSharer`] is the seam between the mnemonic pipeline and the
//! polynomial scheme. [`Gf256Sharer`] implements it with `blahaj`, whose
//! shares are serialized as `index || body`; [`RawShare`] keeps the
//! `body || index` layout the tagged-share convention is built on.

use std::collections::HashSet;

use blahaj::{Share, Sharks};
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::{ShareIndex, ThresholdParams};
use crate::error::{Error, Result};

/// One share as produced by a [`ThresholdSharer`]: share body plus its x-coordinate
#[derive(Clone, PartialEq, Eq)]
pub struct RawShare {
    body: Zeroizing<Vec<u8>>,
    index: ShareIndex,
}

impl RawShare {
    /// Builds a raw share from its body bytes and index
    #[must_use]
    pub fn from_parts(body: &[u8], index: ShareIndex) -> Self {
        Self {
            body: Zeroizing::new(body.to_vec()),
            index,
        }
    }

    /// Share body, the same length as the secret
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    /// Serialized form: body followed by the index byte
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(Vec::with_capacity(self.body.len() + 1));
        bytes.extend_from_slice(&self.body);
        bytes.push(*self.index);
        bytes
    }
}

impl std::fmt::Debug for RawShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawShare")
            .field("index", &*self.index)
            .field("body_len", &self.body.len())
            .finish_non_exhaustive()
    }
}

/// Splits a byte string into indexed shares and combines them back
pub trait ThresholdSharer {
    /// Splits `secret` into `params.share_count()` shares, any
    /// `params.threshold()` of which reconstruct it
    ///
    /// # Errors
    /// Returns [`Error::SplitFailed`] if the scheme cannot produce the requested shares
    fn split(&self, secret: &[u8], params: ThresholdParams) -> Result<Vec<RawShare>>;

    /// Reconstructs the secret by interpolating every supplied share at x = 0
    ///
    /// # Errors
    /// Returns [`Error::ReconstructionFailed`] if the share set is empty,
    /// has inconsistent lengths, or repeats an index
    fn combine(&self, shares: &[RawShare]) -> Result<Zeroizing<Vec<u8>>>;
}

/// Shamir secret sharing over GF(256), backed by `blahaj`
///
/// The dealer assigns indices 1, 2, ..., N in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gf256Sharer;

impl ThresholdSharer for Gf256Sharer {
    fn split(&self, secret: &[u8], params: ThresholdParams) -> Result<Vec<RawShare>> {
        if secret.is_empty() {
            return Err(Error::SplitFailed("secret is empty".to_string()));
        }

        let share_count = usize::from(*params.share_count());
        let sharks = Sharks(*params.threshold());
        let shares = sharks
            .dealer(secret)
            .take(share_count)
            .map(|share| from_blahaj(&share))
            .collect::<Result<Vec<_>>>()?;

        if shares.len() != share_count {
            return Err(Error::SplitFailed(format!(
                "dealer produced {} shares, expected {share_count}",
                shares.len()
            )));
        }
        if let Some(share) = shares.iter().find(|s| s.body().len() != secret.len()) {
            return Err(Error::SplitFailed(format!(
                "share {} has {} body bytes, expected {}",
                *share.index(),
                share.body().len(),
                secret.len()
            )));
        }

        debug!(
            threshold = *params.threshold(),
            share_count,
            secret_len = secret.len(),
            "dealt shares"
        );
        Ok(shares)
    }

    fn combine(&self, shares: &[RawShare]) -> Result<Zeroizing<Vec<u8>>> {
        let Some(first) = shares.first() else {
            return Err(Error::reconstruction("no shares provided"));
        };
        let body_len = first.body().len();

        let mut seen = HashSet::with_capacity(shares.len());
        for (idx, share) in shares.iter().enumerate() {
            if share.body().len() != body_len {
                return Err(Error::reconstruction(format!(
                    "share #{} decodes to {} bytes, but share #1 decodes to {body_len}",
                    idx + 1,
                    share.body().len()
                )));
            }
            if !seen.insert(share.index()) {
                return Err(Error::reconstruction(format!(
                    "share #{} repeats share index {}",
                    idx + 1,
                    share.index()
                )));
            }
        }

        // Indices are distinct non-zero bytes, so there are at most 255 shares
        let threshold = u8::try_from(shares.len())
            .map_err(|_| Error::reconstruction("more than 255 shares provided"))?;

        let parsed = shares.iter().map(to_blahaj).collect::<Result<Vec<_>>>()?;

        let sharks = Sharks(threshold);
        let secret = sharks
            .recover(&parsed)
            .map_err(|e| Error::reconstruction(format!("{e:?}")))?;

        debug!(share_count = shares.len(), secret_len = secret.len(), "interpolated secret");
        Ok(Zeroizing::new(secret))
    }
}

fn to_blahaj(share: &RawShare) -> Result<Share> {
    let mut bytes = Zeroizing::new(Vec::with_capacity(share.body().len() + 1));
    bytes.push(*share.index());
    bytes.extend_from_slice(share.body());

    Share::try_from(bytes.as_slice())
        .map_err(|e| Error::reconstruction(format!("share index {}: {e}", share.index())))
}

fn from_blahaj(share: &Share) -> Result<RawShare> {
    let bytes = Zeroizing::new(Vec::from(share));
    let (&x, body) = bytes
        .split_first()
        .ok_or_else(|| Error::SplitFailed("dealer produced an empty share".to_string()))?;
    let index = ShareIndex::new(x)
        .ok_or_else(|| Error::SplitFailed("dealer produced share index 0".to_string()))?;

    Ok(RawShare::from_parts(body, index))
}
