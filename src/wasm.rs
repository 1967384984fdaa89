//! WASM bindings for seedshare
//!
//! This module provides JavaScript-friendly bindings for the core split/combine functionality.
//! Each binding wraps a plain Rust function so the logic also runs (and is tested) natively.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use zeroize::Zeroizing;

use crate::codec;
use crate::commands;
use crate::domain::ThresholdParams;
use crate::error::MnemonicOrigin;
use crate::share::TaggedShare;

/// Initialize panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a split operation (for JSON serialization)
#[derive(Serialize, Deserialize)]
pub struct SplitResult {
    /// The generated shares as "mnemonic,index" strings
    pub shares: Vec<String>,
    /// Number of shares generated
    pub share_count: u8,
    /// Threshold required to reconstruct
    pub threshold: u8,
}

/// Metadata visible in a tagged share without combining it
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMetadata {
    pub share_index: u8,
    pub word_count: usize,
}

/// Splits `mnemonic` into `shares` tagged shares with the given threshold
///
/// # Errors
/// Returns an error if the parameters or mnemonic are invalid
pub fn split(mnemonic: &str, shares: u8, threshold: u8) -> Result<SplitResult> {
    let params = ThresholdParams::from_counts(threshold.into(), shares.into())?;
    let tagged = commands::split_mnemonic(mnemonic, params)?;

    Ok(SplitResult {
        shares: tagged.iter().map(ToString::to_string).collect(),
        share_count: *params.share_count(),
        threshold: *params.threshold(),
    })
}

/// Parses a tagged share and validates its mnemonic
///
/// # Errors
/// Returns an error if the share is malformed or its mnemonic is invalid
pub fn parse_share(share: &str) -> Result<ShareMetadata> {
    let tagged: TaggedShare = share.parse()?;
    let body = codec::decode(tagged.mnemonic(), MnemonicOrigin::Share(1))?;

    Ok(ShareMetadata {
        share_index: *tagged.index(),
        word_count: codec::word_count_for(body.len()).unwrap_or_default(),
    })
}

/// Generates a random English mnemonic of 12, 15, 18, 21 or 24 words
///
/// # Errors
/// Returns an error for any other word count or if no randomness is available
pub fn generate_mnemonic(word_count: u8) -> Result<Zeroizing<String>> {
    let Some(entropy_len) = codec::SUPPORTED_ENTROPY_LENGTHS
        .into_iter()
        .find(|&len| codec::word_count_for(len) == Some(usize::from(word_count)))
    else {
        bail!("Invalid word count {word_count}: must be 12, 15, 18, 21 or 24");
    };

    // The getrandom crate (with "js" feature) will use browser's crypto.getRandomValues()
    let mut entropy = Zeroizing::new(vec![0u8; entropy_len]);
    getrandom::getrandom(&mut entropy).context("Failed to generate random entropy")?;

    Ok(codec::encode(&entropy)?)
}

/// Split a BIP39 mnemonic into tagged shares
///
/// # Returns
/// JSON string containing the shares and metadata, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_split(
///     "army van defense carry jealous true garbage claim echo media make crunch",
///     5,
///     3
/// );
/// const data = JSON.parse(result);
/// console.log(`Created ${data.share_count} shares with threshold ${data.threshold}`);
/// ```
#[wasm_bindgen]
pub fn wasm_split(mnemonic: &str, shares: u8, threshold: u8) -> Result<String, JsValue> {
    let result = split(mnemonic, shares, threshold)
        .map_err(|e| JsValue::from_str(&format!("Split failed: {e:#}")))?;

    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Combine tagged shares to reconstruct the original mnemonic
///
/// # Example (JavaScript)
/// ```javascript
/// const mnemonic = wasm_combine(["word1 word2 ...,1", "word1 word2 ...,3"]);
/// ```
#[wasm_bindgen]
pub fn wasm_combine(shares: Vec<String>) -> Result<String, JsValue> {
    commands::combine_shares(&shares)
        .map(|mnemonic| mnemonic.as_str().to_string())
        .map_err(|e| JsValue::from_str(&format!("Combine failed: {e}")))
}

/// Parse a tagged share to extract its index and word count
///
/// # Returns
/// JSON string `{"share_index": .., "word_count": ..}`, or an error message
#[wasm_bindgen]
pub fn wasm_parse_share(share: &str) -> Result<String, JsValue> {
    let metadata =
        parse_share(share).map_err(|e| JsValue::from_str(&format!("Parse failed: {e:#}")))?;

    serde_json::to_string(&metadata)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Generate a random BIP39 mnemonic
#[wasm_bindgen]
pub fn wasm_generate_mnemonic(word_count: u8) -> Result<String, JsValue> {
    generate_mnemonic(word_count)
        .map(|mnemonic| mnemonic.as_str().to_string())
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}
