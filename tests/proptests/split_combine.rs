//! Property tests for split/combine workflows

use bip39::Mnemonic;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use seedshare::Error;
use seedshare::codec;
use seedshare::commands::{combine_shares, split_mnemonic};
use seedshare::domain::ThresholdParams;

/// Wrapper for valid BIP39 mnemonics of every supported length
#[derive(Clone, Debug)]
struct ValidMnemonic(Mnemonic);

impl Arbitrary for ValidMnemonic {
    fn arbitrary(g: &mut Gen) -> Self {
        let entropy_size = *g
            .choose(&codec::SUPPORTED_ENTROPY_LENGTHS)
            .unwrap_or(&16);

        let mut entropy = vec![0u8; entropy_size];
        for byte in &mut entropy {
            *byte = u8::arbitrary(g);
        }

        // Create mnemonic from entropy (this handles checksum automatically)
        let mnemonic = Mnemonic::from_entropy(&entropy).expect("Valid entropy");
        ValidMnemonic(mnemonic)
    }
}

/// Wrapper for valid threshold and share count pairs (1 <= threshold < share count)
#[derive(Clone, Copy, Debug)]
struct ValidShamirParams {
    threshold: u8,
    num_shares: u8,
}

impl Arbitrary for ValidShamirParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Share count between 2 and 20 (keep it reasonable for testing)
        let num_shares = (u8::arbitrary(g) % 19) + 2; // 2..=20

        // Threshold between 1 and num_shares - 1
        let threshold = (u8::arbitrary(g) % (num_shares - 1)) + 1; // 1..num_shares

        ValidShamirParams {
            threshold,
            num_shares,
        }
    }
}

impl ValidShamirParams {
    fn params(self) -> ThresholdParams {
        ThresholdParams::from_counts(self.threshold.into(), self.num_shares.into())
            .expect("generator only yields valid params")
    }
}

/// Deterministically shuffle `0..len` using an LCG seeded by `seed`
fn shuffled_indices(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let mut seed = seed;
    for i in 0..indices.len() {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let range = (indices.len() - i) as u64;
        let offset = usize::try_from(seed % range)
            .unwrap_or_else(|_| unreachable!("offset < range fits in usize"));
        indices.swap(i, offset + i);
    }
    indices
}

fn split_strings(mnemonic: &Mnemonic, params: ThresholdParams) -> Option<Vec<String>> {
    let shares = split_mnemonic(&mnemonic.to_string(), params).ok()?;
    Some(shares.iter().map(ToString::to_string).collect())
}

/// Test that splitting and combining any threshold-sized selection recovers the original mnemonic
#[quickcheck]
fn prop_split_combine_round_trip(
    mnemonic: ValidMnemonic,
    params: ValidShamirParams,
    selection_seed: u64,
) -> bool {
    let ValidMnemonic(inner_mnemonic) = mnemonic;
    let Some(shares) = split_strings(&inner_mnemonic, params.params()) else {
        return false;
    };

    if shares.len() != params.num_shares as usize {
        return false;
    }

    // Combining needs at least two shares even when the threshold is 1
    let take = usize::from(params.threshold).max(2);
    let selected: Vec<String> = shuffled_indices(shares.len(), selection_seed)
        .into_iter()
        .take(take)
        .map(|idx| shares[idx].clone())
        .collect();

    let Ok(recovered) = combine_shares(&selected) else {
        return false;
    };

    recovered.as_str() == inner_mnemonic.to_string()
}

/// Test that every share body re-encodes to the secret's word count
#[quickcheck]
fn prop_share_bodies_match_secret_length(
    mnemonic: ValidMnemonic,
    params: ValidShamirParams,
) -> bool {
    let ValidMnemonic(inner_mnemonic) = mnemonic;
    let Some(shares) = split_strings(&inner_mnemonic, params.params()) else {
        return false;
    };

    let word_count = inner_mnemonic.word_count();
    shares.iter().all(|share| {
        share
            .split_once(',')
            .is_some_and(|(body, _)| body.split(' ').count() == word_count)
    })
}

/// Test that fewer than threshold shares never yield the original secret
#[quickcheck]
fn prop_insufficient_shares_fail(mnemonic: ValidMnemonic, params: ValidShamirParams) -> bool {
    let ValidMnemonic(inner_mnemonic) = mnemonic;

    // Below-threshold selections need at least two shares to reach the sharer
    if params.threshold < 3 {
        return true;
    }

    let Some(shares) = split_strings(&inner_mnemonic, params.params()) else {
        return false;
    };

    let insufficient = &shares[..usize::from(params.threshold) - 1];
    match combine_shares(insufficient) {
        Err(_) => true,
        Ok(recovered) => recovered.as_str() != inner_mnemonic.to_string(),
    }
}

/// Test that a repeated share index is always rejected
#[quickcheck]
fn prop_duplicate_index_rejected(
    mnemonic: ValidMnemonic,
    params: ValidShamirParams,
    pick: usize,
) -> bool {
    let ValidMnemonic(inner_mnemonic) = mnemonic;
    let Some(shares) = split_strings(&inner_mnemonic, params.params()) else {
        return false;
    };

    let mut selected: Vec<String> = shares
        .iter()
        .take(usize::from(params.threshold))
        .cloned()
        .collect();
    let repeated = selected[pick % selected.len()].clone();
    selected.push(repeated);

    matches!(
        combine_shares(&selected),
        Err(Error::ReconstructionFailed(_))
    )
}

/// Test that shares from different secrets don't combine to either secret
#[quickcheck]
fn prop_mixed_shares_fail(
    mnemonic1: ValidMnemonic,
    mnemonic2: ValidMnemonic,
    params: ValidShamirParams,
) -> bool {
    let ValidMnemonic(inner_mnemonic1) = mnemonic1;
    let ValidMnemonic(inner_mnemonic2) = mnemonic2;

    if inner_mnemonic1 == inner_mnemonic2 || params.threshold < 2 {
        return true;
    }

    let (Some(shares1), Some(shares2)) = (
        split_strings(&inner_mnemonic1, params.params()),
        split_strings(&inner_mnemonic2, params.params()),
    ) else {
        return false;
    };

    // Take the first half from secret 1 and the rest (other indices) from secret 2
    let threshold = usize::from(params.threshold);
    let half = threshold / 2;
    let mut mixed: Vec<String> = shares1.iter().take(half).cloned().collect();
    mixed.extend(shares2.iter().skip(half).take(threshold - half).cloned());

    match combine_shares(&mixed) {
        Err(_) => true,
        Ok(recovered) => {
            recovered.as_str() != inner_mnemonic1.to_string()
                && recovered.as_str() != inner_mnemonic2.to_string()
        }
    }
}

/// Test that out-of-policy parameters are always rejected
#[quickcheck]
fn prop_invalid_params_rejected(threshold: u32, share_count: u32) -> bool {
    let valid = threshold >= 1 && threshold < share_count && share_count <= 255;
    match ThresholdParams::from_counts(threshold, share_count) {
        Ok(_) => valid,
        Err(Error::InvalidThresholdParams(_)) => !valid,
        Err(_) => false,
    }
}
