//! Property tests for the "mnemonic,index" share format

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use seedshare::codec;
use seedshare::domain::ShareIndex;
use seedshare::share::{ShareFormatError, TaggedShare};
use zeroize::Zeroizing;

/// Entropy of a length the mnemonic codec accepts
#[derive(Clone, Debug)]
struct Entropy(Vec<u8>);

impl Arbitrary for Entropy {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = *g
            .choose(&codec::SUPPORTED_ENTROPY_LENGTHS)
            .unwrap_or(&16);
        Entropy((0..len).map(|_| u8::arbitrary(g)).collect())
    }
}

/// Formatting then parsing preserves both the mnemonic and the index
#[quickcheck]
fn prop_tagged_share_round_trip(entropy: Entropy, index: u8) -> bool {
    let Some(index) = ShareIndex::new(index) else {
        return true;
    };
    let Ok(mnemonic) = codec::encode(&entropy.0) else {
        return false;
    };

    let share = TaggedShare::new(Zeroizing::new(mnemonic.to_string()), index);
    let Ok(parsed) = share.to_string().parse::<TaggedShare>() else {
        return false;
    };

    parsed == share && parsed.mnemonic() == mnemonic.as_str()
}

/// Strings without a comma never parse
#[quickcheck]
fn prop_missing_delimiter_rejected(text: String) -> bool {
    let text = text.replace(',', " ");
    text.parse::<TaggedShare>() == Err(ShareFormatError::MissingDelimiter)
}

/// Any index outside 1..=255 is rejected before the mnemonic is looked at
#[quickcheck]
fn prop_out_of_range_index_rejected(index: u32) -> bool {
    let share = format!("not even words,{index}");
    match share.parse::<TaggedShare>() {
        Ok(parsed) => (1..=255).contains(&index) && u32::from(*parsed.index()) == index,
        Err(ShareFormatError::ZeroIndex) => index == 0,
        Err(ShareFormatError::InvalidIndex(_)) => index > 255,
        Err(_) => false,
    }
}
