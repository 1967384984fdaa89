//! Property-based tests for seedshare
//!
//! This test suite uses quickcheck to verify correctness across random inputs,
//! including random mnemonics, thresholds, and share selections.
//!
//! Run with: cargo test --test proptests

#[path = "proptests/split_combine.rs"]
mod split_combine;

#[path = "proptests/tagged_share.rs"]
mod tagged_share;
