//! Receipt fingerprinting for Point Tracker.
//!
//! Receipt images are deduplicated by content fingerprint. The current
//! implementation is a domain-separated BLAKE3 digest: identical bytes always
//! produce the same fingerprint, but near-duplicate images do not produce
//! similar ones. Callers depend on the [`ReceiptHasher`] trait so a
//! perceptual hash can replace it without touching ledger logic.

pub mod dedup;
pub mod fingerprint;
pub mod hasher;

pub use dedup::{ReceiptCheck, ReceiptDeduper};
pub use fingerprint::ReceiptFingerprint;
pub use hasher::{Blake3ReceiptHasher, ReceiptHasher};
