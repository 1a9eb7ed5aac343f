use std::collections::HashSet;
use std::io::{self, Read};

use tracing::debug;

use crate::fingerprint::ReceiptFingerprint;
use crate::hasher::{Blake3ReceiptHasher, ReceiptHasher};

/// Outcome of offering a receipt image to a [`ReceiptDeduper`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReceiptCheck {
    /// First time this fingerprint was seen; it is now recorded.
    New(ReceiptFingerprint),
    /// Already recorded; the receipt was submitted before.
    Duplicate(ReceiptFingerprint),
}

impl ReceiptCheck {
    pub fn fingerprint(&self) -> ReceiptFingerprint {
        match *self {
            ReceiptCheck::New(fp) | ReceiptCheck::Duplicate(fp) => fp,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, ReceiptCheck::Duplicate(_))
    }
}

/// Remembers the fingerprints of receipts already submitted.
///
/// How "the same receipt" is decided belongs entirely to `H`.
#[derive(Debug, Default)]
pub struct ReceiptDeduper<H = Blake3ReceiptHasher> {
    hasher: H,
    seen: HashSet<ReceiptFingerprint>,
}

impl<H: ReceiptHasher> ReceiptDeduper<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            hasher,
            seen: HashSet::new(),
        }
    }

    /// Seed with fingerprints recorded earlier, e.g. from a previous session.
    pub fn with_known(hasher: H, known: impl IntoIterator<Item = ReceiptFingerprint>) -> Self {
        Self {
            hasher,
            seen: known.into_iter().collect(),
        }
    }

    pub fn check(&mut self, image: &[u8]) -> ReceiptCheck {
        let fp = self.hasher.fingerprint(image);
        self.record(fp)
    }

    pub fn check_reader<R: Read>(&mut self, reader: R) -> io::Result<ReceiptCheck> {
        let fp = self.hasher.fingerprint_reader(reader)?;
        Ok(self.record(fp))
    }

    pub fn contains(&self, fp: &ReceiptFingerprint) -> bool {
        self.seen.contains(fp)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Recorded fingerprints, in no particular order.
    pub fn fingerprints(&self) -> impl Iterator<Item = &ReceiptFingerprint> {
        self.seen.iter()
    }

    fn record(&mut self, fp: ReceiptFingerprint) -> ReceiptCheck {
        if self.seen.insert(fp) {
            debug!(fingerprint = %fp, "receipt recorded");
            ReceiptCheck::New(fp)
        } else {
            debug!(fingerprint = %fp, "duplicate receipt");
            ReceiptCheck::Duplicate(fp)
        }
    }
}

impl ReceiptDeduper<Blake3ReceiptHasher> {
    pub fn new() -> Self {
        Self::with_hasher(Blake3ReceiptHasher)
    }
}
