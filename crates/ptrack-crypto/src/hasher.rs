use std::io::{self, Read};

use crate::fingerprint::ReceiptFingerprint;

/// Maps receipt image bytes to a fingerprint used for deduplication.
///
/// Contract: identical bytes yield identical fingerprints. Nothing more is
/// promised; implementations are free to be cryptographic or perceptual.
pub trait ReceiptHasher: Send + Sync {
    fn fingerprint(&self, image: &[u8]) -> ReceiptFingerprint;

    /// Fingerprint an image streamed from `reader`. The default buffers the
    /// whole image; streaming implementations should override it.
    fn fingerprint_reader<R: Read>(&self, mut reader: R) -> io::Result<ReceiptFingerprint>
    where
        Self: Sized,
    {
        let mut image = Vec::new();
        reader.read_to_end(&mut image)?;
        Ok(self.fingerprint(&image))
    }
}

/// Exact-content receipt hasher: BLAKE3 over a fixed domain tag and the image
/// bytes.
///
/// Re-encoded or resized copies of the same receipt get unrelated
/// fingerprints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blake3ReceiptHasher;

impl Blake3ReceiptHasher {
    /// Prepended to every image so receipt fingerprints never coincide with
    /// plain BLAKE3 digests of the same bytes.
    pub const DOMAIN: &'static [u8] = b"ptrack-receipt-v1:";

    fn start() -> blake3::Hasher {
        let mut hasher = blake3::Hasher::new();
        hasher.update(Self::DOMAIN);
        hasher
    }
}

impl ReceiptHasher for Blake3ReceiptHasher {
    fn fingerprint(&self, image: &[u8]) -> ReceiptFingerprint {
        let mut hasher = Self::start();
        hasher.update(image);
        ReceiptFingerprint::from_hash(*hasher.finalize().as_bytes())
    }

    fn fingerprint_reader<R: Read>(&self, mut reader: R) -> io::Result<ReceiptFingerprint> {
        let mut hasher = Self::start();
        io::copy(&mut reader, &mut hasher)?;
        Ok(ReceiptFingerprint::from_hash(*hasher.finalize().as_bytes()))
    }
}
