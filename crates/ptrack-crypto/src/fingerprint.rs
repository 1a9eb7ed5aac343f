use std::fmt;
use std::str::FromStr;

use ptrack_types::TypeError;
use serde::{Deserialize, Serialize};

/// Content fingerprint of one receipt image.
///
/// Always rendered, serialized, and parsed as 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReceiptFingerprint([u8; 32]);

impl ReceiptFingerprint {
    pub const HEX_LEN: usize = 64;

    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a rendered fingerprint. Length is checked before content so a
    /// truncated fingerprint reports its length rather than a hex error.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        if s.len() != Self::HEX_LEN {
            return Err(TypeError::InvalidLength {
                expected: Self::HEX_LEN,
                actual: s.len(),
            });
        }
        let mut hash = [0u8; 32];
        hex::decode_to_slice(s, &mut hash).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Ok(Self(hash))
    }
}

impl fmt::Debug for ReceiptFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptFingerprint({}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ReceiptFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ReceiptFingerprint {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for ReceiptFingerprint {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<ReceiptFingerprint> for String {
    fn from(fp: ReceiptFingerprint) -> Self {
        fp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parses_back() {
        let fp = ReceiptFingerprint::from_hash([0xab; 32]);
        assert_eq!(fp.to_string().parse::<ReceiptFingerprint>(), Ok(fp));
    }

    #[test]
    fn display_is_fixed_length_lowercase() {
        let rendered = ReceiptFingerprint::from_hash([0xCD; 32]).to_string();
        assert_eq!(rendered.len(), ReceiptFingerprint::HEX_LEN);
        assert_eq!(rendered, rendered.to_lowercase());
    }

    #[test]
    fn uppercase_input_is_accepted() {
        let upper = "AB".repeat(32);
        assert_eq!(
            ReceiptFingerprint::from_hex(&upper),
            Ok(ReceiptFingerprint::from_hash([0xab; 32]))
        );
    }

    #[test]
    fn truncated_fingerprint_reports_length() {
        assert_eq!(
            ReceiptFingerprint::from_hex("abcd"),
            Err(TypeError::InvalidLength {
                expected: ReceiptFingerprint::HEX_LEN,
                actual: 4,
            })
        );
    }

    #[test]
    fn non_hex_of_right_length_rejected() {
        let bad = "zz".repeat(32);
        assert!(matches!(
            ReceiptFingerprint::from_hex(&bad),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn serializes_as_hex_string() {
        let fp = ReceiptFingerprint::from_hash([7; 32]);
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json, format!("\"{}\"", "07".repeat(32)));
        assert_eq!(serde_json::from_str::<ReceiptFingerprint>(&json).unwrap(), fp);
    }

    #[test]
    fn deserialize_rejects_short_string() {
        assert!(serde_json::from_str::<ReceiptFingerprint>("\"0707\"").is_err());
    }

    #[test]
    fn debug_shows_prefix_only() {
        let fp = ReceiptFingerprint::from_hash([1; 32]);
        assert_eq!(format!("{fp:?}"), "ReceiptFingerprint(01010101..)");
    }
}
