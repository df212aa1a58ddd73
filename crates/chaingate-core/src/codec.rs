//! Hex decoding and the transaction content hash.

use sha2::{Digest, Sha256};

use crate::errors::{GatewayError, GatewayResult};

/// Decode a hex string into raw bytes.
///
/// Case-insensitive; a leading `0x`/`0X` is tolerated. Failures map to the
/// invalid-transaction kind with the decoder's text as detail, so callers
/// surface them as translated errors rather than programming errors.
pub fn decode_hex(input: &str) -> GatewayResult<Vec<u8>> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    hex::decode(stripped).map_err(|e| GatewayError::InvalidTransaction(e.to_string()))
}

/// SHA-256 content hash over raw transaction bytes, rendered as upper-case
/// hex with no separators or prefix. Bit-exact output contract.
pub fn transaction_hash(raw_tx: &[u8]) -> String {
    let digest = Sha256::digest(raw_tx);
    hex::encode_upper(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_hex_accepts_mixed_case_and_prefix() {
        assert_eq!(decode_hex("0a0B").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex("0x0A0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decode_hex_rejects_bad_input() {
        let err = decode_hex("0a0").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidTransaction(_)));
        let err = decode_hex("zz").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidTransaction(_)));
    }

    #[test]
    fn transaction_hash_is_uppercase_sha256() {
        assert_eq!(
            transaction_hash(&[0x0a, 0x0b]),
            "BEA0B72E71BFE7F15A88C25305BF96A9681E34D3AABE0C9A1B7093CB32D8FF05"
        );
        assert_eq!(
            transaction_hash(&[]),
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn transaction_hash_is_deterministic() {
        let bytes = [0xde, 0xad, 0xbe, 0xef];
        assert_eq!(transaction_hash(&bytes), transaction_hash(&bytes));
        assert_eq!(
            transaction_hash(&bytes),
            "5F78C33274E43FA9DE5659265C1D917E25C03722DCB0B8D27DB8D5FEAA813953"
        );
    }
}
