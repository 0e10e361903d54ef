//! Data model for the published BLAKE3 test vector file.

use anyhow::{Context, Result};
use serde::Deserialize;

/// One published test vector.
///
/// Digests are carried as the hex strings found in the source; they are
/// neither validated nor normalized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    /// Length in bytes of the painted input the digests were computed over.
    pub input_len: u64,
    /// Digest from the default hash mode.
    pub hash: String,
    /// Digest from the keyed hash mode.
    pub keyed_hash: String,
    /// Digest from the key derivation mode.
    pub derive_key: String,
}

/// The root structure of `test_vectors.json`.
///
/// Other top-level keys (`_comment`, `key`, `context_string`) are ignored.
#[derive(Debug, Deserialize)]
pub struct TestVectors {
    /// Cases in source order, which is also output order.
    pub cases: Vec<TestCase>,
}

pub fn parse_vectors(bytes: &[u8]) -> Result<TestVectors> {
    serde_json::from_slice(bytes).context("Failed to parse test vectors JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_preserves_case_order() {
        let doc = json!({
            "cases": [
                {"input_len": 1025, "hash": "a", "keyed_hash": "b", "derive_key": "c"},
                {"input_len": 0, "hash": "d", "keyed_hash": "e", "derive_key": "f"},
                {"input_len": 64, "hash": "g", "keyed_hash": "h", "derive_key": "i"}
            ]
        });
        let vectors = parse_vectors(&serde_json::to_vec(&doc).unwrap()).unwrap();

        let lens: Vec<u64> = vectors.cases.iter().map(|c| c.input_len).collect();
        assert_eq!(lens, vec![1025, 0, 64]);
        assert_eq!(vectors.cases[1].keyed_hash, "e");
    }

    #[test]
    fn test_parse_keeps_digests_verbatim() {
        let body = br#"{"cases": [{"input_len": 0, "hash": "AF13 ", "keyed_hash": "cc44", "derive_key": "1122"}]}"#;
        let vectors = parse_vectors(body).unwrap();
        assert_eq!(
            vectors.cases[0],
            TestCase {
                input_len: 0,
                hash: "AF13 ".to_string(),
                keyed_hash: "cc44".to_string(),
                derive_key: "1122".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_ignores_extra_top_level_keys() {
        let body = br#"{"_comment": "x", "key": "k", "context_string": "c", "cases": []}"#;
        assert!(parse_vectors(body).unwrap().cases.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_cases() {
        let err = parse_vectors(br#"{"key": "k"}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("cases"));
    }

    #[test]
    fn test_parse_rejects_missing_case_field() {
        let body = br#"{"cases": [{"input_len": 0, "hash": "a", "derive_key": "c"}]}"#;
        let err = parse_vectors(body).unwrap_err();
        assert!(format!("{:#}", err).contains("keyed_hash"));
    }

    #[test]
    fn test_parse_rejects_negative_input_len() {
        let body = br#"{"cases": [{"input_len": -1, "hash": "a", "keyed_hash": "b", "derive_key": "c"}]}"#;
        assert!(parse_vectors(body).is_err());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_vectors(b"not json").is_err());
        assert!(parse_vectors(b"\"not json\"").is_err());
        assert!(parse_vectors(&[0xff, 0xfe]).is_err());
    }
}
