//! Property-based tests for codec round-trips.

use proptest::prelude::*;

use super::{decode, encode, Decoder, BYTES_PER_CODE_UNIT};
use crate::error::Error;

/// Strategy for strings the format can hold: any text without NUL.
fn arb_record() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 .,!?]{0,24}",
        any::<String>().prop_map(|s| s.replace('\0', "")),
    ]
}

proptest! {
    #[test]
    fn strings_roundtrip(strings in prop::collection::vec(arb_record(), 0..32)) {
        let encoded = encode(&strings).expect("encoding should succeed");
        let decoded = decode(&encoded).expect("decoding should succeed");
        prop_assert_eq!(decoded, strings);
    }

    #[test]
    fn encoded_length_is_units_plus_delimiters(strings in prop::collection::vec(arb_record(), 0..32)) {
        let encoded = encode(&strings).expect("encoding should succeed");
        let units: usize = strings.iter().map(|s| s.encode_utf16().count()).sum();
        prop_assert_eq!(encoded.len(), (units + strings.len()) * BYTES_PER_CODE_UNIT);
    }

    #[test]
    fn missing_final_delimiter_is_tolerated(strings in prop::collection::vec(arb_record(), 1..16)) {
        // An empty last string has nothing left once its delimiter is dropped
        prop_assume!(!strings.last().map(String::is_empty).unwrap_or(true));

        let mut encoded = encode(&strings).expect("encoding should succeed");
        encoded.truncate(encoded.len() - BYTES_PER_CODE_UNIT);
        let decoded = decode(&encoded).expect("decoding should succeed");
        prop_assert_eq!(decoded, strings);
    }

    #[test]
    fn odd_buffers_are_rejected(mut bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if bytes.len() % 2 == 0 {
            bytes.push(0);
        }
        let is_malformed = matches!(decode(&bytes), Err(Error::MalformedInput { .. }));
        prop_assert!(is_malformed);
    }

    #[test]
    fn even_buffers_always_decode(bytes in prop::collection::vec(any::<u8>(), 0..32)
        .prop_map(|mut b| { b.truncate(b.len() & !1); b }))
    {
        let segments = Decoder::new(&bytes).expect("even length").count();
        let strings = decode(&bytes).expect("even buffers decode");
        prop_assert_eq!(strings.len(), segments);
    }
}
