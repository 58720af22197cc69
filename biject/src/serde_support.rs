//! Serde support for bidirectional maps
//!
//! A map serializes as a sequence of `[left, right]` pairs. Deserialization
//! goes through strict construction, so a payload that is not a bijection
//! is rejected instead of being silently collapsed.

use crate::BidirectionalMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;
use std::hash::Hash;

impl<L, R> Serialize for BidirectionalMap<L, R>
where
    L: Serialize,
    R: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, L, R> Deserialize<'de> for BidirectionalMap<L, R>
where
    L: Deserialize<'de> + Eq + Hash + Clone + Debug,
    R: Deserialize<'de> + Eq + Hash + Clone + Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<(L, R)>::deserialize(deserializer)?;
        BidirectionalMap::try_new(pairs).map_err(|err| D::Error::custom(err.report()))
    }
}

#[cfg(test)]
mod tests {
    use crate::BidirectionalMap;

    #[test]
    fn test_serialize_as_pairs() {
        let map = BidirectionalMap::try_new(vec![(1u32, String::from("one"))]).unwrap();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"[[1,"one"]]"#);
    }

    #[test]
    fn test_round_trip_through_json() {
        let map = BidirectionalMap::try_new(vec![
            (1u32, String::from("one")),
            (2, String::from("two")),
            (3, String::from("three")),
        ])
        .unwrap();

        let json = serde_json::to_string(&map).unwrap();
        let decoded: BidirectionalMap<u32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, map);
        assert_eq!(decoded.invert("two"), Some(&2));
    }

    #[test]
    fn test_deserialize_rejects_invalid_pairs() {
        let err =
            serde_json::from_str::<BidirectionalMap<u32, String>>(r#"[[1,"c"],[2,"a"],[1,"b"]]"#)
                .unwrap_err();
        assert!(err.to_string().contains("not a function"), "{err}");

        let err =
            serde_json::from_str::<BidirectionalMap<String, u32>>(r#"[["a",1],["b",2],["c",1]]"#)
                .unwrap_err();
        assert!(err.to_string().contains("not injective"), "{err}");
    }

    #[test]
    fn test_violation_report_serializes() {
        let err = BidirectionalMap::try_onto(vec![('a', 1u8), ('b', 2)], [1, 2, 3]).unwrap_err();
        let json = serde_json::to_value(err.report()).unwrap();
        assert_eq!(json, serde_json::json!([{ "NotSurjective": { "missing": [3] } }]));
    }
}
