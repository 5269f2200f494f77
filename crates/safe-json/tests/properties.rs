use proptest::prelude::*;
use safe_json::{transcode, SafeValue};
use serde_json::{Map, Number, Value as JsonValue};

fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i64>().prop_map(|n| JsonValue::Number(Number::from(n))),
        (-1.0e6f64..1.0e6).prop_map(|f| Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)),
        "[a-z]{0,8}".prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..6)
                .prop_map(|entries| JsonValue::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

proptest! {
    #[test]
    fn transcode_preserves_structure(value in arb_json()) {
        let safe = transcode(value.clone());
        prop_assert!(safe == value);
        prop_assert_eq!(safe.to_value(), value);
    }

    #[test]
    fn missing_keys_yield_sentinel(value in arb_json(), suffix in "[A-Z]{1,6}") {
        let safe = transcode(value);
        // Generated keys are lowercase, so an uppercase key is never present.
        let missing = format!("_{suffix}");
        if safe.is_object() || safe.is_null() {
            prop_assert!(safe[missing.as_str()].is_safe_none());
            prop_assert!(safe[missing.as_str()][0]["x"].is_safe_none());
        }
        if let Some(seq) = safe.as_array() {
            let past_end = seq.len() as i64;
            prop_assert!(seq.get(past_end).is_safe_none());
            prop_assert!(seq.get(-past_end - 1).is_safe_none());
            prop_assert!(seq[past_end][missing.as_str()].is_safe_none());
        }
    }

    #[test]
    fn sentinel_compares_below_non_zero_numbers(n in any::<i64>()) {
        let sentinel = SafeValue::SafeNone(safe_json::SafeNone);
        prop_assert_eq!(sentinel == n, n == 0);
        prop_assert!(sentinel <= n);
        prop_assert_eq!(sentinel >= n, n == 0);
        prop_assert!(!(sentinel > n));
    }
}
