use safe_json::{from_str, ReadMapping, ReadSequence, SafeJsonError, SafeNone, SafeValue, SAFE_NONE};
use serde_json::{json, Value};

#[test]
fn test_equality() {
    assert_eq!(SafeNone, 0);
    assert_eq!(SafeNone, 0.0);
    assert_eq!(SafeNone, Value::Null);
    assert_eq!(SafeNone, None::<i32>);
    assert_eq!(SafeNone, SafeNone);
    assert_eq!(SAFE_NONE, SAFE_NONE);
    assert_eq!(SAFE_NONE, SafeValue::Null);

    assert_ne!(SafeNone, 1);
    assert_ne!(SafeNone, "x");
    assert_ne!(SafeNone, false);
    assert_ne!(SAFE_NONE, json!("x"));
}

#[test]
fn test_identity_is_not_equality() {
    assert!(!SAFE_NONE.is_null());
    assert_eq!(SAFE_NONE, Value::Null);
    assert!(SAFE_NONE.is_safe_none());
    assert!(SAFE_NONE.as_safe_none().is_some());

    let doc = from_str(r#"{"a": null}"#).unwrap();
    assert!(doc["a"].is_null());
    assert!(!doc["a"].is_safe_none());
}

#[test]
fn test_ordering() {
    assert!(SafeNone < 5);
    assert!(SafeNone < 0);
    assert!(!(SafeNone > 5));
    assert!(!(SafeNone > 0));
    assert!(SafeNone <= 5);
    assert!(SafeNone <= 0);
    assert!(SafeNone <= "z");
    assert!(!(SafeNone >= 1));
    assert!(SafeNone >= 0);
    assert!(SAFE_NONE < 5);
    assert!(SAFE_NONE >= 0);
}

#[test]
fn test_empty_container_behaviour() {
    assert_eq!(SafeNone.len(), 0);
    assert!(SafeNone.is_empty());
    assert!(!SafeNone.is_truthy());
    assert!(!SAFE_NONE.is_truthy());
    assert_eq!(SafeNone.iter().count(), 0);
    assert_eq!(SafeNone.into_iter().count(), 0);
    assert!(!SafeNone.contains("anything"));
    assert_eq!(SAFE_NONE.len(), 0);
    assert_eq!(SAFE_NONE.elements().count(), 0);
    assert_eq!(SAFE_NONE.entries().count(), 0);
}

#[test]
fn test_mapping_views_are_empty() {
    assert_eq!(SafeNone.keys().count(), 0);
    assert_eq!(SafeNone.values().count(), 0);
    assert_eq!(SafeNone.items().count(), 0);
    assert!(SafeNone.key_list().is_empty());
    assert!(SafeNone.item_list().is_empty());
    assert_eq!(ReadMapping::len(&SafeNone), 0);
    assert_eq!(ReadSequence::len(&SafeNone), 0);
}

#[test]
fn test_mutations_rejected_and_state_unchanged() {
    assert!(matches!(
        SafeNone.append("a"),
        Err(SafeJsonError::MutationOnSentinel { operation: "append" })
    ));
    assert!(matches!(
        SafeNone.set_item("k", 1),
        Err(SafeJsonError::MutationOnSentinel { operation: "set_item" })
    ));
    assert!(matches!(
        SafeNone.try_add_assign(vec![1]),
        Err(SafeJsonError::MutationOnSentinel { operation: "add_assign" })
    ));

    assert_eq!(SafeNone.len(), 0);
    assert_eq!(SafeNone, 0);
    assert_eq!(SafeNone, Value::Null);
    assert!(SafeNone["a"].is_safe_none());
}

#[test]
fn test_lookup_not_found_operations() {
    let err = SafeNone.index("x").unwrap_err();
    assert_eq!(err.to_string(), "value not found: `index` on SafeNone");
    assert!(matches!(
        SafeNone.pop_last(),
        Err(SafeJsonError::LookupNotFound { .. })
    ));
    assert!(SafeNone.pop_item().is_safe_none());
}

#[test]
fn test_arithmetic() {
    assert_eq!(SafeNone + "tail", "tail");
    assert_eq!(SafeNone + vec![1, 2], vec![1, 2]);
    assert_eq!(SafeNone * 4usize, SafeNone);
    assert_eq!(2u64 * SafeNone, SafeNone);
}

#[test]
fn test_text_and_serialized_forms() {
    assert_eq!(SafeNone.to_string(), "SafeNone");
    assert_eq!(format!("{:?}", SAFE_NONE), "SafeNone");
    assert_eq!(serde_json::to_string(&SAFE_NONE).unwrap(), r#""SafeNone""#);

    let mut seq = safe_json::SafeSequence::new();
    seq.push(1);
    seq.push(SafeNone);
    assert_eq!(seq.to_string(), r#"[1,"SafeNone"]"#);
    assert_eq!(SafeValue::from(seq).to_string(), r#"[1,"SafeNone"]"#);
}

#[test]
fn test_sentinel_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || SAFE_NONE[i]["k"].is_safe_none()))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
