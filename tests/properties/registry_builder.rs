//! Property tests for registry merge ordering.

use proptest::prelude::*;
use serde_json::{json, Value};

use wireup::{CandidateResource, Insertion, RegistryBuilder};

fn candidates() -> impl Strategy<Value = Vec<(String, u32)>> {
    proptest::collection::vec(("(en|fr|de)", 0u32..1000), 0..24)
}

fn per_key(items: &[(String, u32)], key: &str) -> Vec<Value> {
    items
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| json!(v))
        .collect()
}

fn build(
    existing: &Value,
    insertion: Insertion,
    items: &[(String, u32)],
) -> wireup::Registry {
    let mut builder = RegistryBuilder::from_value(existing, insertion).unwrap();
    let added = builder.extend(
        items
            .iter()
            .enumerate()
            .map(|(i, (k, v))| CandidateResource::new(k.as_str(), json!(v), i)),
    );
    assert_eq!(added, items.len());
    builder.build()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Newest-first lists hold discovered entries in reverse
    /// discovery order, ahead of pre-existing entries.
    #[test]
    fn property_newest_first_reverses_discovery(items in candidates()) {
        let existing = json!({"en": ["existing"]});
        let registry = build(&existing, Insertion::NewestFirst, &items);

        for key in ["fr", "de"] {
            let mut expected = per_key(&items, key);
            expected.reverse();
            prop_assert_eq!(registry.get(key).unwrap_or_default(), expected.as_slice());
        }

        let mut expected = per_key(&items, "en");
        expected.reverse();
        expected.push(json!("existing"));
        prop_assert_eq!(registry.get("en").unwrap(), expected.as_slice());
    }

    /// PROPERTY: Appended lists keep pre-existing entries first, then
    /// collected entries in collection order.
    #[test]
    fn property_append_preserves_order(items in candidates()) {
        let existing = json!({"de": ["existing"]});
        let registry = build(&existing, Insertion::Append, &items);

        let mut expected = vec![json!("existing")];
        expected.extend(per_key(&items, "de"));
        prop_assert_eq!(registry.get("de").unwrap(), expected.as_slice());
        let expected_en = per_key(&items, "en");
        prop_assert_eq!(
            registry.get("en").unwrap_or_default(),
            expected_en.as_slice()
        );
    }

    /// PROPERTY: Keys keep first-seen order, pre-existing keys first.
    #[test]
    fn property_keys_in_first_seen_order(items in candidates()) {
        let registry = build(&json!({"zz": []}), Insertion::Append, &items);

        let mut expected = vec!["zz".to_string()];
        for (k, _) in &items {
            if !expected.contains(k) {
                expected.push(k.clone());
            }
        }
        let keys: Vec<String> = registry.keys().map(str::to_string).collect();
        prop_assert_eq!(keys, expected);
    }
}
