//! Property-based tests for import sets and type descriptors
//!
//! Tests that import sets stay sorted and duplicate-free under any sequence of
//! inserts, and that type descriptors survive a render-then-parse cycle.

use proptest::prelude::*;
use qbean_core::{BoxedScalar, FamilyMapping, ImportSet, TypeRef};

// Strategy: dotted, fully-qualified names
fn arb_qualified_name() -> impl Strategy<Value = String> {
    ("[a-z]{1,8}(\\.[a-z]{1,8}){0,2}", "[A-Z][A-Za-z0-9]{0,10}")
        .prop_map(|(namespace, short)| format!("{namespace}.{short}"))
}

// Strategy: any short name, qualified or not
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_qualified_name(),
        "[A-Z][A-Za-z0-9]{0,10}".prop_map(String::from),
    ]
}

// Strategy: type references up to two levels of generics
fn arb_type_ref() -> impl Strategy<Value = TypeRef> {
    let leaf = arb_qualified_name().prop_map(TypeRef::named);
    leaf.prop_recursive(2, 8, 3, |inner| {
        (arb_qualified_name(), prop::collection::vec(inner, 1..3))
            .prop_map(|(name, args)| TypeRef::generic(name, args))
    })
}

proptest! {
    /// Property: iteration is sorted and unique regardless of insert order
    #[test]
    fn proptest_import_set_sorted_and_unique(names in prop::collection::vec(arb_name(), 0..40)) {
        let mut imports = ImportSet::new();
        for name in &names {
            imports.add(name.clone());
        }
        // Adding everything again must not change anything
        let before = imports.clone();
        imports.extend(names.iter().cloned());
        prop_assert_eq!(&imports, &before);

        let emitted: Vec<&str> = imports.iter().collect();
        let mut expected: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|n| n.contains('.'))
            .collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(emitted, expected);
    }

    /// Property: no emitted import lives in the artifact's own namespace
    #[test]
    fn proptest_for_namespace_excludes_same_namespace(
        names in prop::collection::vec(arb_qualified_name(), 0..30),
        namespace in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}"
    ) {
        let mut imports = ImportSet::new();
        imports.extend(names);
        imports.add(format!("{namespace}.Local"));

        for name in imports.for_namespace(&namespace) {
            let own = name.rsplit_once('.').map(|(ns, _)| ns).unwrap_or("");
            prop_assert_ne!(own, namespace.as_str());
        }
    }

    /// Property: prefix filtering removes every match and nothing else
    #[test]
    fn proptest_filter_by_prefix_removes_only_matches(
        names in prop::collection::vec(arb_qualified_name(), 0..30),
        prefix in "[a-z]{1,3}"
    ) {
        let mut imports = ImportSet::new();
        imports.extend(names);
        let total = imports.len();

        let removed = imports.filter_by_prefix(&prefix);

        prop_assert_eq!(imports.len() + removed, total);
        prop_assert!(imports.iter().all(|name| !name.starts_with(prefix.as_str())));
    }

    /// Property: translating a family leaves no canonical name behind
    #[test]
    fn proptest_translate_family_replaces_canonical_names(
        picks in prop::collection::vec(0usize..BoxedScalar::ALL.len(), 0..9)
    ) {
        let mapping: FamilyMapping = BoxedScalar::ALL
            .iter()
            .map(|scalar| (*scalar, "kotlin.Mapped"))
            .collect();
        let mut imports = ImportSet::new();
        for index in &picks {
            imports.add(BoxedScalar::ALL[*index].java_name());
        }

        imports.translate_family(&mapping);

        for scalar in BoxedScalar::ALL {
            prop_assert!(!imports.contains(scalar.java_name()));
        }
        prop_assert_eq!(imports.contains("kotlin.Mapped"), !picks.is_empty());
    }

    /// Property: rendered type references parse back to the same value
    #[test]
    fn proptest_type_ref_display_parses_back(ty in arb_type_ref()) {
        let rendered = ty.to_string();

        let parsed = TypeRef::parse(&rendered).unwrap();

        prop_assert_eq!(parsed, ty);
    }
}
