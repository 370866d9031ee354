//! Import set management for generated files
//!
//! An [`ImportSet`] holds the fully-qualified names one generated file must
//! reference. Entries are unique and always iterate in lexicographic order, so
//! emitted import blocks are stable across runs.

use crate::names::derive_namespace;
use crate::types::BoxedScalar;
use std::collections::{BTreeMap, BTreeSet};

/// Sorted, deduplicated set of fully-qualified import names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    names: BTreeSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name. Unqualified names (no `.`) are never imported.
    ///
    /// Returns `true` if the name was not already present.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if !name.contains('.') {
            return false;
        }
        self.names.insert(name)
    }

    /// Insert every name from an iterator.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add(name);
        }
    }

    /// Remove a name. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Swap every boxed scalar present under its canonical name for the
    /// mapping's target name. Scalars without a target are left alone.
    pub fn translate_family(&mut self, mapping: &FamilyMapping) {
        for scalar in BoxedScalar::ALL {
            if let Some(target) = mapping.target(scalar)
                && self.names.remove(scalar.java_name())
            {
                self.names.insert(target.to_string());
            }
        }
    }

    /// Remove every entry starting with `prefix`. Returns how many were removed.
    pub fn filter_by_prefix(&mut self, prefix: &str) -> usize {
        let before = self.names.len();
        self.names.retain(|name| !name.starts_with(prefix));
        before - self.names.len()
    }

    /// Entries in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Entries to emit into a file generated in `namespace`: sorted, with
    /// names living in that same namespace left out.
    pub fn for_namespace<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a str> {
        self.iter()
            .filter(move |name| derive_namespace(name) != namespace)
    }
}

/// Target-language names for the boxed scalar family, keyed by [`BoxedScalar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyMapping {
    targets: BTreeMap<BoxedScalar, String>,
}

impl FamilyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `scalar` to a fully-qualified target-language name.
    pub fn insert(&mut self, scalar: BoxedScalar, target: impl Into<String>) {
        self.targets.insert(scalar, target.into());
    }

    /// Target name for `scalar`, if mapped.
    pub fn target(&self, scalar: BoxedScalar) -> Option<&str> {
        self.targets.get(&scalar).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FromIterator<(BoxedScalar, &'static str)> for FamilyMapping {
    fn from_iter<T: IntoIterator<Item = (BoxedScalar, &'static str)>>(iter: T) -> Self {
        let mut mapping = FamilyMapping::new();
        for (scalar, target) in iter {
            mapping.insert(scalar, target);
        }
        mapping
    }
}
