// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use oxrdf::{NamedNode, NamedNodeRef};

use crate::{CoderError, EncodedValue};

/// A bidirectional map between IRIs and their encoded form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    by_iri: HashMap<String, EncodedValue>,
    by_value: HashMap<EncodedValue, NamedNode>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_iri.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_iri.is_empty()
    }

    /// Adds or replaces the mapping of `iri`.
    ///
    /// # Errors
    ///
    /// If `value` is already mapped to a different IRI.
    pub fn insert(&mut self, iri: NamedNode, value: EncodedValue) -> Result<(), CoderError> {
        if let Some(existing) = self.by_value.get(&value) {
            if existing != &iri {
                return Err(CoderError::DuplicateHash {
                    value,
                    existing: existing.as_str().to_owned(),
                    iri: iri.into_string(),
                });
            }
        }
        if let Some(old_value) = self.by_iri.insert(iri.as_str().to_owned(), value.clone()) {
            self.by_value.remove(&old_value);
        }
        self.by_value.insert(value, iri);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, iri: NamedNodeRef<'_>) -> Option<&EncodedValue> {
        self.by_iri.get(iri.as_str())
    }

    #[must_use]
    pub fn contains(&self, iri: NamedNodeRef<'_>) -> bool {
        self.by_iri.contains_key(iri.as_str())
    }

    /// The inverse lookup.
    #[must_use]
    pub fn iri(&self, value: &EncodedValue) -> Option<&NamedNode> {
        self.by_value.get(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NamedNode, &EncodedValue)> {
        self.by_value.iter().map(|(value, iri)| (iri, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoderId, ValueType};

    fn value(counter: u8) -> EncodedValue {
        EncodedValue::new(CoderId::KNOWN_VOCABULARY, ValueType::Iri, &[0, 0, counter])
    }

    fn iri(iri: &str) -> NamedNode {
        NamedNode::new_unchecked(iri)
    }

    #[test]
    fn lookups_in_both_directions() {
        let mut dict = Dictionary::new();
        dict.insert(iri("http://example.com/a"), value(1)).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get(iri("http://example.com/a").as_ref()), Some(&value(1)));
        assert_eq!(dict.iri(&value(1)), Some(&iri("http://example.com/a")));
        assert!(dict.iri(&value(2)).is_none());
    }

    #[test]
    fn remapping_drops_the_old_value() {
        let mut dict = Dictionary::new();
        dict.insert(iri("http://example.com/a"), value(1)).unwrap();
        dict.insert(iri("http://example.com/a"), value(2)).unwrap();
        assert_eq!(dict.len(), 1);
        assert!(dict.iri(&value(1)).is_none());
        assert_eq!(dict.iter().count(), 1);
    }

    #[test]
    fn value_can_not_name_two_iris() {
        let mut dict = Dictionary::new();
        dict.insert(iri("http://example.com/a"), value(1)).unwrap();
        let err = dict
            .insert(iri("http://example.com/b"), value(1))
            .unwrap_err();
        assert!(matches!(err, CoderError::DuplicateHash { .. }));
        assert!(!dict.contains(iri("http://example.com/b").as_ref()));
    }
}
