// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use oxrdf::NamedNode;
use rdfvocab_base::util;

use crate::{CoderError, Dictionary, EncodedValue};

/// Where the dictionary of the known-vocabulary coder lives between runs.
pub trait DictionaryStore {
    /// Loads the dictionary; a store that was never written to
    /// yields an empty one.
    ///
    /// # Errors
    ///
    /// If the stored data can not be read or is malformed.
    fn load(&self) -> Result<Dictionary, CoderError>;

    /// Replaces the stored dictionary.
    ///
    /// # Errors
    ///
    /// If writing fails.
    fn save(&mut self, dictionary: &Dictionary) -> Result<(), CoderError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    dictionary: Dictionary,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            saves: 0,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// How often [`DictionaryStore::save`] was called.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl DictionaryStore for MemoryStore {
    fn load(&self) -> Result<Dictionary, CoderError> {
        Ok(self.dictionary.clone())
    }

    fn save(&mut self, dictionary: &Dictionary) -> Result<(), CoderError> {
        self.dictionary = dictionary.clone();
        self.saves += 1;
        Ok(())
    }
}

/// Stores the dictionary as a JSON object,
/// mapping each IRI to the hex form of its encoded value:
///
/// ```json
/// {
///   "http://purl.org/ontology/mo/Activity": "01000001"
/// }
/// ```
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionaryStore for JsonFileStore {
    fn load(&self) -> Result<Dictionary, CoderError> {
        if !util::look_for_file(&self.path)? {
            tracing::debug!(
                "No dictionary file at '{}' yet, starting empty",
                self.path.display()
            );
            return Ok(Dictionary::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let entries: BTreeMap<String, EncodedValue> = serde_json::from_str(&content)?;
        let mut dictionary = Dictionary::new();
        for (iri, value) in entries {
            dictionary.insert(NamedNode::new(iri)?, value)?;
        }
        tracing::debug!(
            "Loaded {} dictionary entries from '{}'",
            dictionary.len(),
            self.path.display()
        );
        Ok(dictionary)
    }

    fn save(&mut self, dictionary: &Dictionary) -> Result<(), CoderError> {
        let entries: BTreeMap<&str, &EncodedValue> = dictionary
            .iter()
            .map(|(iri, value)| (iri.as_str(), value))
            .collect();
        let content = serde_json::to_string_pretty(&entries)?;
        util::write_atomically(&self.path, content.as_bytes())?;
        tracing::debug!(
            "Saved {} dictionary entries to '{}'",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoderId, ValueType};

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("dictionary.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn saved_dictionary_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("dictionary.json"));
        let mut dictionary = Dictionary::new();
        dictionary
            .insert(
                NamedNode::new_unchecked("http://purl.org/ontology/mo/Track"),
                EncodedValue::new(CoderId::KNOWN_VOCABULARY, ValueType::Iri, &[0, 0, 7]),
            )
            .unwrap();
        store.save(&dictionary).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains(r#""http://purl.org/ontology/mo/Track": "01000007""#));
        assert_eq!(store.load().unwrap(), dictionary);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.json");
        fs::write(&path, r#"{"http://example.com/a": "not hex"}"#).unwrap();
        assert!(JsonFileStore::new(&path).load().is_err());
        fs::write(&path, r#"{"not an iri": "01000001"}"#).unwrap();
        assert!(matches!(
            JsonFileStore::new(&path).load(),
            Err(CoderError::InvalidIri(_))
        ));
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::default();
        store.save(&Dictionary::new()).unwrap();
        assert_eq!(store.saves(), 1);
        assert!(store.load().unwrap().is_empty());
    }
}
