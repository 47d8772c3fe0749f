// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use oxrdf::{NamedNode, NamedNodeRef};
use rdfvocab_vocab::Vocabulary;

use crate::{CoderError, CoderId, Dictionary, EncodedValue, IriCoder, ValueType};

const VALUE_HASH_BYTES: usize = 3;

/// The highest counter that fits into the payload.
pub const MAX_ENTRIES: u32 = (1 << (8 * VALUE_HASH_BYTES)) - 1;

/// Encodes the terms of known vocabularies
/// as a 3 byte counter, assigned in registration order.
///
/// Once assigned, a counter never changes;
/// the dictionary has to be persisted
/// and handed to [`Self::initialize`] on the next start.
#[derive(Clone, Debug)]
pub struct KnownVocabularyCoder {
    coder_id: CoderId,
    dictionary: Dictionary,
    newly_registered: usize,
}

fn counter_of(value: &EncodedValue) -> Option<u32> {
    match *value.payload() {
        [b0, b1, b2] => Some(u32::from_be_bytes([0, b0, b1, b2])),
        _ => None,
    }
}

impl KnownVocabularyCoder {
    /// Creates the coder from a previously persisted dictionary,
    /// registering all terms of `vocabularies` it does not contain yet.
    ///
    /// # Errors
    ///
    /// - An entry of `loaded` was not created by a coder with this ID.
    /// - The counter space is exhausted.
    pub fn initialize(
        coder_id: CoderId,
        loaded: Dictionary,
        vocabularies: &[&dyn Vocabulary],
    ) -> Result<Self, CoderError> {
        let expected_header = coder_id.header(ValueType::Iri);
        let mut counter = 0;
        for (iri, value) in loaded.iter() {
            let entry_counter = counter_of(value)
                .filter(|_| value.header() == expected_header)
                .ok_or_else(|| CoderError::ForeignEntry {
                    iri: iri.as_str().to_owned(),
                    value: value.clone(),
                    coder_id,
                })?;
            counter = counter.max(entry_counter);
        }
        // Counting continues after the loaded entries,
        // even when their counters have gaps.
        counter = counter.max(u32::try_from(loaded.len()).unwrap_or(u32::MAX));

        let refresh = !loaded.is_empty();
        if refresh {
            tracing::info!("Dictionary isn't empty, found {} entries", loaded.len());
        } else {
            tracing::info!("Dictionary is empty");
        }

        let mut coder = Self {
            coder_id,
            dictionary: loaded,
            newly_registered: 0,
        };
        for vocab in vocabularies {
            if refresh {
                tracing::info!("Refreshing [{}] vocabulary...", vocab.namespace_iri());
            } else {
                tracing::info!("Registering [{}] vocabulary...", vocab.namespace_iri());
            }
            for term in vocab.values() {
                if !coder.dictionary.contains(term) {
                    coder.register(&mut counter, term)?;
                }
            }
        }
        if refresh {
            tracing::info!("Refreshed {} vocabularies", vocabularies.len());
        } else {
            tracing::info!("Registered {} vocabularies", vocabularies.len());
        }
        tracing::info!("Dictionary size is {}", coder.dictionary.len());

        Ok(coder)
    }

    fn register(&mut self, counter: &mut u32, term: NamedNodeRef<'_>) -> Result<(), CoderError> {
        if *counter >= MAX_ENTRIES {
            return Err(CoderError::DictionaryFull(MAX_ENTRIES));
        }
        *counter += 1;
        let counter_bytes = counter.to_be_bytes();
        let value = EncodedValue::new(
            self.coder_id,
            ValueType::Iri,
            counter_bytes.get(1..).unwrap_or_default(),
        );
        self.dictionary.insert(term.into_owned(), value)?;
        self.newly_registered += 1;
        Ok(())
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// How many terms [`Self::initialize`] added to the loaded dictionary.
    #[must_use]
    pub const fn newly_registered(&self) -> usize {
        self.newly_registered
    }
}

impl IriCoder for KnownVocabularyCoder {
    fn coder_id(&self) -> CoderId {
        self.coder_id
    }

    fn encode(&self, iri: NamedNodeRef<'_>) -> Option<EncodedValue> {
        self.dictionary.get(iri).cloned()
    }

    fn decode(&self, value: &EncodedValue) -> Result<NamedNode, CoderError> {
        self.check_owner(value)?;
        self.dictionary
            .iri(value)
            .cloned()
            .ok_or_else(|| CoderError::UnknownHash(value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfvocab_vocab::{mo, owl};

    #[test]
    fn counter_round_trips_through_the_payload() {
        let coder =
            KnownVocabularyCoder::initialize(CoderId::KNOWN_VOCABULARY, Dictionary::new(), &[&owl::Owl])
                .unwrap();
        let value = coder.encode(owl::THING).unwrap();
        assert_eq!(counter_of(&value), Some(70));
        assert_eq!(coder.newly_registered(), owl::TERMS.len());
    }

    #[test]
    fn foreign_entries_are_rejected() {
        let mut loaded = Dictionary::new();
        loaded
            .insert(
                mo::TRACK.into_owned(),
                EncodedValue::new(CoderId::UTF8, ValueType::Iri, &[0, 0, 1]),
            )
            .unwrap();
        let err = KnownVocabularyCoder::initialize(CoderId::KNOWN_VOCABULARY, loaded, &[&mo::Mo])
            .unwrap_err();
        assert!(matches!(err, CoderError::ForeignEntry { .. }));
    }

    #[test]
    fn decoding_an_unknown_counter_fails() {
        let coder =
            KnownVocabularyCoder::initialize(CoderId::KNOWN_VOCABULARY, Dictionary::new(), &[&owl::Owl])
                .unwrap();
        let unknown = EncodedValue::new(CoderId::KNOWN_VOCABULARY, ValueType::Iri, &[0xff, 0, 0]);
        assert!(matches!(
            coder.decode(&unknown),
            Err(CoderError::UnknownHash(_))
        ));
    }
}
