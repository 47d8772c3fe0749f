// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use oxrdf::NamedNode;
use rdfvocab_coder::{
    CoderError, CoderId, Dictionary, EncodedValue, IriCoder, KnownVocabularyCoder, ValueType,
    MAX_ENTRIES,
};
use rdfvocab_vocab::{foaf, mo, owl, rdf, rdfs, registry, Vocabulary};

fn coder(coder_id: u8, loaded: Dictionary) -> KnownVocabularyCoder {
    KnownVocabularyCoder::initialize(CoderId::new(coder_id).unwrap(), loaded, registry::known())
        .unwrap()
}

/// Counter of the first term of `vocab` in a fresh dictionary.
fn first_counter_of(vocab: &dyn Vocabulary) -> u32 {
    let before: usize = registry::known()
        .iter()
        .take_while(|known| known.namespace_iri() != vocab.namespace_iri())
        .map(|known| known.terms().len())
        .sum();
    u32::try_from(before + 1).unwrap()
}

fn payload(counter: u32) -> [u8; 3] {
    let bytes = counter.to_be_bytes();
    [bytes[1], bytes[2], bytes[3]]
}

#[test]
fn without_existing_dictionary() {
    let coder0 = coder(0, Dictionary::new());

    // coder ID and value type, then the counter
    let first = EncodedValue::from_bytes(vec![0b0000_0001, 0, 0, 1]).unwrap();
    assert_eq!(coder0.encode(rdf::TYPE), Some(first.clone()));
    assert_eq!(coder0.decode(&first).unwrap().as_ref(), rdf::TYPE);

    let statement = EncodedValue::from_bytes(vec![0b0000_0001, 0, 0, 7]).unwrap();
    assert_eq!(coder0.encode(rdf::STATEMENT), Some(statement));

    let literal = EncodedValue::from_bytes(vec![0b0000_0001, 0, 0, 20]).unwrap();
    assert_eq!(coder0.encode(rdfs::LITERAL), Some(literal));

    let coder2 = coder(2, Dictionary::new());
    let first = EncodedValue::from_bytes(vec![0b0000_1001, 0, 0, 1]).unwrap();
    assert_eq!(coder2.encode(rdf::TYPE), Some(first.clone()));
    assert_eq!(coder2.decode(&first).unwrap().as_ref(), rdf::TYPE);
}

#[test]
fn vocabularies_are_numbered_in_registry_order() {
    let coder0 = coder(0, Dictionary::new());
    assert_eq!(first_counter_of(&rdfs::Rdfs), 19);
    let first_mo = first_counter_of(&mo::Mo);
    assert_eq!(
        first_mo,
        first_counter_of(&foaf::Foaf) + u32::try_from(foaf::TERMS.len()).unwrap()
    );
    assert_eq!(
        coder0.encode(foaf::TERMS[0]).unwrap().payload(),
        &payload(first_counter_of(&foaf::Foaf))
    );
    // the namespace IRI of the Music Ontology is a term of its own
    assert_eq!(coder0.encode(mo::NAMESPACE).unwrap().payload(), &payload(first_mo));
    assert_eq!(
        coder0.encode(mo::ACTIVITY_CLASS).unwrap().payload(),
        &payload(first_mo + 1)
    );
    assert_eq!(
        coder0.encode(mo::ACTIVITY).unwrap().payload(),
        &payload(first_mo + 2)
    );
    let total: usize = registry::known().iter().map(|v| v.terms().len()).sum();
    assert_eq!(coder0.dictionary().len(), total);
    assert_eq!(coder0.newly_registered(), total);
}

#[test]
fn with_existing_dictionary() {
    let coder1 = coder(0, Dictionary::new());
    let dictionary1 = coder1.dictionary().clone();

    let coder2 = coder(0, dictionary1.clone());
    assert_eq!(coder2.dictionary(), &dictionary1);
    assert_eq!(coder2.newly_registered(), 0);

    let mut dictionary3 = Dictionary::new();
    dictionary3
        .insert(
            NamedNode::new_unchecked("http://example.com/1"),
            EncodedValue::from_bytes(vec![0b0000_0001, 0, 0, 0]).unwrap(),
        )
        .unwrap();
    let coder3 = coder(0, dictionary3);
    let expected = EncodedValue::from_bytes(vec![0b0000_0001, 0, 0, 2]).unwrap();
    assert_eq!(coder3.encode(rdf::TYPE), Some(expected));
}

#[test]
fn counting_continues_after_the_highest_loaded_counter() {
    let mut loaded = Dictionary::new();
    loaded
        .insert(
            mo::TRACK.into_owned(),
            EncodedValue::new(CoderId::KNOWN_VOCABULARY, ValueType::Iri, &[0, 1, 0]),
        )
        .unwrap();
    let coder0 = coder(0, loaded);
    assert_eq!(
        coder0.encode(mo::TRACK).unwrap().payload(),
        &[0, 1, 0],
        "loaded codes must be kept"
    );
    assert_eq!(coder0.encode(rdf::TYPE).unwrap().payload(), &[0, 1, 1]);
}

#[test]
fn full_dictionary() {
    let mut loaded = Dictionary::new();
    loaded
        .insert(
            NamedNode::new_unchecked("http://example.com/last"),
            EncodedValue::new(CoderId::KNOWN_VOCABULARY, ValueType::Iri, &[0xff, 0xff, 0xff]),
        )
        .unwrap();
    let err = KnownVocabularyCoder::initialize(CoderId::KNOWN_VOCABULARY, loaded, registry::known())
        .unwrap_err();
    assert!(matches!(err, CoderError::DictionaryFull(16_777_215)));
    assert!(matches!(err, CoderError::DictionaryFull(max) if max == MAX_ENTRIES));
}

#[test]
fn inexistent_mapping() {
    let coder0 = coder(0, Dictionary::new());
    assert!(coder0
        .encode(NamedNode::new_unchecked("http://example.com/1").as_ref())
        .is_none());
    assert!(coder0.encode(owl::NAMESPACE).is_none());
    assert!(coder0.encode(mo::NAMESPACE).is_some());
}
