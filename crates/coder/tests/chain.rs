// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use oxrdf::NamedNodeRef;
use rdfvocab_coder::{
    CoderConfig, CoderError, CoderId, DictionaryStore, EncodedValue, IriCoderChain,
    JsonFileStore, MemoryStore, Utf8IriCoder, ValueType,
};
use rdfvocab_iri::Namespace;
use rdfvocab_vocab::{dcterms, mo, owl, rdf, registry, xsd, Vocabulary};

fn config(save_on_changes: bool) -> CoderConfig {
    CoderConfig {
        fixed_namespaces: vec![Namespace::new(
            "person".to_owned(),
            "http://example.com/person/".to_owned(),
        )
        .unwrap()],
        save_on_changes,
    }
}

#[test]
fn first_accepting_coder_wins() {
    let mut store = MemoryStore::default();
    let chain = IriCoderChain::initialize(&config(false), &mut store).unwrap();

    let known = chain.encode(owl::SAME_AS).unwrap();
    assert_eq!(known.coder_id(), CoderId::KNOWN_VOCABULARY);
    assert_eq!(known.as_bytes().len(), 4);

    let person = NamedNodeRef::new_unchecked("http://example.com/person/ada");
    let fixed = chain.encode(person).unwrap();
    assert_eq!(fixed.coder_id(), CoderId::FIXED_NAMESPACE);

    let other = NamedNodeRef::new_unchecked("https://example.org/x");
    let plain = chain.encode(other).unwrap();
    assert_eq!(plain.coder_id(), CoderId::UTF8);

    for (iri, value) in [(owl::SAME_AS, known), (person, fixed), (other, plain)] {
        assert_eq!(chain.decode(&value).unwrap().as_ref(), iri);
    }
}

#[test]
fn common_vocabularies_get_short_codes() {
    let chain = IriCoderChain::initialize(&config(false), &mut MemoryStore::default()).unwrap();
    for iri in [rdf::TYPE, xsd::STRING, dcterms::TITLE, mo::NAMESPACE] {
        let value = chain.encode(iri).unwrap();
        assert_eq!(value.coder_id(), CoderId::KNOWN_VOCABULARY);
        assert_eq!(value.as_bytes().len(), 4);
    }
}

#[test]
fn encode_all_keeps_gaps() {
    let chain = IriCoderChain::initialize(&config(false), &mut MemoryStore::default()).unwrap();
    let encoded = chain
        .encode_all(&[Some(mo::RECORD), None, Some(mo::TRACK)])
        .unwrap();
    assert_eq!(encoded.len(), 3);
    assert!(encoded[0].is_some());
    assert!(encoded[1].is_none());
    assert_eq!(encoded[2], chain.encode(mo::TRACK).ok());
}

#[test]
fn decode_checks_the_header() {
    let chain = IriCoderChain::initialize(&config(false), &mut MemoryStore::default()).unwrap();
    let literal = EncodedValue::new(CoderId::KNOWN_VOCABULARY, ValueType::Literal, &[0, 0, 1]);
    assert!(matches!(
        chain.decode(&literal),
        Err(CoderError::NotAnIri(ValueType::Literal))
    ));
    let unknown_coder = EncodedValue::new(CoderId::new(7).unwrap(), ValueType::Iri, b"x");
    assert!(matches!(
        chain.decode(&unknown_coder),
        Err(CoderError::UnknownCoder(_))
    ));
}

#[test]
fn saves_only_when_configured_and_changed() {
    let mut store = MemoryStore::default();
    IriCoderChain::initialize(&config(false), &mut store).unwrap();
    assert_eq!(store.saves(), 0);

    IriCoderChain::initialize(&config(true), &mut store).unwrap();
    assert_eq!(store.saves(), 1);
    assert!(!store.dictionary().is_empty());

    IriCoderChain::initialize(&config(true), &mut store).unwrap();
    assert_eq!(store.saves(), 1);
}

#[test]
fn codes_are_stable_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("known-vocabularies.json");

    let mut store = JsonFileStore::new(&path);
    let first = IriCoderChain::initialize(&config(true), &mut store).unwrap();
    let code = first.encode(mo::MUSIC_ARTIST).unwrap();
    assert!(path.exists());

    let mut store = JsonFileStore::new(&path);
    let second = IriCoderChain::initialize(&config(true), &mut store).unwrap();
    assert_eq!(second.encode(mo::MUSIC_ARTIST).unwrap(), code);

    let total: usize = registry::known().iter().map(|v| v.terms().len()).sum();
    assert_eq!(store.load().unwrap().len(), total);
}

#[test]
fn custom_chain_checks_positions() {
    let misplaced = IriCoderChain::with_coders(vec![Box::new(Utf8IriCoder::new(CoderId::UTF8))]);
    assert!(matches!(
        misplaced,
        Err(CoderError::MisplacedCoder { position: 0, .. })
    ));
    let chain =
        IriCoderChain::with_coders(vec![Box::new(Utf8IriCoder::new(CoderId::KNOWN_VOCABULARY))])
            .unwrap();
    let value = chain.encode(mo::TRACK).unwrap();
    assert_eq!(value.payload(), mo::TRACK.as_str().as_bytes());
}
