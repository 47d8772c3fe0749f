// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashSet;

use rdfvocab_vocab::{mo, registry, Vocabulary};

#[test]
fn namespace_and_prefix() {
    assert_eq!(mo::NS_BASE, "http://purl.org/ontology/mo/");
    assert_eq!(mo::NS_PREFERRED_PREFIX, "mo");
    assert_eq!(mo::Mo.namespace_iri(), mo::NS_BASE);
    assert_eq!(mo::Mo.preferred_prefix(), mo::NS_PREFERRED_PREFIX);
    assert_eq!(mo::Mo.title(), "The Music Ontology");
}

#[test]
fn complete_term_set() {
    // the namespace IRI plus 239 terms
    assert_eq!(mo::TERMS.len(), 240);
    let unique: HashSet<&str> = mo::TERMS.iter().map(|term| term.as_str()).collect();
    assert_eq!(unique.len(), mo::TERMS.len());
    assert!(unique.contains(mo::NS_BASE));
    assert_eq!(mo::TERMS[0], mo::NAMESPACE);
    for term in &mo::TERMS[1..] {
        let local_name = term.as_str().strip_prefix(mo::NS_BASE).unwrap();
        assert!(!local_name.is_empty());
        assert_eq!(mo::Mo.term(local_name), Some(*term));
    }
}

#[test]
fn constants_name_the_right_iris() {
    assert_eq!(mo::MUSIC_ARTIST.as_str(), "http://purl.org/ontology/mo/MusicArtist");
    assert_eq!(mo::ACTIVITY_START.as_str(), "http://purl.org/ontology/mo/activity_start");
    assert_eq!(mo::ED_2_K.as_str(), "http://purl.org/ontology/mo/ED2K");
    assert_eq!(mo::CD.as_str(), "http://purl.org/ontology/mo/CD");
    assert_eq!(mo::WIKIPEDIA.as_str(), "http://purl.org/ontology/mo/wikipedia");
}

#[test]
fn class_and_property_sharing_a_name() {
    assert_eq!(mo::TRACK.as_str(), "http://purl.org/ontology/mo/track");
    assert_eq!(mo::TRACK_CLASS.as_str(), "http://purl.org/ontology/mo/Track");
    assert_eq!(mo::GENRE.as_str(), "http://purl.org/ontology/mo/genre");
    assert_eq!(mo::GENRE_CLASS.as_str(), "http://purl.org/ontology/mo/Genre");
    assert_eq!(mo::RELEASE_STATUS.as_str(), "http://purl.org/ontology/mo/release_status");
    assert_eq!(
        mo::RELEASE_STATUS_CLASS.as_str(),
        "http://purl.org/ontology/mo/ReleaseStatus"
    );
}

#[test]
#[allow(deprecated)]
fn legacy_camel_case_terms() {
    assert_eq!(
        mo::DEPRECATED_AVAILABLE_AS.as_str(),
        "http://purl.org/ontology/mo/availableAs"
    );
    assert_eq!(mo::AVAILABLE_AS.as_str(), "http://purl.org/ontology/mo/available_as");
    assert_eq!(
        mo::DEPRECATED_SAMPLE_RATE.as_str(),
        "http://purl.org/ontology/mo/sampleRate"
    );
}

fn position(term: oxrdf::NamedNodeRef<'_>) -> usize {
    mo::TERMS.iter().position(|known| *known == term).unwrap()
}

#[test]
fn terms_keep_the_established_declaration_order() {
    assert_eq!(mo::TERMS[1], mo::ACTIVITY_CLASS);
    assert_eq!(mo::TERMS.last(), Some(&mo::WIKIPEDIA));
    // case-insensitive by local name, ties as in existing dictionaries
    assert!(position(mo::ACTIVITY_CLASS) < position(mo::ACTIVITY));
    assert!(position(mo::GENRE) < position(mo::GENRE_CLASS));
    assert!(position(mo::TRACK) < position(mo::TRACK_CLASS));
    assert!(position(mo::LABEL_CLASS) < position(mo::LABEL));
    let keys: Vec<String> = mo::TERMS[1..]
        .iter()
        .map(|term| term.as_str().to_lowercase())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn registered_as_known_vocabulary() {
    let vocab = registry::by_prefix("mo").unwrap();
    assert_eq!(vocab.terms().len(), mo::TERMS.len());
    assert_eq!(
        registry::vocabulary_of(mo::PERFORMANCE).map(|vocab| vocab.title()),
        Some("The Music Ontology")
    );
    assert_eq!(registry::known().last().map(|vocab| vocab.preferred_prefix()), Some("mo"));
}
