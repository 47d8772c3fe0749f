// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use rdfvocab_vocab::{dc, dcterms, rdf, rdfs, registry, skos, xsd, Vocabulary};

#[test]
fn rdf_terms_in_dictionary_order() {
    assert_eq!(rdf::TERMS.len(), 18);
    assert_eq!(rdf::TERMS[0], rdf::TYPE);
    assert_eq!(rdf::TERMS[6], rdf::STATEMENT);
    assert_eq!(rdf::TERMS.last(), Some(&rdf::HTML));
    assert_eq!(
        rdf::TYPE.as_str(),
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
    );
    assert_eq!(
        rdf::LANG_STRING.as_str(),
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"
    );
}

#[test]
fn rdfs_terms_in_dictionary_order() {
    assert_eq!(rdfs::TERMS.len(), 15);
    assert_eq!(rdfs::TERMS[0], rdfs::RESOURCE);
    assert_eq!(rdfs::TERMS[1], rdfs::LITERAL);
    assert_eq!(
        rdfs::SUB_CLASS_OF.as_str(),
        "http://www.w3.org/2000/01/rdf-schema#subClassOf"
    );
}

#[test]
fn datatypes() {
    assert_eq!(xsd::Xsd.preferred_prefix(), "xsd");
    assert_eq!(xsd::STRING.as_str(), "http://www.w3.org/2001/XMLSchema#string");
    assert_eq!(
        xsd::BASE_64_BINARY.as_str(),
        "http://www.w3.org/2001/XMLSchema#base64Binary"
    );
    assert_eq!(xsd::NC_NAME.as_str(), "http://www.w3.org/2001/XMLSchema#NCName");
    assert_eq!(xsd::Xsd.term("dateTime"), Some(xsd::DATE_TIME));
}

#[test]
fn dublin_core_elements_and_terms_are_apart() {
    assert_eq!(dc::TERMS.len(), 15);
    assert_eq!(dc::TITLE.as_str(), "http://purl.org/dc/elements/1.1/title");
    assert_eq!(dcterms::TITLE.as_str(), "http://purl.org/dc/terms/title");
    assert_ne!(dc::TITLE, dcterms::TITLE);
    assert!(!dc::Dc.contains(dcterms::TITLE));
    assert_eq!(
        dcterms::ISO_639_2.as_str(),
        "http://purl.org/dc/terms/ISO639-2"
    );
    assert_eq!(dcterms::W_3_CDTF.as_str(), "http://purl.org/dc/terms/W3CDTF");
}

#[test]
fn skos_concepts() {
    assert_eq!(skos::TERMS.len(), 32);
    assert_eq!(
        skos::PREF_LABEL.as_str(),
        "http://www.w3.org/2004/02/skos/core#prefLabel"
    );
    assert_eq!(skos::Skos.term("Concept"), Some(skos::CONCEPT));
}

#[test]
fn every_vocabulary_is_registered() {
    for vocab in [
        &rdf::Rdf as &dyn Vocabulary,
        &rdfs::Rdfs,
        &xsd::Xsd,
        &dc::Dc,
        &dcterms::Dcterms,
        &skos::Skos,
    ] {
        let known = registry::by_namespace(vocab.namespace_iri()).unwrap();
        assert_eq!(known.terms().len(), vocab.terms().len());
        assert!(!vocab.contains(vocab.namespace_node()));
    }
}
