// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The set of vocabularies known to this crate,
//! and lookups across all of them.
//!
//! The order of [`KNOWN`] is stable;
//! dictionary coders derive their term numbering from it,
//! so new vocabularies get appended, never inserted.
//! RDF and RDFS come first, so their terms get the same codes
//! as in dictionaries written by earlier store versions.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use oxrdf::NamedNodeRef;

use crate::{dc, dcterms, foaf, mo, owl, rdf, rdfs, skos, xsd, Vocabulary};

pub static KNOWN: &[&dyn Vocabulary] = &[
    &rdf::Rdf,
    &rdfs::Rdfs,
    &xsd::Xsd,
    &owl::Owl,
    &dc::Dc,
    &dcterms::Dcterms,
    &skos::Skos,
    &foaf::Foaf,
    &mo::Mo,
];

static TERM_INDEX: Lazy<HashMap<&'static str, (NamedNodeRef<'static>, &'static dyn Vocabulary)>> =
    Lazy::new(|| {
        let mut index = HashMap::new();
        for vocab in KNOWN {
            for term in vocab.values() {
                index.insert(term.as_str(), (term, *vocab));
            }
        }
        index
    });

#[must_use]
pub fn known() -> &'static [&'static dyn Vocabulary] {
    KNOWN
}

/// Finds a known vocabulary by its preferred prefix, e.g. `"mo"`.
#[must_use]
pub fn by_prefix(prefix: &str) -> Option<&'static dyn Vocabulary> {
    KNOWN
        .iter()
        .copied()
        .find(|vocab| vocab.preferred_prefix() == prefix)
}

/// Finds a known vocabulary by its namespace IRI,
/// e.g. `"http://purl.org/ontology/mo/"`.
#[must_use]
pub fn by_namespace(namespace_iri: &str) -> Option<&'static dyn Vocabulary> {
    KNOWN
        .iter()
        .copied()
        .find(|vocab| vocab.namespace_iri() == namespace_iri)
}

/// The known vocabulary defining the given term, if any.
#[must_use]
pub fn vocabulary_of(node: NamedNodeRef<'_>) -> Option<&'static dyn Vocabulary> {
    TERM_INDEX.get(node.as_str()).map(|(_, vocab)| *vocab)
}

/// Maps an IRI string to the constant of the term it names.
#[must_use]
pub fn lookup(iri: &str) -> Option<NamedNodeRef<'static>> {
    TERM_INDEX.get(iri).map(|(term, _)| *term)
}

/// All terms of all known vocabularies, in registry order.
pub fn all_terms() -> impl Iterator<Item = NamedNodeRef<'static>> {
    KNOWN.iter().flat_map(|vocab| vocab.values())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_and_namespaces_resolve() {
        for vocab in known() {
            let by_pfx = by_prefix(vocab.preferred_prefix()).unwrap();
            assert_eq!(by_pfx.namespace_iri(), vocab.namespace_iri());
            let by_ns = by_namespace(vocab.namespace_iri()).unwrap();
            assert_eq!(by_ns.preferred_prefix(), vocab.preferred_prefix());
        }
        assert!(by_prefix("schema").is_none());
        assert_eq!(by_prefix("dcterms").unwrap().namespace_iri(), dcterms::NS_BASE);
        assert!(by_namespace("http://purl.org/ontology/mo").is_none());
    }

    #[test]
    fn lookup_returns_the_constant() {
        assert_eq!(lookup("http://purl.org/ontology/mo/Record"), Some(mo::RECORD_CLASS));
        assert_eq!(lookup("http://xmlns.com/foaf/0.1/maker"), Some(foaf::MAKER));
        assert_eq!(lookup("http://purl.org/ontology/mo/"), Some(mo::NAMESPACE));
        assert_eq!(lookup("http://www.w3.org/2002/07/owl#"), None);
        assert_eq!(
            lookup("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            Some(rdf::TYPE)
        );
        assert_eq!(lookup("http://example.com/Record"), None);
    }

    #[test]
    fn vocabulary_of_term() {
        let vocab = vocabulary_of(owl::SAME_AS).unwrap();
        assert_eq!(vocab.preferred_prefix(), owl::NS_PREFERRED_PREFIX);
        assert_eq!(vocabulary_of(mo::NAMESPACE).unwrap().preferred_prefix(), "mo");
        assert!(vocabulary_of(owl::NAMESPACE).is_none());
        assert_eq!(vocabulary_of(dc::TITLE).unwrap().preferred_prefix(), "dc");
        assert_eq!(vocabulary_of(dcterms::TITLE).unwrap().preferred_prefix(), "dcterms");
    }

    #[test]
    fn iris_are_unique_across_vocabularies() {
        let total: usize = known().iter().map(|vocab| vocab.terms().len()).sum();
        assert_eq!(TERM_INDEX.len(), total);
        assert_eq!(all_terms().count(), total);
    }

    #[test]
    fn rdf_and_rdfs_lead_the_registry() {
        let prefixes: Vec<_> = known().iter().map(|vocab| vocab.preferred_prefix()).collect();
        assert_eq!(
            prefixes,
            ["rdf", "rdfs", "xsd", "owl", "dc", "dcterms", "skos", "foaf", "mo"]
        );
        let mut terms = all_terms();
        assert_eq!(terms.next(), Some(rdf::TYPE));
        assert_eq!(terms.nth(5), Some(rdf::STATEMENT));
        assert_eq!(all_terms().nth(19), Some(rdfs::LITERAL));
    }
}
