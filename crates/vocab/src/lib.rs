// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Provides ready to use [`NamedNodeRef`]s
//! for a set of well known RDF vocabularies,
//! and the complete term set of each of them.

pub mod dc;
pub mod dcterms;
pub mod foaf;
pub mod mo;
pub mod owl;
pub mod rdf;
pub mod rdfs;
pub mod registry;
pub mod skos;
pub mod xsd;

use git_version::git_version;
use oxrdf::NamedNodeRef;
use rdfvocab_iri::{IriParseError, Namespace};

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

#[macro_export]
macro_rules! named_node {
    ($const:ident, $base:expr, $node:literal, $doc:literal) => {
        #[doc=$doc]
        pub const $const: oxrdf::NamedNodeRef<'_> =
            oxrdf::NamedNodeRef::new_unchecked(const_format::concatcp!($base, $node));
    };
}

#[macro_export]
macro_rules! named_node_deprecated {
    ($const:ident, $base:expr, $node:literal, $doc:literal, $since:literal, $note:literal) => {
        #[allow(clippy::deprecated_semver)]
        #[deprecated(since=$since, note=$note)]
        #[doc=$doc]
        pub const $const: oxrdf::NamedNodeRef<'_> =
            oxrdf::NamedNodeRef::new_unchecked(const_format::concatcp!($base, $node));
    };
}

/// Declares the vocabulary-wide items of a vocabulary module:
/// `NAMESPACE`, the complete `TERMS` set and a unit struct
/// implementing [`Vocabulary`].
///
/// With `namespace_term`, the namespace IRI is a term of its own
/// and comes first in `TERMS`.
///
/// Expects `NS_BASE` and `NS_PREFERRED_PREFIX` to be in scope.
#[macro_export]
macro_rules! vocabulary {
    (@items $vocab:ident, $title:literal, [$($term:ident),*]) => {
        /// The namespace IRI itself.
        pub const NAMESPACE: oxrdf::NamedNodeRef<'_> = oxrdf::NamedNodeRef::new_unchecked(NS_BASE);

        /// Every term of this vocabulary, in registration order.
        #[allow(deprecated)]
        pub const TERMS: &[oxrdf::NamedNodeRef<'static>] = &[$($term),*];

        #[doc = concat!("The ", $title, " vocabulary, as a [`Vocabulary`](", "crate::Vocabulary).")]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $vocab;

        impl $crate::Vocabulary for $vocab {
            fn title(&self) -> &'static str {
                $title
            }

            fn namespace_iri(&self) -> &'static str {
                NS_BASE
            }

            fn preferred_prefix(&self) -> &'static str {
                NS_PREFERRED_PREFIX
            }

            fn terms(&self) -> &'static [oxrdf::NamedNodeRef<'static>] {
                TERMS
            }
        }
    };
    ($vocab:ident, $title:literal, namespace_term, [$($term:ident),* $(,)?]) => {
        $crate::vocabulary!(@items $vocab, $title, [NAMESPACE $(, $term)*]);
    };
    ($vocab:ident, $title:literal, [$($term:ident),* $(,)?]) => {
        $crate::vocabulary!(@items $vocab, $title, [$($term),*]);
    };
}

/// A set of RDF terms sharing one namespace,
/// e.g. [`mo::Mo`] for the Music Ontology.
pub trait Vocabulary: Send + Sync {
    /// Human readable name of the vocabulary.
    fn title(&self) -> &'static str;

    /// The base URI all terms start with,
    /// e.g. `http://purl.org/ontology/mo/`.
    fn namespace_iri(&self) -> &'static str;

    /// The commonly used prefix, e.g. `mo`.
    fn preferred_prefix(&self) -> &'static str;

    /// The complete set of terms,
    /// starting with the namespace IRI if that is a term itself.
    fn terms(&self) -> &'static [NamedNodeRef<'static>];

    #[must_use]
    fn namespace_node(&self) -> NamedNodeRef<'static> {
        NamedNodeRef::new_unchecked(self.namespace_iri())
    }

    /// Prefix and namespace IRI as a [`Namespace`].
    ///
    /// # Errors
    ///
    /// If the namespace IRI does not parse,
    /// which does not happen for the vocabularies of this crate.
    fn namespace(&self) -> Result<Namespace, IriParseError> {
        Namespace::new(
            self.preferred_prefix().to_owned(),
            self.namespace_iri().to_owned(),
        )
    }

    fn values(&self) -> std::iter::Copied<std::slice::Iter<'static, NamedNodeRef<'static>>> {
        self.terms().iter().copied()
    }

    /// Looks up a term by its local name,
    /// e.g. `"Track"` for `mo:Track`,
    /// or `""` for the namespace IRI of vocabularies listing it.
    #[must_use]
    fn term(&self, local_name: &str) -> Option<NamedNodeRef<'static>> {
        let ns = self.namespace_iri();
        self.values()
            .find(|term| term.as_str().strip_prefix(ns) == Some(local_name))
    }

    #[must_use]
    fn contains(&self, node: NamedNodeRef<'_>) -> bool {
        self.values().any(|term| term == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_lookup_by_local_name() {
        assert_eq!(mo::Mo.term("Track"), Some(mo::TRACK_CLASS));
        assert_eq!(mo::Mo.term("track"), Some(mo::TRACK));
        assert_eq!(mo::Mo.term("NoSuchTerm"), None);
        assert_eq!(mo::Mo.term(""), Some(mo::NAMESPACE));
        assert_eq!(rdf::Rdf.term("type"), Some(rdf::TYPE));
        assert_eq!(rdf::Rdf.term(""), None);
    }

    #[test]
    fn contains_only_own_terms() {
        assert!(mo::Mo.contains(mo::MUSIC_ARTIST));
        assert!(!mo::Mo.contains(foaf::PERSON));
        assert!(mo::Mo.contains(mo::NAMESPACE));
        assert!(!owl::Owl.contains(owl::NAMESPACE));
        assert!(!rdfs::Rdfs.contains(rdf::TYPE));
        assert!(!mo::Mo.contains(NamedNodeRef::new_unchecked(
            "http://purl.org/ontology/mo/unknown"
        )));
    }

    #[test]
    fn namespace_accessors() {
        assert_eq!(mo::NAMESPACE.as_str(), mo::NS_BASE);
        assert_eq!(mo::Mo.namespace_node(), mo::NAMESPACE);
        let ns = mo::Mo.namespace().unwrap();
        assert_eq!(ns.prefix, "mo");
        assert_eq!(ns.base(), Some("http://purl.org/ontology/mo"));
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_terms_are_part_of_the_set() {
        assert_eq!(
            mo::DEPRECATED_TRACK_NUM.as_str(),
            "http://purl.org/ontology/mo/trackNum"
        );
        assert!(mo::TERMS.contains(&mo::DEPRECATED_TRACK_NUM));
    }

    #[test]
    fn namespace_term_comes_first() {
        assert_eq!(mo::TERMS[0], mo::NAMESPACE);
        assert_eq!(mo::Mo.values().next(), Some(mo::NAMESPACE));
        assert_eq!(rdf::TERMS[0], rdf::TYPE);
        assert!(!rdf::TERMS.contains(&rdf::NAMESPACE));
    }
}
