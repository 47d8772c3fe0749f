// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

pub use oxiri::IriParseError;
use oxiri::IriRef;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type Iri = IriRef<String>;

pub const PREFIX_EMPTY: &str = "";
pub const PREFIX_EMPTY_ID: &str = "__NO_PREFIX_ID__";

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

/// A vocabulary namespace:
/// the IRI all its terms start with,
/// plus the short prefix commonly used for it.
///
/// # Examples (Turtle format):
///
/// ```turtle
/// @prefix mo:   <http://purl.org/ontology/mo/> .
/// @prefix foaf: <http://xmlns.com/foaf/0.1/> .
/// @prefix owl:  <http://www.w3.org/2002/07/owl#> .
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Namespace {
    /// The short form, e.g. `mo` or `foaf`.
    /// See `::PREFIX_EMPTY`
    pub prefix: String,
    /// The full namespace IRI,
    /// e.g. `http://purl.org/ontology/mo/`.
    pub iri: Iri,
}

impl Namespace {
    /// Creates a new instance of `Namespace`.
    ///
    /// # Errors
    ///
    /// Returns an `IriParseError` if the given `iri` is invalid.
    pub fn new(prefix: String, iri: String) -> Result<Self, IriParseError> {
        Ok(Self {
            prefix,
            iri: IriRef::parse(iri)?,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.iri.as_str()
    }

    /// Returns the IRI without its trailing delimiter,
    /// or `None` if it does not end in `#` or `/`.
    ///
    /// # Examples
    ///
    /// - `http://purl.org/ontology/mo/` -> \
    ///   `http://purl.org/ontology/mo`
    /// - `http://www.w3.org/2002/07/owl#` -> \
    ///   `http://www.w3.org/2002/07/owl`
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        let iri_str = self.iri.as_str();
        iri_str
            .strip_suffix('#')
            .or_else(|| iri_str.strip_suffix('/'))
    }

    /// Returns a _non empty_ "version" of the prefix.
    /// This is either `self.prefix` or `::PREFIX_EMPTY_ID`.
    #[must_use]
    pub fn prefix_id(&self) -> &str {
        if self.prefix == PREFIX_EMPTY {
            PREFIX_EMPTY_ID
        } else {
            self.prefix.as_str()
        }
    }

    /// The part of `iri` following this namespace,
    /// or `None` if `iri` is not within it
    /// or names the namespace itself.
    #[must_use]
    pub fn local_name<'a>(&self, iri: &'a str) -> Option<&'a str> {
        iri.strip_prefix(self.iri.as_str())
            .filter(|local_name| !local_name.is_empty())
    }

    #[must_use]
    pub fn contains(&self, iri: &str) -> bool {
        self.local_name(iri).is_some()
    }

    /// The Turtle prefix declaration for this namespace.
    #[must_use]
    pub fn to_turtle(&self) -> String {
        format!("@prefix {}: <{}> .", self.prefix, self.iri)
    }
}

/// Splits an IRI into namespace and local name.
///
/// The split happens after the last `#`,
/// or if there is none, after the last `/`,
/// or if there is none either, after the last `:`.
/// Without any of these, the whole IRI is the namespace.
#[must_use]
pub fn split_iri(iri: &str) -> (&str, &str) {
    let split_idx = iri
        .rfind('#')
        .or_else(|| iri.rfind('/'))
        .or_else(|| iri.rfind(':'))
        .map_or(iri.len(), |idx| idx + 1);
    iri.split_at(split_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mo() -> Namespace {
        Namespace::new("mo".to_owned(), "http://purl.org/ontology/mo/".to_owned()).unwrap()
    }

    #[test]
    fn rejects_invalid_iri() {
        assert!(Namespace::new("x".to_owned(), "http://exa mple.com/".to_owned()).is_err());
    }

    #[test]
    fn base_strips_delimiter() {
        assert_eq!(mo().base(), Some("http://purl.org/ontology/mo"));
        let owl =
            Namespace::new("owl".to_owned(), "http://www.w3.org/2002/07/owl#".to_owned()).unwrap();
        assert_eq!(owl.base(), Some("http://www.w3.org/2002/07/owl"));
        let urn = Namespace::new("x".to_owned(), "urn:example:".to_owned()).unwrap();
        assert_eq!(urn.base(), None);
    }

    #[test]
    fn empty_prefix_has_an_id() {
        let ns = Namespace::new(String::new(), "http://example.com/".to_owned()).unwrap();
        assert_eq!(ns.prefix_id(), PREFIX_EMPTY_ID);
        assert_eq!(mo().prefix_id(), "mo");
    }

    #[test]
    fn local_names() {
        let ns = mo();
        assert_eq!(ns.local_name("http://purl.org/ontology/mo/Track"), Some("Track"));
        assert_eq!(ns.local_name("http://purl.org/ontology/mo/"), None);
        assert_eq!(ns.local_name("http://xmlns.com/foaf/0.1/name"), None);
        assert!(ns.contains("http://purl.org/ontology/mo/track"));
    }

    #[test]
    fn turtle_declaration() {
        assert_eq!(mo().to_turtle(), "@prefix mo: <http://purl.org/ontology/mo/> .");
    }

    #[test]
    fn split_rules() {
        assert_eq!(
            split_iri("http://www.w3.org/2002/07/owl#sameAs"),
            ("http://www.w3.org/2002/07/owl#", "sameAs")
        );
        assert_eq!(
            split_iri("http://purl.org/ontology/mo/Track"),
            ("http://purl.org/ontology/mo/", "Track")
        );
        assert_eq!(split_iri("urn:isbn:0451450523"), ("urn:isbn:", "0451450523"));
        assert_eq!(split_iri("nodelimiter"), ("nodelimiter", ""));
    }
}
