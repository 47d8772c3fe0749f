// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Compact binary coding of IRIs for RDF storage.
//!
//! The terms of all [known vocabularies](rdfvocab_vocab::registry)
//! get a 4 byte code through a persisted [`Dictionary`];
//! other IRIs fall back to namespace or plain UTF-8 coding.
//! [`IriCoderChain`] ties the coders together.

mod chain;
mod config;
mod dictionary;
mod error;
mod fixed_namespace;
pub mod header;
mod known;
mod store;
mod utf8;

pub use chain::IriCoderChain;
pub use config::CoderConfig;
pub use dictionary::Dictionary;
pub use error::CoderError;
pub use fixed_namespace::FixedNamespaceCoder;
pub use header::{CoderId, EncodedValue, ValueType};
pub use known::{KnownVocabularyCoder, MAX_ENTRIES};
pub use store::{DictionaryStore, JsonFileStore, MemoryStore};
pub use utf8::Utf8IriCoder;

use git_version::git_version;
use oxrdf::{NamedNode, NamedNodeRef};

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// One way of turning IRIs into [`EncodedValue`]s and back.
pub trait IriCoder: Send + Sync {
    fn coder_id(&self) -> CoderId;

    /// Returns `None` if this coder does not handle the given IRI.
    fn encode(&self, iri: NamedNodeRef<'_>) -> Option<EncodedValue>;

    /// # Errors
    ///
    /// If the value was not produced by this coder,
    /// or its payload is invalid.
    fn decode(&self, value: &EncodedValue) -> Result<NamedNode, CoderError>;

    /// Verifies that `value` is an IRI encoded by this coder.
    ///
    /// # Errors
    ///
    /// If it is not.
    fn check_owner(&self, value: &EncodedValue) -> Result<(), CoderError> {
        if value.value_type() != ValueType::Iri {
            return Err(CoderError::NotAnIri(value.value_type()));
        }
        if value.coder_id() != self.coder_id() {
            return Err(CoderError::WrongCoder {
                expected: self.coder_id(),
                value: value.clone(),
            });
        }
        Ok(())
    }
}
