// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use oxrdf::{NamedNode, NamedNodeRef};
use rdfvocab_vocab::registry;

use crate::{
    CoderConfig, CoderError, CoderId, DictionaryStore, EncodedValue, FixedNamespaceCoder,
    IriCoder, KnownVocabularyCoder, Utf8IriCoder, ValueType,
};

/// Encodes IRIs with the first coder that accepts them,
/// and decodes them with the coder named in the header.
pub struct IriCoderChain {
    coders: Vec<Box<dyn IriCoder>>,
}

impl IriCoderChain {
    /// Sets up the standard chain:
    /// known vocabularies (ID 0), fixed namespaces (ID 1), plain UTF-8 (ID 2).
    ///
    /// # Errors
    ///
    /// - The dictionary can not be loaded, or saved if configured to.
    /// - The loaded dictionary is not compatible with the known-vocabulary coder.
    /// - Too many fixed namespaces are configured.
    pub fn initialize(
        config: &CoderConfig,
        store: &mut dyn DictionaryStore,
    ) -> Result<Self, CoderError> {
        let loaded = store.load()?;
        let known =
            KnownVocabularyCoder::initialize(CoderId::KNOWN_VOCABULARY, loaded, registry::known())?;
        if config.save_on_changes && known.newly_registered() > 0 {
            tracing::info!(
                "Saving dictionary with {} new entries",
                known.newly_registered()
            );
            store.save(known.dictionary())?;
        }

        Self::with_coders(vec![
            Box::new(known),
            Box::new(FixedNamespaceCoder::new(
                CoderId::FIXED_NAMESPACE,
                config.fixed_namespaces.clone(),
            )?),
            Box::new(Utf8IriCoder::new(CoderId::UTF8)),
        ])
    }

    /// Builds a chain from custom coders.
    ///
    /// # Errors
    ///
    /// If a coder's ID differs from its position in `coders`.
    pub fn with_coders(coders: Vec<Box<dyn IriCoder>>) -> Result<Self, CoderError> {
        for (position, coder) in coders.iter().enumerate() {
            if usize::from(coder.coder_id().get()) != position {
                return Err(CoderError::MisplacedCoder {
                    position,
                    reported: coder.coder_id(),
                });
            }
        }
        Ok(Self { coders })
    }

    /// # Errors
    ///
    /// If no coder accepts the IRI;
    /// never happens with a chain ending in a [`Utf8IriCoder`].
    pub fn encode(&self, iri: NamedNodeRef<'_>) -> Result<EncodedValue, CoderError> {
        self.coders
            .iter()
            .find_map(|coder| coder.encode(iri))
            .ok_or_else(|| CoderError::NoCoder(iri.as_str().to_owned()))
    }

    /// Encodes each present IRI, keeping the gaps.
    ///
    /// # Errors
    ///
    /// See [`Self::encode`].
    pub fn encode_all(
        &self,
        iris: &[Option<NamedNodeRef<'_>>],
    ) -> Result<Vec<Option<EncodedValue>>, CoderError> {
        iris.iter()
            .map(|iri| iri.map(|iri| self.encode(iri)).transpose())
            .collect()
    }

    /// # Errors
    ///
    /// - The value is not an encoded IRI.
    /// - No coder with the ID from the header exists.
    /// - The coder fails to decode the payload.
    pub fn decode(&self, value: &EncodedValue) -> Result<NamedNode, CoderError> {
        if value.value_type() != ValueType::Iri {
            return Err(CoderError::NotAnIri(value.value_type()));
        }
        let coder_id = value.coder_id();
        self.coders
            .get(usize::from(coder_id.get()))
            .ok_or(CoderError::UnknownCoder(coder_id))?
            .decode(value)
    }
}

impl std::fmt::Debug for IriCoderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IriCoderChain")
            .field("coders", &self.coders.len())
            .finish()
    }
}
