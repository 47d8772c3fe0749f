// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use oxrdf::{NamedNode, NamedNodeRef};
use rdfvocab_iri::{split_iri, Namespace};

use crate::{CoderError, CoderId, EncodedValue, IriCoder, ValueType};

/// Encodes IRIs within one of up to 256 configured namespaces
/// as the namespace index followed by the UTF-8 local name.
#[derive(Clone, Debug)]
pub struct FixedNamespaceCoder {
    coder_id: CoderId,
    namespaces: Vec<Namespace>,
    index: HashMap<String, u8>,
}

impl FixedNamespaceCoder {
    /// The position of a namespace in `namespaces` is its index in the payload,
    /// so the list may only ever be appended to.
    ///
    /// # Errors
    ///
    /// If there are more than 256 namespaces.
    pub fn new(coder_id: CoderId, namespaces: Vec<Namespace>) -> Result<Self, CoderError> {
        let mut index = HashMap::with_capacity(namespaces.len());
        for (pos, namespace) in namespaces.iter().enumerate() {
            let namespace_id =
                u8::try_from(pos).map_err(|_| CoderError::TooManyNamespaces(namespaces.len()))?;
            index
                .entry(namespace.as_str().to_owned())
                .or_insert(namespace_id);
        }
        Ok(Self {
            coder_id,
            namespaces,
            index,
        })
    }

    #[must_use]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }
}

impl IriCoder for FixedNamespaceCoder {
    fn coder_id(&self) -> CoderId {
        self.coder_id
    }

    fn encode(&self, iri: NamedNodeRef<'_>) -> Option<EncodedValue> {
        let (namespace, local_name) = split_iri(iri.as_str());
        let namespace_id = *self.index.get(namespace)?;
        let mut payload = Vec::with_capacity(1 + local_name.len());
        payload.push(namespace_id);
        payload.extend_from_slice(local_name.as_bytes());
        Some(EncodedValue::new(self.coder_id, ValueType::Iri, &payload))
    }

    fn decode(&self, value: &EncodedValue) -> Result<NamedNode, CoderError> {
        self.check_owner(value)?;
        let (namespace_id, local_name) = value
            .payload()
            .split_first()
            .ok_or_else(|| CoderError::Truncated(value.clone()))?;
        let namespace = self
            .namespaces
            .get(usize::from(*namespace_id))
            .ok_or(CoderError::UnknownNamespace(*namespace_id))?;
        let local_name = String::from_utf8(local_name.to_vec())?;
        Ok(NamedNode::new(format!("{}{local_name}", namespace.as_str()))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coder() -> FixedNamespaceCoder {
        FixedNamespaceCoder::new(
            CoderId::FIXED_NAMESPACE,
            vec![
                Namespace::new("org".to_owned(), "urn:example:org:".to_owned()).unwrap(),
                Namespace::new("person".to_owned(), "http://example.com/person/".to_owned())
                    .unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn encodes_namespace_index_and_local_name() {
        let value = coder()
            .encode(NamedNodeRef::new_unchecked("http://example.com/person/ada"))
            .unwrap();
        assert_eq!(value.as_bytes(), &[0b0000_0101, 1, b'a', b'd', b'a']);
        assert_eq!(
            coder().decode(&value).unwrap().as_str(),
            "http://example.com/person/ada"
        );
    }

    #[test]
    fn only_exact_namespaces_match() {
        let coder = coder();
        assert!(coder
            .encode(NamedNodeRef::new_unchecked("urn:example:org:acme"))
            .is_some());
        assert!(coder
            .encode(NamedNodeRef::new_unchecked("http://example.com/person/sub/ada"))
            .is_none());
        assert!(coder
            .encode(NamedNodeRef::new_unchecked("http://example.com/other"))
            .is_none());
    }

    #[test]
    fn unknown_namespace_index() {
        let value = EncodedValue::new(CoderId::FIXED_NAMESPACE, ValueType::Iri, &[9, b'x']);
        assert!(matches!(
            coder().decode(&value),
            Err(CoderError::UnknownNamespace(9))
        ));
        let truncated = EncodedValue::new(CoderId::FIXED_NAMESPACE, ValueType::Iri, &[]);
        assert!(matches!(
            coder().decode(&truncated),
            Err(CoderError::Truncated(_))
        ));
    }

    #[test]
    fn at_most_256_namespaces() {
        let namespaces: Vec<Namespace> = (0..257)
            .map(|idx| {
                Namespace::new(format!("ns{idx}"), format!("http://example.com/{idx}/")).unwrap()
            })
            .collect();
        assert!(matches!(
            FixedNamespaceCoder::new(CoderId::FIXED_NAMESPACE, namespaces),
            Err(CoderError::TooManyNamespaces(257))
        ));
    }
}
