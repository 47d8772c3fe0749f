// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use oxrdf::{NamedNode, NamedNodeRef};

use crate::{CoderError, CoderId, EncodedValue, IriCoder, ValueType};

/// Stores the whole IRI as UTF-8; accepts every IRI.
#[derive(Clone, Copy, Debug)]
pub struct Utf8IriCoder {
    coder_id: CoderId,
}

impl Utf8IriCoder {
    #[must_use]
    pub const fn new(coder_id: CoderId) -> Self {
        Self { coder_id }
    }
}

impl IriCoder for Utf8IriCoder {
    fn coder_id(&self) -> CoderId {
        self.coder_id
    }

    fn encode(&self, iri: NamedNodeRef<'_>) -> Option<EncodedValue> {
        Some(EncodedValue::new(
            self.coder_id,
            ValueType::Iri,
            iri.as_str().as_bytes(),
        ))
    }

    fn decode(&self, value: &EncodedValue) -> Result<NamedNode, CoderError> {
        self.check_owner(value)?;
        let iri = String::from_utf8(value.payload().to_vec())?;
        Ok(NamedNode::new(iri)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_iri_is_the_payload() {
        let coder = Utf8IriCoder::new(CoderId::UTF8);
        let value = coder
            .encode(NamedNodeRef::new_unchecked("http://example.com/a"))
            .unwrap();
        assert_eq!(value.header(), 0b0000_1001);
        assert_eq!(value.payload(), b"http://example.com/a");
        assert_eq!(coder.decode(&value).unwrap().as_str(), "http://example.com/a");
    }

    #[test]
    fn rejects_values_of_other_coders() {
        let coder = Utf8IriCoder::new(CoderId::UTF8);
        let value = EncodedValue::new(CoderId::KNOWN_VOCABULARY, ValueType::Iri, b"x");
        assert!(matches!(
            coder.decode(&value),
            Err(CoderError::WrongCoder { .. })
        ));
        let literal = EncodedValue::new(CoderId::UTF8, ValueType::Literal, b"x");
        assert!(matches!(
            coder.decode(&literal),
            Err(CoderError::NotAnIri(ValueType::Literal))
        ));
    }

    #[test]
    fn invalid_utf8() {
        let coder = Utf8IriCoder::new(CoderId::UTF8);
        let value = EncodedValue::new(CoderId::UTF8, ValueType::Iri, &[0xff, 0xfe]);
        assert!(matches!(
            coder.decode(&value),
            Err(CoderError::InvalidUtf8(_))
        ));
    }
}
