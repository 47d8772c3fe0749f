// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Layout of encoded RDF values.
//!
//! Byte 0 of every encoded value is a header:
//!
//! ```text
//!  bit  7   6 5 4 3 2   1 0
//!      [0] [coder id] [type]
//! ```
//!
//! The remaining bytes are the payload, whose format is up to the coder.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::CoderError;

pub const CODER_METADATA_OFFSET: usize = 1;

const MASK_VALUE_TYPE: u8 = 0b0000_0011;
const MASK_CODER_ID: u8 = 0b0111_1100;
const SHIFT_CODER_ID: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueType {
    LangString = 0,
    Iri = 1,
    BlankNode = 2,
    Literal = 3,
}

impl ValueType {
    #[must_use]
    pub const fn from_header(header: u8) -> Self {
        match header & MASK_VALUE_TYPE {
            0 => Self::LangString,
            1 => Self::Iri,
            2 => Self::BlankNode,
            _ => Self::Literal,
        }
    }
}

/// Identifies one coder within a chain of coders for the same value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoderId(u8);

impl CoderId {
    pub const MAX: u8 = MASK_CODER_ID >> SHIFT_CODER_ID;

    /// Position of [`KnownVocabularyCoder`](crate::KnownVocabularyCoder) in an [`IriCoderChain`](crate::IriCoderChain).
    pub const KNOWN_VOCABULARY: Self = Self(0);
    /// Position of [`FixedNamespaceCoder`](crate::FixedNamespaceCoder) in an [`IriCoderChain`](crate::IriCoderChain).
    pub const FIXED_NAMESPACE: Self = Self(1);
    /// Position of [`Utf8IriCoder`](crate::Utf8IriCoder) in an [`IriCoderChain`](crate::IriCoderChain).
    pub const UTF8: Self = Self(2);

    /// # Errors
    ///
    /// If `id` does not fit into the 5 header bits.
    pub fn new(id: u8) -> Result<Self, CoderError> {
        if id > Self::MAX {
            Err(CoderError::InvalidCoderId(id))
        } else {
            Ok(Self(id))
        }
    }

    #[must_use]
    pub const fn from_header(header: u8) -> Self {
        Self((header & MASK_CODER_ID) >> SHIFT_CODER_ID)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn header(self, value_type: ValueType) -> u8 {
        (self.0 << SHIFT_CODER_ID) | value_type as u8
    }
}

impl fmt::Display for CoderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The binary form of an RDF value, as stored.
/// Never empty; see the [module docs](self) for the layout.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedValue(Vec<u8>);

impl EncodedValue {
    #[must_use]
    pub fn new(coder_id: CoderId, value_type: ValueType, payload: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(CODER_METADATA_OFFSET + payload.len());
        bytes.push(coder_id.header(value_type));
        bytes.extend_from_slice(payload);
        Self(bytes)
    }

    /// Wraps raw bytes, as read from storage.
    ///
    /// # Errors
    ///
    /// If `bytes` is empty.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, CoderError> {
        if bytes.is_empty() {
            return Err(CoderError::EmptyValue);
        }
        Ok(Self(bytes))
    }

    #[must_use]
    pub fn header(&self) -> u8 {
        self.0.first().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn value_type(&self) -> ValueType {
        ValueType::from_header(self.header())
    }

    #[must_use]
    pub fn coder_id(&self) -> CoderId {
        CoderId::from_header(self.header())
    }

    #[must_use]
    pub fn payload(&self) -> &[u8] {
        self.0.get(CODER_METADATA_OFFSET..).unwrap_or_default()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedValue({self})")
    }
}

impl FromStr for EncodedValue {
    type Err = CoderError;

    fn from_str(hex_str: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(hex::decode(hex_str)?)
    }
}

impl Serialize for EncodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EncodedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_bits() {
        let coder_id = CoderId::new(2).unwrap();
        let value = EncodedValue::new(coder_id, ValueType::Iri, &[0, 0, 1]);
        assert_eq!(value.as_bytes(), &[0b0000_1001, 0, 0, 1]);
        assert_eq!(value.coder_id(), coder_id);
        assert_eq!(value.value_type(), ValueType::Iri);
        assert_eq!(value.payload(), &[0, 0, 1]);
    }

    #[test]
    fn largest_coder_id() {
        let coder_id = CoderId::new(CoderId::MAX).unwrap();
        assert_eq!(coder_id.header(ValueType::Literal), 0b0111_1111);
        assert!(matches!(
            CoderId::new(CoderId::MAX + 1),
            Err(CoderError::InvalidCoderId(32))
        ));
    }

    #[test]
    fn empty_bytes_are_rejected() {
        assert!(matches!(
            EncodedValue::from_bytes(Vec::new()),
            Err(CoderError::EmptyValue)
        ));
    }

    #[test]
    fn hex_form() {
        let value: EncodedValue = "0100002a".parse().unwrap();
        assert_eq!(value.payload(), &[0, 0, 42]);
        assert_eq!(value.to_string(), "0100002a");
        assert_eq!(format!("{value:?}"), "EncodedValue(0100002a)");
        assert!("zz".parse::<EncodedValue>().is_err());
        assert!("".parse::<EncodedValue>().is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let value = EncodedValue::new(CoderId::new(0).unwrap(), ValueType::Iri, &[0, 1, 0]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""01000100""#);
        let back: EncodedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
