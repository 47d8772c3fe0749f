// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io;

use thiserror::Error;

use crate::header::{CoderId, EncodedValue, ValueType};

#[derive(Error, Debug)]
pub enum CoderError {
    #[error("Coder ID {0} is out of range; the highest supported one is {max}", max = CoderId::MAX)]
    InvalidCoderId(u8),
    #[error("An encoded value requires at least the header byte")]
    EmptyValue,
    #[error("The encoded value {0} ends before its payload is complete")]
    Truncated(EncodedValue),
    #[error("Expected an encoded IRI, got a value of type {0:?}")]
    NotAnIri(ValueType),
    #[error("No coder is registered under ID {0}")]
    UnknownCoder(CoderId),
    #[error("The coder at position {position} reports ID {reported}")]
    MisplacedCoder { position: usize, reported: CoderId },
    #[error("Coder {expected} was asked to decode {value}, which belongs to coder {}", .value.coder_id())]
    WrongCoder {
        expected: CoderId,
        value: EncodedValue,
    },
    #[error("The value {0} is not in the dictionary")]
    UnknownHash(EncodedValue),
    #[error("The dictionary is full; it holds at most {0} entries")]
    DictionaryFull(u32),
    #[error("The dictionary entry <{iri}> -> {value} was not created by coder {coder_id}")]
    ForeignEntry {
        iri: String,
        value: EncodedValue,
        coder_id: CoderId,
    },
    #[error("The value {value} is mapped to both <{existing}> and <{iri}>")]
    DuplicateHash {
        value: EncodedValue,
        existing: String,
        iri: String,
    },
    #[error("Namespace index {0} is not configured")]
    UnknownNamespace(u8),
    #[error("At most {max} fixed namespaces are supported, got {0}", max = usize::from(u8::MAX) + 1)]
    TooManyNamespaces(usize),
    #[error("No coder accepted <{0}>")]
    NoCoder(String),
    #[error("Encoded IRI is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Decoded an invalid IRI: {0}")]
    InvalidIri(#[from] oxrdf::IriParseError),
    #[error("Invalid hex representation of an encoded value: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
