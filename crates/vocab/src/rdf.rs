// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [The RDF Concepts Vocabulary (RDF)](
//! http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! vocabulary.

use crate::{named_node, vocabulary};

pub const NS_BASE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const NS_PREFERRED_PREFIX: &str = "rdf";

named_node!(
    TYPE,
    NS_BASE,
    "type",
    "The subject is an instance of a class."
);

named_node!(
    PROPERTY,
    NS_BASE,
    "Property",
    "The class of RDF properties."
);

named_node!(
    XML_LITERAL,
    NS_BASE,
    "XMLLiteral",
    "The datatype of XML literal values."
);

named_node!(
    SUBJECT,
    NS_BASE,
    "subject",
    "The subject of the subject RDF statement."
);

named_node!(
    PREDICATE,
    NS_BASE,
    "predicate",
    "The predicate of the subject RDF statement."
);

named_node!(
    OBJECT,
    NS_BASE,
    "object",
    "The object of the subject RDF statement."
);

named_node!(
    STATEMENT,
    NS_BASE,
    "Statement",
    "The class of RDF statements."
);

named_node!(
    BAG,
    NS_BASE,
    "Bag",
    "The class of unordered containers."
);

named_node!(
    ALT,
    NS_BASE,
    "Alt",
    "The class of containers of alternatives."
);

named_node!(
    SEQ,
    NS_BASE,
    "Seq",
    "The class of ordered containers."
);

named_node!(
    VALUE,
    NS_BASE,
    "value",
    "Idiomatic property used for structured values."
);

named_node!(
    LI,
    NS_BASE,
    "li",
    "Stands in for the container membership properties `rdf:_1`, `rdf:_2`, ... in RDF/XML."
);

named_node!(
    LIST,
    NS_BASE,
    "List",
    "The class of RDF Lists."
);

named_node!(
    FIRST,
    NS_BASE,
    "first",
    "The first item in the subject RDF list."
);

named_node!(
    REST,
    NS_BASE,
    "rest",
    "The rest of the subject RDF list after the first item."
);

named_node!(
    NIL,
    NS_BASE,
    "nil",
    "The empty list, with no items in it. If the rest of a list is nil then the list has no more items in it."
);

named_node!(
    LANG_STRING,
    NS_BASE,
    "langString",
    "The datatype of language-tagged string values."
);

named_node!(
    HTML,
    NS_BASE,
    "HTML",
    "The datatype of RDF literals storing fragments of HTML content."
);

vocabulary!(
    Rdf,
    "The RDF Concepts Vocabulary",
    [
        TYPE,
        PROPERTY,
        XML_LITERAL,
        SUBJECT,
        PREDICATE,
        OBJECT,
        STATEMENT,
        BAG,
        ALT,
        SEQ,
        VALUE,
        LI,
        LIST,
        FIRST,
        REST,
        NIL,
        LANG_STRING,
        HTML,
    ]
);
