// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [The RDF Schema vocabulary (RDFS)](
//! http://www.w3.org/2000/01/rdf-schema#)
//! vocabulary.

use crate::{named_node, vocabulary};

pub const NS_BASE: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const NS_PREFERRED_PREFIX: &str = "rdfs";

named_node!(
    RESOURCE,
    NS_BASE,
    "Resource",
    "The class resource, everything."
);

named_node!(
    LITERAL,
    NS_BASE,
    "Literal",
    "The class of literal values, eg. textual strings and integers."
);

named_node!(
    CLASS,
    NS_BASE,
    "Class",
    "The class of classes."
);

named_node!(
    SUB_CLASS_OF,
    NS_BASE,
    "subClassOf",
    "The subject is a subclass of a class."
);

named_node!(
    SUB_PROPERTY_OF,
    NS_BASE,
    "subPropertyOf",
    "The subject is a subproperty of a property."
);

named_node!(
    DOMAIN,
    NS_BASE,
    "domain",
    "A domain of the subject property."
);

named_node!(
    RANGE,
    NS_BASE,
    "range",
    "A range of the subject property."
);

named_node!(
    COMMENT,
    NS_BASE,
    "comment",
    "A description of the subject resource."
);

named_node!(
    LABEL,
    NS_BASE,
    "label",
    "A human-readable name for the subject."
);

named_node!(
    DATATYPE,
    NS_BASE,
    "Datatype",
    "The class of RDF datatypes."
);

named_node!(
    CONTAINER,
    NS_BASE,
    "Container",
    "The class of RDF containers."
);

named_node!(
    MEMBER,
    NS_BASE,
    "member",
    "A member of the subject resource."
);

named_node!(
    IS_DEFINED_BY,
    NS_BASE,
    "isDefinedBy",
    "The defininition of the subject resource."
);

named_node!(
    SEE_ALSO,
    NS_BASE,
    "seeAlso",
    "Further information about the subject resource."
);

named_node!(
    CONTAINER_MEMBERSHIP_PROPERTY,
    NS_BASE,
    "ContainerMembershipProperty",
    "The class of container membership properties, `rdf:_1`, `rdf:_2`, ..., all of which are sub-properties of `member`."
);

vocabulary!(
    Rdfs,
    "The RDF Schema vocabulary",
    [
        RESOURCE,
        LITERAL,
        CLASS,
        SUB_CLASS_OF,
        SUB_PROPERTY_OF,
        DOMAIN,
        RANGE,
        COMMENT,
        LABEL,
        DATATYPE,
        CONTAINER,
        MEMBER,
        IS_DEFINED_BY,
        SEE_ALSO,
        CONTAINER_MEMBERSHIP_PROPERTY,
    ]
);
