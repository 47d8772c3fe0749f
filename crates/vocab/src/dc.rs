// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [Dublin Core Metadata Element Set, Version 1.1 (DC)](
//! http://purl.org/dc/elements/1.1/)
//! vocabulary.

use crate::{named_node, vocabulary};

pub const NS_BASE: &str = "http://purl.org/dc/elements/1.1/";
pub const NS_PREFERRED_PREFIX: &str = "dc";

named_node!(
    CONTRIBUTOR,
    NS_BASE,
    "contributor",
    "An entity responsible for making contributions to the resource."
);

named_node!(
    COVERAGE,
    NS_BASE,
    "coverage",
    "The spatial or temporal topic of the resource, spatial applicability of the resource, or jurisdiction under which the resource is relevant."
);

named_node!(
    CREATOR,
    NS_BASE,
    "creator",
    "An entity primarily responsible for making the resource."
);

named_node!(
    DATE,
    NS_BASE,
    "date",
    "A point or period of time associated with an event in the lifecycle of the resource."
);

named_node!(
    DESCRIPTION,
    NS_BASE,
    "description",
    "An account of the resource."
);

named_node!(
    FORMAT,
    NS_BASE,
    "format",
    "The file format, physical medium, or dimensions of the resource."
);

named_node!(
    IDENTIFIER,
    NS_BASE,
    "identifier",
    "An unambiguous reference to the resource within a given context."
);

named_node!(
    LANGUAGE,
    NS_BASE,
    "language",
    "A language of the resource."
);

named_node!(
    PUBLISHER,
    NS_BASE,
    "publisher",
    "An entity responsible for making the resource available."
);

named_node!(
    RELATION,
    NS_BASE,
    "relation",
    "A related resource."
);

named_node!(
    RIGHTS,
    NS_BASE,
    "rights",
    "Information about rights held in and over the resource."
);

named_node!(
    SOURCE,
    NS_BASE,
    "source",
    "A related resource from which the described resource is derived."
);

named_node!(
    SUBJECT,
    NS_BASE,
    "subject",
    "The topic of the resource."
);

named_node!(
    TITLE,
    NS_BASE,
    "title",
    "A name given to the resource."
);

named_node!(
    TYPE,
    NS_BASE,
    "type",
    "The nature or genre of the resource."
);

vocabulary!(
    Dc,
    "Dublin Core Metadata Element Set, Version 1.1",
    [
        CONTRIBUTOR,
        COVERAGE,
        CREATOR,
        DATE,
        DESCRIPTION,
        FORMAT,
        IDENTIFIER,
        LANGUAGE,
        PUBLISHER,
        RELATION,
        RIGHTS,
        SOURCE,
        SUBJECT,
        TITLE,
        TYPE,
    ]
);
