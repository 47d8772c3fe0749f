// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [SKOS Vocabulary (SKOS)](
//! http://www.w3.org/2004/02/skos/core#)
//! vocabulary.

use crate::{named_node, vocabulary};

pub const NS_BASE: &str = "http://www.w3.org/2004/02/skos/core#";
pub const NS_PREFERRED_PREFIX: &str = "skos";

named_node!(
    ALT_LABEL,
    NS_BASE,
    "altLabel",
    "An alternative lexical label for a resource."
);

named_node!(
    BROADER,
    NS_BASE,
    "broader",
    "Relates a concept to a concept that is more general in meaning."
);

named_node!(
    BROADER_TRANSITIVE,
    NS_BASE,
    "broaderTransitive",
    "Is used to infer transitive closure of skos:broader."
);

named_node!(
    BROAD_MATCH,
    NS_BASE,
    "broadMatch",
    "Used to state a hierarchical mapping link between two conceptual resources in different concept schemes."
);

named_node!(
    CHANGE_NOTE,
    NS_BASE,
    "changeNote",
    "A note about a modification to a concept."
);

named_node!(
    CLOSE_MATCH,
    NS_BASE,
    "closeMatch",
    "Used to link two concepts that are sufficiently similar that they can be used interchangeably in some information retrieval applications."
);

named_node!(
    COLLECTION,
    NS_BASE,
    "Collection",
    "A meaningful collection of concepts."
);

named_node!(
    CONCEPT,
    NS_BASE,
    "Concept",
    "An idea or notion; a unit of thought."
);

named_node!(
    CONCEPT_SCHEME,
    NS_BASE,
    "ConceptScheme",
    "A set of concepts, optionally including statements about semantic relationships between those concepts."
);

named_node!(
    DEFINITION,
    NS_BASE,
    "definition",
    "A statement or formal explanation of the meaning of a concept."
);

named_node!(
    EDITORIAL_NOTE,
    NS_BASE,
    "editorialNote",
    "A note for an editor, translator or maintainer of the vocabulary."
);

named_node!(
    EXACT_MATCH,
    NS_BASE,
    "exactMatch",
    "Used to link two concepts, indicating a high degree of confidence that the concepts can be used interchangeably across a wide range of information retrieval applications."
);

named_node!(
    EXAMPLE,
    NS_BASE,
    "example",
    "An example of the use of a concept."
);

named_node!(
    HAS_TOP_CONCEPT,
    NS_BASE,
    "hasTopConcept",
    "Relates, by convention, a concept scheme to a concept which is topmost in the broader/narrower concept hierarchies for that scheme."
);

named_node!(
    HIDDEN_LABEL,
    NS_BASE,
    "hiddenLabel",
    "A lexical label for a resource that should be hidden when generating visual displays of the resource, but should still be accessible to free text search operations."
);

named_node!(
    HISTORY_NOTE,
    NS_BASE,
    "historyNote",
    "A note about the past state/use/meaning of a concept."
);

named_node!(
    IN_SCHEME,
    NS_BASE,
    "inScheme",
    "Relates a resource (for example a concept) to a concept scheme in which it is included."
);

named_node!(
    MAPPING_RELATION,
    NS_BASE,
    "mappingRelation",
    "Relates two concepts coming, by convention, from different schemes, and that have comparable meanings."
);

named_node!(
    MEMBER,
    NS_BASE,
    "member",
    "Relates a collection to one of its members."
);

named_node!(
    MEMBER_LIST,
    NS_BASE,
    "memberList",
    "Relates an ordered collection to the RDF list containing its members."
);

named_node!(
    NARROWER,
    NS_BASE,
    "narrower",
    "Relates a concept to a concept that is more specific in meaning."
);

named_node!(
    NARROWER_TRANSITIVE,
    NS_BASE,
    "narrowerTransitive",
    "Is used to infer transitive closure of skos:narrower."
);

named_node!(
    NARROW_MATCH,
    NS_BASE,
    "narrowMatch",
    "Used to state a hierarchical mapping link between two conceptual resources in different concept schemes."
);

named_node!(
    NOTATION,
    NS_BASE,
    "notation",
    r#"A notation, also known as classification code, is a string of characters such as "T58.5" or "303.4833" used to uniquely identify a concept within the scope of a given concept scheme."#
);

named_node!(
    NOTE,
    NS_BASE,
    "note",
    "A general note, for any purpose."
);

named_node!(
    ORDERED_COLLECTION,
    NS_BASE,
    "OrderedCollection",
    "An ordered collection of concepts, where both the grouping and the ordering are meaningful."
);

named_node!(
    PREF_LABEL,
    NS_BASE,
    "prefLabel",
    "The preferred and emphasized lexical label for a resource, in a given language."
);

named_node!(
    RELATED,
    NS_BASE,
    "related",
    "Relates a concept to a concept with which there is an associative semantic relationship."
);

named_node!(
    RELATED_MATCH,
    NS_BASE,
    "relatedMatch",
    "Used to state an associative mapping link between two conceptual resources in different concept schemes."
);

named_node!(
    SCOPE_NOTE,
    NS_BASE,
    "scopeNote",
    "A note that helps to clarify the meaning and/or the use of a concept."
);

named_node!(
    SEMANTIC_RELATION,
    NS_BASE,
    "semanticRelation",
    "Links a concept to a concept related by meaning."
);

named_node!(
    TOP_CONCEPT_OF,
    NS_BASE,
    "topConceptOf",
    "Relates a concept to the concept scheme that it is a top level concept of."
);

vocabulary!(
    Skos,
    "SKOS Vocabulary",
    [
        ALT_LABEL,
        BROADER,
        BROADER_TRANSITIVE,
        BROAD_MATCH,
        CHANGE_NOTE,
        CLOSE_MATCH,
        COLLECTION,
        CONCEPT,
        CONCEPT_SCHEME,
        DEFINITION,
        EDITORIAL_NOTE,
        EXACT_MATCH,
        EXAMPLE,
        HAS_TOP_CONCEPT,
        HIDDEN_LABEL,
        HISTORY_NOTE,
        IN_SCHEME,
        MAPPING_RELATION,
        MEMBER,
        MEMBER_LIST,
        NARROWER,
        NARROWER_TRANSITIVE,
        NARROW_MATCH,
        NOTATION,
        NOTE,
        ORDERED_COLLECTION,
        PREF_LABEL,
        RELATED,
        RELATED_MATCH,
        SCOPE_NOTE,
        SEMANTIC_RELATION,
        TOP_CONCEPT_OF,
    ]
);
