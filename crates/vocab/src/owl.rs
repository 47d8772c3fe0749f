// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [The OWL 2 Schema vocabulary (OWL 2)](
//! http://www.w3.org/2002/07/owl#)
//! vocabulary.

use crate::{named_node, vocabulary};

pub const NS_BASE: &str = "http://www.w3.org/2002/07/owl#";
pub const NS_PREFERRED_PREFIX: &str = "owl";

named_node!(
    ALL_DIFFERENT,
    NS_BASE,
    "AllDifferent",
    "The class of collections of pairwise different individuals."
);

named_node!(
    ALL_DISJOINT_CLASSES,
    NS_BASE,
    "AllDisjointClasses",
    "The class of collections of pairwise disjoint classes."
);

named_node!(
    ALL_DISJOINT_PROPERTIES,
    NS_BASE,
    "AllDisjointProperties",
    "The class of collections of pairwise disjoint properties."
);

named_node!(
    ALL_VALUES_FROM,
    NS_BASE,
    "allValuesFrom",
    "The property that determines the class that a universal property restriction refers to."
);

named_node!(
    ANNOTATED_PROPERTY,
    NS_BASE,
    "annotatedProperty",
    "The property that determines the predicate of an annotated axiom or annotated annotation."
);

named_node!(
    ANNOTATED_SOURCE,
    NS_BASE,
    "annotatedSource",
    "The property that determines the subject of an annotated axiom or annotated annotation."
);

named_node!(
    ANNOTATED_TARGET,
    NS_BASE,
    "annotatedTarget",
    "The property that determines the object of an annotated axiom or annotated annotation."
);

named_node!(
    ANNOTATION,
    NS_BASE,
    "Annotation",
    "The class of annotated annotations for which the RDF serialization consists of an annotated subject, predicate and object."
);

named_node!(
    ANNOTATION_PROPERTY,
    NS_BASE,
    "AnnotationProperty",
    "The class of annotation properties."
);

named_node!(
    ASSERTION_PROPERTY,
    NS_BASE,
    "assertionProperty",
    "The property that determines the predicate of a negative property assertion."
);

named_node!(
    ASYMMETRIC_PROPERTY,
    NS_BASE,
    "AsymmetricProperty",
    "The class of asymmetric properties."
);

named_node!(
    AXIOM,
    NS_BASE,
    "Axiom",
    "The class of annotated axioms for which the RDF serialization consists of an annotated subject, predicate and object."
);

named_node!(
    BACKWARD_COMPATIBLE_WITH,
    NS_BASE,
    "backwardCompatibleWith",
    "The annotation property that indicates that a given ontology is backward compatible with another ontology."
);

named_node!(
    BOTTOM_DATA_PROPERTY,
    NS_BASE,
    "bottomDataProperty",
    "The data property that does not relate any individual to any data value."
);

named_node!(
    BOTTOM_OBJECT_PROPERTY,
    NS_BASE,
    "bottomObjectProperty",
    "The object property that does not relate any two individuals."
);

named_node!(
    CARDINALITY,
    NS_BASE,
    "cardinality",
    "The property that determines the cardinality of an exact cardinality restriction."
);

named_node!(
    CLASS,
    NS_BASE,
    "Class",
    "The class of OWL classes."
);

named_node!(
    COMPLEMENT_OF,
    NS_BASE,
    "complementOf",
    "The property that determines that a given class is the complement of another class."
);

named_node!(
    DATA_RANGE,
    NS_BASE,
    "DataRange",
    "The class of OWL data ranges, which are special kinds of datatypes. Note: The use of the IRI owl:DataRange has been deprecated as of OWL 2. The IRI rdfs:Datatype SHOULD be used instead."
);

named_node!(
    DATATYPE_COMPLEMENT_OF,
    NS_BASE,
    "datatypeComplementOf",
    "The property that determines that a given data range is the complement of another data range with respect to the data domain."
);

named_node!(
    DATATYPE_PROPERTY,
    NS_BASE,
    "DatatypeProperty",
    "The class of data properties."
);

named_node!(
    DEPRECATED,
    NS_BASE,
    "deprecated",
    "The annotation property that indicates that a given entity has been deprecated."
);

named_node!(
    DEPRECATED_CLASS,
    NS_BASE,
    "DeprecatedClass",
    "The class of deprecated classes."
);

named_node!(
    DEPRECATED_PROPERTY,
    NS_BASE,
    "DeprecatedProperty",
    "The class of deprecated properties."
);

named_node!(
    DIFFERENT_FROM,
    NS_BASE,
    "differentFrom",
    "The property that determines that two given individuals are different."
);

named_node!(
    DISJOINT_UNION_OF,
    NS_BASE,
    "disjointUnionOf",
    "The property that determines that a given class is equivalent to the disjoint union of a collection of other classes."
);

named_node!(
    DISJOINT_WITH,
    NS_BASE,
    "disjointWith",
    "The property that determines that two given classes are disjoint."
);

named_node!(
    DISTINCT_MEMBERS,
    NS_BASE,
    "distinctMembers",
    "The property that determines the collection of pairwise different individuals in a owl:AllDifferent axiom."
);

named_node!(
    EQUIVALENT_CLASS,
    NS_BASE,
    "equivalentClass",
    "The property that determines that two given classes are equivalent, and that is used to specify datatype definitions."
);

named_node!(
    EQUIVALENT_PROPERTY,
    NS_BASE,
    "equivalentProperty",
    "The property that determines that two given properties are equivalent."
);

named_node!(
    FUNCTIONAL_PROPERTY,
    NS_BASE,
    "FunctionalProperty",
    "The class of functional properties."
);

named_node!(
    HAS_KEY,
    NS_BASE,
    "hasKey",
    "The property that determines the collection of properties that jointly build a key."
);

named_node!(
    HAS_SELF,
    NS_BASE,
    "hasSelf",
    "The property that determines the property that a self restriction refers to."
);

named_node!(
    HAS_VALUE,
    NS_BASE,
    "hasValue",
    "The property that determines the individual that a has-value restriction refers to."
);

named_node!(
    IMPORTS,
    NS_BASE,
    "imports",
    "The property that is used for importing other ontologies into a given ontology."
);

named_node!(
    INCOMPATIBLE_WITH,
    NS_BASE,
    "incompatibleWith",
    "The annotation property that indicates that a given ontology is incompatible with another ontology."
);

named_node!(
    INTERSECTION_OF,
    NS_BASE,
    "intersectionOf",
    "The property that determines the collection of classes or data ranges that build an intersection."
);

named_node!(
    INVERSE_FUNCTIONAL_PROPERTY,
    NS_BASE,
    "InverseFunctionalProperty",
    "The class of inverse-functional properties."
);

named_node!(
    INVERSE_OF,
    NS_BASE,
    "inverseOf",
    "The property that determines that two given properties are inverse."
);

named_node!(
    IRREFLEXIVE_PROPERTY,
    NS_BASE,
    "IrreflexiveProperty",
    "The class of irreflexive properties."
);

named_node!(
    MAX_CARDINALITY,
    NS_BASE,
    "maxCardinality",
    "The property that determines the cardinality of a maximum cardinality restriction."
);

named_node!(
    MAX_QUALIFIED_CARDINALITY,
    NS_BASE,
    "maxQualifiedCardinality",
    "The property that determines the cardinality of a maximum qualified cardinality restriction."
);

named_node!(
    MEMBERS,
    NS_BASE,
    "members",
    "The property that determines the collection of members in either a owl:AllDifferent, owl:AllDisjointClasses or owl:AllDisjointProperties axiom."
);

named_node!(
    MIN_CARDINALITY,
    NS_BASE,
    "minCardinality",
    "The property that determines the cardinality of a minimum cardinality restriction."
);

named_node!(
    MIN_QUALIFIED_CARDINALITY,
    NS_BASE,
    "minQualifiedCardinality",
    "The property that determines the cardinality of a minimum qualified cardinality restriction."
);

named_node!(
    NAMED_INDIVIDUAL,
    NS_BASE,
    "NamedIndividual",
    "The class of named individuals."
);

named_node!(
    NEGATIVE_PROPERTY_ASSERTION,
    NS_BASE,
    "NegativePropertyAssertion",
    "The class of negative property assertions."
);

named_node!(
    NOTHING,
    NS_BASE,
    "Nothing",
    "This is the empty class."
);

named_node!(
    OBJECT_PROPERTY,
    NS_BASE,
    "ObjectProperty",
    "The class of object properties."
);

named_node!(
    ON_CLASS,
    NS_BASE,
    "onClass",
    "The property that determines the class that a qualified object cardinality restriction refers to."
);

named_node!(
    ON_DATA_RANGE,
    NS_BASE,
    "onDataRange",
    "The property that determines the data range that a qualified data cardinality restriction refers to."
);

named_node!(
    ON_DATATYPE,
    NS_BASE,
    "onDatatype",
    "The property that determines the datatype that a datatype restriction refers to."
);

named_node!(
    ONE_OF,
    NS_BASE,
    "oneOf",
    "The property that determines the collection of individuals or data values that build an enumeration."
);

named_node!(
    ON_PROPERTIES,
    NS_BASE,
    "onProperties",
    "The property that determines the n-tuple of properties that a property restriction on an n-ary data range refers to."
);

named_node!(
    ON_PROPERTY,
    NS_BASE,
    "onProperty",
    "The property that determines the property that a property restriction refers to."
);

named_node!(
    ONTOLOGY,
    NS_BASE,
    "Ontology",
    "The class of ontologies."
);

named_node!(
    ONTOLOGY_PROPERTY,
    NS_BASE,
    "OntologyProperty",
    "The class of ontology properties."
);

named_node!(
    PRIOR_VERSION,
    NS_BASE,
    "priorVersion",
    "The annotation property that indicates the predecessor ontology of a given ontology."
);

named_node!(
    PROPERTY_CHAIN_AXIOM,
    NS_BASE,
    "propertyChainAxiom",
    "The property that determines the n-tuple of properties that build a sub property chain of a given property."
);

named_node!(
    PROPERTY_DISJOINT_WITH,
    NS_BASE,
    "propertyDisjointWith",
    "The property that determines that two given properties are disjoint."
);

named_node!(
    QUALIFIED_CARDINALITY,
    NS_BASE,
    "qualifiedCardinality",
    "The property that determines the cardinality of an exact qualified cardinality restriction."
);

named_node!(
    REFLEXIVE_PROPERTY,
    NS_BASE,
    "ReflexiveProperty",
    "The class of reflexive properties."
);

named_node!(
    RESTRICTION,
    NS_BASE,
    "Restriction",
    "The class of property restrictions."
);

named_node!(
    SAME_AS,
    NS_BASE,
    "sameAs",
    "The property that determines that two given individuals are equal."
);

named_node!(
    SOME_VALUES_FROM,
    NS_BASE,
    "someValuesFrom",
    "The property that determines the class that an existential property restriction refers to."
);

named_node!(
    SOURCE_INDIVIDUAL,
    NS_BASE,
    "sourceIndividual",
    "The property that determines the subject of a negative property assertion."
);

named_node!(
    SYMMETRIC_PROPERTY,
    NS_BASE,
    "SymmetricProperty",
    "The class of symmetric properties."
);

named_node!(
    TARGET_INDIVIDUAL,
    NS_BASE,
    "targetIndividual",
    "The property that determines the object of a negative object property assertion."
);

named_node!(
    TARGET_VALUE,
    NS_BASE,
    "targetValue",
    "The property that determines the value of a negative data property assertion."
);

named_node!(
    THING,
    NS_BASE,
    "Thing",
    "The class of OWL individuals."
);

named_node!(
    TOP_DATA_PROPERTY,
    NS_BASE,
    "topDataProperty",
    "The data property that relates every individual to every data value."
);

named_node!(
    TOP_OBJECT_PROPERTY,
    NS_BASE,
    "topObjectProperty",
    "The object property that relates every two individuals."
);

named_node!(
    TRANSITIVE_PROPERTY,
    NS_BASE,
    "TransitiveProperty",
    "The class of transitive properties."
);

named_node!(
    UNION_OF,
    NS_BASE,
    "unionOf",
    "The property that determines the collection of classes or data ranges that build a union."
);

named_node!(
    VERSION_INFO,
    NS_BASE,
    "versionInfo",
    "The annotation property that provides version information for an ontology or another OWL construct."
);

named_node!(
    VERSION_IRI,
    NS_BASE,
    "versionIRI",
    "The property that identifies the version IRI of an ontology."
);

named_node!(
    WITH_RESTRICTIONS,
    NS_BASE,
    "withRestrictions",
    "The property that determines the collection of facet-value pairs that define a datatype restriction."
);

vocabulary!(
    Owl,
    "The OWL 2 Schema vocabulary",
    [
        ALL_DIFFERENT,
        ALL_DISJOINT_CLASSES,
        ALL_DISJOINT_PROPERTIES,
        ALL_VALUES_FROM,
        ANNOTATED_PROPERTY,
        ANNOTATED_SOURCE,
        ANNOTATED_TARGET,
        ANNOTATION,
        ANNOTATION_PROPERTY,
        ASSERTION_PROPERTY,
        ASYMMETRIC_PROPERTY,
        AXIOM,
        BACKWARD_COMPATIBLE_WITH,
        BOTTOM_DATA_PROPERTY,
        BOTTOM_OBJECT_PROPERTY,
        CARDINALITY,
        CLASS,
        COMPLEMENT_OF,
        DATA_RANGE,
        DATATYPE_COMPLEMENT_OF,
        DATATYPE_PROPERTY,
        DEPRECATED,
        DEPRECATED_CLASS,
        DEPRECATED_PROPERTY,
        DIFFERENT_FROM,
        DISJOINT_UNION_OF,
        DISJOINT_WITH,
        DISTINCT_MEMBERS,
        EQUIVALENT_CLASS,
        EQUIVALENT_PROPERTY,
        FUNCTIONAL_PROPERTY,
        HAS_KEY,
        HAS_SELF,
        HAS_VALUE,
        IMPORTS,
        INCOMPATIBLE_WITH,
        INTERSECTION_OF,
        INVERSE_FUNCTIONAL_PROPERTY,
        INVERSE_OF,
        IRREFLEXIVE_PROPERTY,
        MAX_CARDINALITY,
        MAX_QUALIFIED_CARDINALITY,
        MEMBERS,
        MIN_CARDINALITY,
        MIN_QUALIFIED_CARDINALITY,
        NAMED_INDIVIDUAL,
        NEGATIVE_PROPERTY_ASSERTION,
        NOTHING,
        OBJECT_PROPERTY,
        ON_CLASS,
        ON_DATA_RANGE,
        ON_DATATYPE,
        ONE_OF,
        ON_PROPERTIES,
        ON_PROPERTY,
        ONTOLOGY,
        ONTOLOGY_PROPERTY,
        PRIOR_VERSION,
        PROPERTY_CHAIN_AXIOM,
        PROPERTY_DISJOINT_WITH,
        QUALIFIED_CARDINALITY,
        REFLEXIVE_PROPERTY,
        RESTRICTION,
        SAME_AS,
        SOME_VALUES_FROM,
        SOURCE_INDIVIDUAL,
        SYMMETRIC_PROPERTY,
        TARGET_INDIVIDUAL,
        TARGET_VALUE,
        THING,
        TOP_DATA_PROPERTY,
        TOP_OBJECT_PROPERTY,
        TRANSITIVE_PROPERTY,
        UNION_OF,
        VERSION_INFO,
        VERSION_IRI,
        WITH_RESTRICTIONS,
    ]
);
