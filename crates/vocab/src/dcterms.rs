// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [DCMI Metadata Terms (DCTERMS)](
//! http://purl.org/dc/terms/)
//! vocabulary.

use crate::{named_node, vocabulary};

pub const NS_BASE: &str = "http://purl.org/dc/terms/";
pub const NS_PREFERRED_PREFIX: &str = "dcterms";

named_node!(
    ABSTRACT,
    NS_BASE,
    "abstract",
    "A summary of the resource."
);

named_node!(
    ACCESS_RIGHTS,
    NS_BASE,
    "accessRights",
    "Information about who access the resource or an indication of its security status."
);

named_node!(
    ACCRUAL_METHOD,
    NS_BASE,
    "accrualMethod",
    "The method by which items are added to a collection."
);

named_node!(
    ACCRUAL_PERIODICITY,
    NS_BASE,
    "accrualPeriodicity",
    "The frequency with which items are added to a collection."
);

named_node!(
    ACCRUAL_POLICY,
    NS_BASE,
    "accrualPolicy",
    "The policy governing the addition of items to a collection."
);

named_node!(
    AGENT,
    NS_BASE,
    "Agent",
    "A resource that acts or has the power to act."
);

named_node!(
    AGENT_CLASS,
    NS_BASE,
    "AgentClass",
    "A group of agents."
);

named_node!(
    ALTERNATIVE,
    NS_BASE,
    "alternative",
    "An alternative name for the resource."
);

named_node!(
    AUDIENCE,
    NS_BASE,
    "audience",
    "A class of agents for whom the resource is intended or useful."
);

named_node!(
    AVAILABLE,
    NS_BASE,
    "available",
    "Date that the resource became or will become available."
);

named_node!(
    BIBLIOGRAPHIC_CITATION,
    NS_BASE,
    "bibliographicCitation",
    "A bibliographic reference for the resource."
);

named_node!(
    BIBLIOGRAPHIC_RESOURCE,
    NS_BASE,
    "BibliographicResource",
    "A book, article, or other documentary resource."
);

named_node!(
    BOX,
    NS_BASE,
    "Box",
    "The set of regions in space defined by their geographic coordinates according to the DCMI Box Encoding Scheme."
);

named_node!(
    CONFORMS_TO,
    NS_BASE,
    "conformsTo",
    "An established standard to which the described resource conforms."
);

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
    CREATED,
    NS_BASE,
    "created",
    "Date of creation of the resource."
);

named_node!(
    CREATOR,
    NS_BASE,
    "creator",
    "An entity responsible for making the resource."
);

named_node!(
    DATE,
    NS_BASE,
    "date",
    "A point or period of time associated with an event in the lifecycle of the resource."
);

named_node!(
    DATE_ACCEPTED,
    NS_BASE,
    "dateAccepted",
    "Date of acceptance of the resource."
);

named_node!(
    DATE_COPYRIGHTED,
    NS_BASE,
    "dateCopyrighted",
    "Date of copyright of the resource."
);

named_node!(
    DATE_SUBMITTED,
    NS_BASE,
    "dateSubmitted",
    "Date of submission of the resource."
);

named_node!(
    DCMI_TYPE,
    NS_BASE,
    "DCMIType",
    "The set of classes specified by the DCMI Type Vocabulary, used to categorize the nature or genre of the resource."
);

named_node!(
    DDC,
    NS_BASE,
    "DDC",
    "The set of conceptual resources specified by the Dewey Decimal Classification."
);

named_node!(
    DESCRIPTION,
    NS_BASE,
    "description",
    "An account of the resource."
);

named_node!(
    EDUCATION_LEVEL,
    NS_BASE,
    "educationLevel",
    "A class of agents, defined in terms of progression through an educational or training context, for which the described resource is intended."
);

named_node!(
    EXTENT,
    NS_BASE,
    "extent",
    "The size or duration of the resource."
);

named_node!(
    FILE_FORMAT,
    NS_BASE,
    "FileFormat",
    "A digital resource format."
);

named_node!(
    FORMAT,
    NS_BASE,
    "format",
    "The file format, physical medium, or dimensions of the resource."
);

named_node!(
    FREQUENCY,
    NS_BASE,
    "Frequency",
    "A rate at which something recurs."
);

named_node!(
    HAS_FORMAT,
    NS_BASE,
    "hasFormat",
    "A related resource that is substantially the same as the pre-existing described resource, but in another format."
);

named_node!(
    HAS_PART,
    NS_BASE,
    "hasPart",
    "A related resource that is included either physically or logically in the described resource."
);

named_node!(
    HAS_VERSION,
    NS_BASE,
    "hasVersion",
    "A related resource that is a version, edition, or adaptation of the described resource."
);

named_node!(
    IDENTIFIER,
    NS_BASE,
    "identifier",
    "An unambiguous reference to the resource within a given context."
);

named_node!(
    IMT,
    NS_BASE,
    "IMT",
    "The set of media types specified by the Internet Assigned Numbers Authority."
);

named_node!(
    INSTRUCTIONAL_METHOD,
    NS_BASE,
    "instructionalMethod",
    "A process, used to engender knowledge, attitudes and skills, that the described resource is designed to support."
);

named_node!(
    IS_FORMAT_OF,
    NS_BASE,
    "isFormatOf",
    "A pre-existing related resource that is substantially the same as the described resource, but in another format."
);

named_node!(
    ISO_3166,
    NS_BASE,
    "ISO3166",
    "The set of codes listed in ISO 3166-1 for the representation of names of countries."
);

named_node!(
    ISO_639_2,
    NS_BASE,
    "ISO639-2",
    "The three-letter alphabetic codes listed in ISO639-2 for the representation of names of languages."
);

named_node!(
    ISO_639_3,
    NS_BASE,
    "ISO639-3",
    "The set of three-letter codes listed in ISO 639-3 for the representation of names of languages."
);

named_node!(
    IS_PART_OF,
    NS_BASE,
    "isPartOf",
    "A related resource in which the described resource is physically or logically included."
);

named_node!(
    IS_REFERENCED_BY,
    NS_BASE,
    "isReferencedBy",
    "A related resource that references, cites, or otherwise points to the described resource."
);

named_node!(
    IS_REPLACED_BY,
    NS_BASE,
    "isReplacedBy",
    "A related resource that supplants, displaces, or supersedes the described resource."
);

named_node!(
    IS_REQUIRED_BY,
    NS_BASE,
    "isRequiredBy",
    "A related resource that requires the described resource to support its function, delivery, or coherence."
);

named_node!(
    ISSUED,
    NS_BASE,
    "issued",
    "Date of formal issuance of the resource."
);

named_node!(
    IS_VERSION_OF,
    NS_BASE,
    "isVersionOf",
    "A related resource of which the described resource is a version, edition, or adaptation."
);

named_node!(
    JURISDICTION,
    NS_BASE,
    "Jurisdiction",
    "The extent or range of judicial, law enforcement, or other authority."
);

named_node!(
    LANGUAGE,
    NS_BASE,
    "language",
    "A language of the resource."
);

named_node!(
    LCC,
    NS_BASE,
    "LCC",
    "The set of conceptual resources specified by the Library of Congress Classification."
);

named_node!(
    LCSH,
    NS_BASE,
    "LCSH",
    "The set of labeled concepts specified by the Library of Congress Subject Headings."
);

named_node!(
    LICENSE,
    NS_BASE,
    "license",
    "A legal document giving official permission to do something with the resource."
);

named_node!(
    LICENSE_DOCUMENT,
    NS_BASE,
    "LicenseDocument",
    "A legal document giving official permission to do something with a resource."
);

named_node!(
    LINGUISTIC_SYSTEM,
    NS_BASE,
    "LinguisticSystem",
    "A system of signs, symbols, sounds, gestures, or rules used in communication."
);

named_node!(
    LOCATION,
    NS_BASE,
    "Location",
    "A spatial region or named place."
);

named_node!(
    LOCATION_PERIOD_OR_JURISDICTION,
    NS_BASE,
    "LocationPeriodOrJurisdiction",
    "A location, period of time, or jurisdiction."
);

named_node!(
    MEDIATOR,
    NS_BASE,
    "mediator",
    "An entity that mediates access to the resource."
);

named_node!(
    MEDIA_TYPE,
    NS_BASE,
    "MediaType",
    "A file format or physical medium."
);

named_node!(
    MEDIA_TYPE_OR_EXTENT,
    NS_BASE,
    "MediaTypeOrExtent",
    "A media type or extent."
);

named_node!(
    MEDIUM,
    NS_BASE,
    "medium",
    "The material or physical carrier of the resource."
);

named_node!(
    MESH,
    NS_BASE,
    "MESH",
    "The set of labeled concepts specified by the Medical Subject Headings."
);

named_node!(
    METHOD_OF_ACCRUAL,
    NS_BASE,
    "MethodOfAccrual",
    "A method by which resources are added to a collection."
);

named_node!(
    METHOD_OF_INSTRUCTION,
    NS_BASE,
    "MethodOfInstruction",
    "A process that is used to engender knowledge, attitudes, and skills."
);

named_node!(
    MODIFIED,
    NS_BASE,
    "modified",
    "Date on which the resource was changed."
);

named_node!(
    NLM,
    NS_BASE,
    "NLM",
    "The set of conceptual resources specified by the National Library of Medicine Classification."
);

named_node!(
    PERIOD,
    NS_BASE,
    "Period",
    "The set of time intervals defined by their limits according to the DCMI Period Encoding Scheme."
);

named_node!(
    PERIOD_OF_TIME,
    NS_BASE,
    "PeriodOfTime",
    "An interval of time that is named or defined by its start and end dates."
);

named_node!(
    PHYSICAL_MEDIUM,
    NS_BASE,
    "PhysicalMedium",
    "A physical material or carrier."
);

named_node!(
    PHYSICAL_RESOURCE,
    NS_BASE,
    "PhysicalResource",
    "A material thing."
);

named_node!(
    POINT,
    NS_BASE,
    "Point",
    "The set of points in space defined by their geographic coordinates according to the DCMI Point Encoding Scheme."
);

named_node!(
    POLICY,
    NS_BASE,
    "Policy",
    "A plan or course of action by an authority, intended to influence and determine decisions, actions, and other matters."
);

named_node!(
    PROVENANCE,
    NS_BASE,
    "provenance",
    "A statement of any changes in ownership and custody of the resource since its creation that are significant for its authenticity, integrity, and interpretation."
);

named_node!(
    PROVENANCE_STATEMENT,
    NS_BASE,
    "ProvenanceStatement",
    "Any changes in ownership and custody of a resource since its creation that are significant for its authenticity, integrity, and interpretation."
);

named_node!(
    PUBLISHER,
    NS_BASE,
    "publisher",
    "An entity responsible for making the resource available."
);

named_node!(
    REFERENCES,
    NS_BASE,
    "references",
    "A related resource that is referenced, cited, or otherwise pointed to by the described resource."
);

named_node!(
    RELATION,
    NS_BASE,
    "relation",
    "A related resource."
);

named_node!(
    REPLACES,
    NS_BASE,
    "replaces",
    "A related resource that is supplanted, displaced, or superseded by the described resource."
);

named_node!(
    REQUIRES,
    NS_BASE,
    "requires",
    "A related resource that is required by the described resource to support its function, delivery, or coherence."
);

named_node!(
    RFC_1766,
    NS_BASE,
    "RFC1766",
    "The set of tags, constructed according to RFC 1766, for the identification of languages."
);

named_node!(
    RFC_3066,
    NS_BASE,
    "RFC3066",
    "The set of tags constructed according to RFC 3066 for the identification of languages."
);

named_node!(
    RFC_4646,
    NS_BASE,
    "RFC4646",
    "The set of tags constructed according to RFC 4646 for the identification of languages."
);

named_node!(
    RFC_5646,
    NS_BASE,
    "RFC5646",
    "The set of tags constructed according to RFC 5646 for the identification of languages."
);

named_node!(
    RIGHTS,
    NS_BASE,
    "rights",
    "Information about rights held in and over the resource."
);

named_node!(
    RIGHTS_HOLDER,
    NS_BASE,
    "rightsHolder",
    "A person or organization owning or managing rights over the resource."
);

named_node!(
    RIGHTS_STATEMENT,
    NS_BASE,
    "RightsStatement",
    "A statement about the intellectual property rights (IPR) held in or over a resource, a legal document giving official permission to do something with a resource, or a statement about access rights."
);

named_node!(
    SIZE_OR_DURATION,
    NS_BASE,
    "SizeOrDuration",
    "A dimension or extent, or a time taken to play or execute."
);

named_node!(
    SOURCE,
    NS_BASE,
    "source",
    "A related resource from which the described resource is derived."
);

named_node!(
    SPATIAL,
    NS_BASE,
    "spatial",
    "Spatial characteristics of the resource."
);

named_node!(
    STANDARD,
    NS_BASE,
    "Standard",
    "A reference point against which other things can be evaluated or compared."
);

named_node!(
    SUBJECT,
    NS_BASE,
    "subject",
    "A topic of the resource."
);

named_node!(
    TABLE_OF_CONTENTS,
    NS_BASE,
    "tableOfContents",
    "A list of subunits of the resource."
);

named_node!(
    TEMPORAL,
    NS_BASE,
    "temporal",
    "Temporal characteristics of the resource."
);

named_node!(
    TGN,
    NS_BASE,
    "TGN",
    "The set of places specified by the Getty Thesaurus of Geographic Names."
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

named_node!(
    UDC,
    NS_BASE,
    "UDC",
    "The set of conceptual resources specified by the Universal Decimal Classification."
);

named_node!(
    URI,
    NS_BASE,
    "URI",
    "The set of identifiers constructed according to the generic syntax for Uniform Resource Identifiers as specified by the Internet Engineering Task Force."
);

named_node!(
    VALID,
    NS_BASE,
    "valid",
    "Date (often a range) of validity of a resource."
);

named_node!(
    W_3_CDTF,
    NS_BASE,
    "W3CDTF",
    "The set of dates and times constructed according to the W3C Date and Time Formats Specification."
);

vocabulary!(
    Dcterms,
    "DCMI Metadata Terms",
    [
        ABSTRACT,
        ACCESS_RIGHTS,
        ACCRUAL_METHOD,
        ACCRUAL_PERIODICITY,
        ACCRUAL_POLICY,
        AGENT,
        AGENT_CLASS,
        ALTERNATIVE,
        AUDIENCE,
        AVAILABLE,
        BIBLIOGRAPHIC_CITATION,
        BIBLIOGRAPHIC_RESOURCE,
        BOX,
        CONFORMS_TO,
        CONTRIBUTOR,
        COVERAGE,
        CREATED,
        CREATOR,
        DATE,
        DATE_ACCEPTED,
        DATE_COPYRIGHTED,
        DATE_SUBMITTED,
        DCMI_TYPE,
        DDC,
        DESCRIPTION,
        EDUCATION_LEVEL,
        EXTENT,
        FILE_FORMAT,
        FORMAT,
        FREQUENCY,
        HAS_FORMAT,
        HAS_PART,
        HAS_VERSION,
        IDENTIFIER,
        IMT,
        INSTRUCTIONAL_METHOD,
        IS_FORMAT_OF,
        ISO_3166,
        ISO_639_2,
        ISO_639_3,
        IS_PART_OF,
        IS_REFERENCED_BY,
        IS_REPLACED_BY,
        IS_REQUIRED_BY,
        ISSUED,
        IS_VERSION_OF,
        JURISDICTION,
        LANGUAGE,
        LCC,
        LCSH,
        LICENSE,
        LICENSE_DOCUMENT,
        LINGUISTIC_SYSTEM,
        LOCATION,
        LOCATION_PERIOD_OR_JURISDICTION,
        MEDIATOR,
        MEDIA_TYPE,
        MEDIA_TYPE_OR_EXTENT,
        MEDIUM,
        MESH,
        METHOD_OF_ACCRUAL,
        METHOD_OF_INSTRUCTION,
        MODIFIED,
        NLM,
        PERIOD,
        PERIOD_OF_TIME,
        PHYSICAL_MEDIUM,
        PHYSICAL_RESOURCE,
        POINT,
        POLICY,
        PROVENANCE,
        PROVENANCE_STATEMENT,
        PUBLISHER,
        REFERENCES,
        RELATION,
        REPLACES,
        REQUIRES,
        RFC_1766,
        RFC_3066,
        RFC_4646,
        RFC_5646,
        RIGHTS,
        RIGHTS_HOLDER,
        RIGHTS_STATEMENT,
        SIZE_OR_DURATION,
        SOURCE,
        SPATIAL,
        STANDARD,
        SUBJECT,
        TABLE_OF_CONTENTS,
        TEMPORAL,
        TGN,
        TITLE,
        TYPE,
        UDC,
        URI,
        VALID,
        W_3_CDTF,
    ]
);
