// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [XML Schema Definition datatypes (XSD)](
//! http://www.w3.org/2001/XMLSchema#)
//! vocabulary.

use crate::{named_node, vocabulary};

pub const NS_BASE: &str = "http://www.w3.org/2001/XMLSchema#";
pub const NS_PREFERRED_PREFIX: &str = "xsd";

named_node!(
    ANY_URI,
    NS_BASE,
    "anyURI",
    "A URI reference."
);

named_node!(
    BASE_64_BINARY,
    NS_BASE,
    "base64Binary",
    "Base64 encoded binary data."
);

named_node!(
    BOOLEAN,
    NS_BASE,
    "boolean",
    "The values true and false."
);

named_node!(
    BYTE,
    NS_BASE,
    "byte",
    "An integer between -128 and 127."
);

named_node!(
    DATE,
    NS_BASE,
    "date",
    "A calendar date, with an optional timezone."
);

named_node!(
    DATE_TIME,
    NS_BASE,
    "dateTime",
    "A date and time of day, with an optional timezone."
);

named_node!(
    DATE_TIME_STAMP,
    NS_BASE,
    "dateTimeStamp",
    "A date and time of day with a required timezone."
);

named_node!(
    DAY_TIME_DURATION,
    NS_BASE,
    "dayTimeDuration",
    "A duration made of days, hours, minutes and seconds only."
);

named_node!(
    DECIMAL,
    NS_BASE,
    "decimal",
    "An arbitrary precision decimal number."
);

named_node!(
    DOUBLE,
    NS_BASE,
    "double",
    "An IEEE double precision 64 bit floating point number."
);

named_node!(
    DURATION,
    NS_BASE,
    "duration",
    "A duration of time, in the Gregorian calendar."
);

named_node!(
    ENTITIES,
    NS_BASE,
    "ENTITIES",
    "Whitespace separated list of ENTITY values."
);

named_node!(
    ENTITY,
    NS_BASE,
    "ENTITY",
    "An `NCName` declared as an unparsed entity in a DTD."
);

named_node!(
    FLOAT,
    NS_BASE,
    "float",
    "An IEEE single precision 32 bit floating point number."
);

named_node!(
    G_DAY,
    NS_BASE,
    "gDay",
    "A recurring day of the month."
);

named_node!(
    G_MONTH,
    NS_BASE,
    "gMonth",
    "A recurring month of the year."
);

named_node!(
    G_MONTH_DAY,
    NS_BASE,
    "gMonthDay",
    "A recurring day of the year."
);

named_node!(
    G_YEAR,
    NS_BASE,
    "gYear",
    "A Gregorian calendar year."
);

named_node!(
    G_YEAR_MONTH,
    NS_BASE,
    "gYearMonth",
    "A month of a specific Gregorian calendar year."
);

named_node!(
    HEX_BINARY,
    NS_BASE,
    "hexBinary",
    "Hex encoded binary data."
);

named_node!(
    ID,
    NS_BASE,
    "ID",
    "An `NCName` used as a unique identifier within a document."
);

named_node!(
    IDREF,
    NS_BASE,
    "IDREF",
    "An `NCName` referring to an ID."
);

named_node!(
    IDREFS,
    NS_BASE,
    "IDREFS",
    "Whitespace separated list of IDREF values."
);

named_node!(
    INT,
    NS_BASE,
    "int",
    "An integer between -2147483648 and 2147483647."
);

named_node!(
    INTEGER,
    NS_BASE,
    "integer",
    "An arbitrary size integer number."
);

named_node!(
    LANGUAGE,
    NS_BASE,
    "language",
    "A language tag."
);

named_node!(
    LONG,
    NS_BASE,
    "long",
    "An integer between -9223372036854775808 and 9223372036854775807."
);

named_node!(
    NAME,
    NS_BASE,
    "Name",
    "An XML name."
);

named_node!(
    NC_NAME,
    NS_BASE,
    "NCName",
    "An XML name without colons."
);

named_node!(
    NEGATIVE_INTEGER,
    NS_BASE,
    "negativeInteger",
    "An integer below zero."
);

named_node!(
    NMTOKEN,
    NS_BASE,
    "NMTOKEN",
    "Any mixture of XML name characters."
);

named_node!(
    NMTOKENS,
    NS_BASE,
    "NMTOKENS",
    "Whitespace separated list of NMTOKEN values."
);

named_node!(
    NON_NEGATIVE_INTEGER,
    NS_BASE,
    "nonNegativeInteger",
    "An integer of zero or more."
);

named_node!(
    NON_POSITIVE_INTEGER,
    NS_BASE,
    "nonPositiveInteger",
    "An integer of zero or less."
);

named_node!(
    NORMALIZED_STRING,
    NS_BASE,
    "normalizedString",
    "A string without carriage returns, line feeds or tabs."
);

named_node!(
    NOTATION,
    NS_BASE,
    "NOTATION",
    "A NOTATION attribute type of XML."
);

named_node!(
    POSITIVE_INTEGER,
    NS_BASE,
    "positiveInteger",
    "An integer above zero."
);

named_node!(
    Q_NAME,
    NS_BASE,
    "QName",
    "An XML qualified name."
);

named_node!(
    SHORT,
    NS_BASE,
    "short",
    "An integer between -32768 and 32767."
);

named_node!(
    STRING,
    NS_BASE,
    "string",
    "A character string."
);

named_node!(
    TIME,
    NS_BASE,
    "time",
    "A time of day, with an optional timezone."
);

named_node!(
    TOKEN,
    NS_BASE,
    "token",
    "A normalized string without leading, trailing or repeated spaces."
);

named_node!(
    UNSIGNED_BYTE,
    NS_BASE,
    "unsignedByte",
    "An integer between 0 and 255."
);

named_node!(
    UNSIGNED_INT,
    NS_BASE,
    "unsignedInt",
    "An integer between 0 and 4294967295."
);

named_node!(
    UNSIGNED_LONG,
    NS_BASE,
    "unsignedLong",
    "An integer between 0 and 18446744073709551615."
);

named_node!(
    UNSIGNED_SHORT,
    NS_BASE,
    "unsignedShort",
    "An integer between 0 and 65535."
);

named_node!(
    YEAR_MONTH_DURATION,
    NS_BASE,
    "yearMonthDuration",
    "A duration made of years and months only."
);

vocabulary!(
    Xsd,
    "XML Schema Definition datatypes",
    [
        ANY_URI,
        BASE_64_BINARY,
        BOOLEAN,
        BYTE,
        DATE,
        DATE_TIME,
        DATE_TIME_STAMP,
        DAY_TIME_DURATION,
        DECIMAL,
        DOUBLE,
        DURATION,
        ENTITIES,
        ENTITY,
        FLOAT,
        G_DAY,
        G_MONTH,
        G_MONTH_DAY,
        G_YEAR,
        G_YEAR_MONTH,
        HEX_BINARY,
        ID,
        IDREF,
        IDREFS,
        INT,
        INTEGER,
        LANGUAGE,
        LONG,
        NAME,
        NC_NAME,
        NEGATIVE_INTEGER,
        NMTOKEN,
        NMTOKENS,
        NON_NEGATIVE_INTEGER,
        NON_POSITIVE_INTEGER,
        NORMALIZED_STRING,
        NOTATION,
        POSITIVE_INTEGER,
        Q_NAME,
        SHORT,
        STRING,
        TIME,
        TOKEN,
        UNSIGNED_BYTE,
        UNSIGNED_INT,
        UNSIGNED_LONG,
        UNSIGNED_SHORT,
        YEAR_MONTH_DURATION,
    ]
);
