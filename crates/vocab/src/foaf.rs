// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [Friend of a Friend (FOAF)](
//! http://xmlns.com/foaf/0.1/)
//! vocabulary.

use crate::{named_node, named_node_deprecated, vocabulary};

pub const NS_BASE: &str = "http://xmlns.com/foaf/0.1/";
pub const NS_PREFERRED_PREFIX: &str = "foaf";

named_node!(
    ACCOUNT,
    NS_BASE,
    "account",
    "Indicates an account held by this agent."
);

named_node!(
    ACCOUNT_NAME,
    NS_BASE,
    "accountName",
    "Indicates the name (identifier) associated with this online account."
);

named_node!(
    ACCOUNT_SERVICE_HOMEPAGE,
    NS_BASE,
    "accountServiceHomepage",
    "Indicates a homepage of the service provide for this online account."
);

named_node!(
    AGE,
    NS_BASE,
    "age",
    "The age in years of some agent."
);

named_node!(
    AGENT,
    NS_BASE,
    "Agent",
    "An agent (eg. person, group, software or physical artifact)."
);

named_node!(
    AIM_CHAT_ID,
    NS_BASE,
    "aimChatID",
    "An AIM chat ID"
);

named_node!(
    BASED_NEAR,
    NS_BASE,
    "based_near",
    "A location that something is based near, for some broadly human notion of near."
);

named_node!(
    BIRTHDAY,
    NS_BASE,
    "birthday",
    "The birthday of this Agent, represented in mm-dd string form, eg. '12-31'."
);

named_node!(
    CURRENT_PROJECT,
    NS_BASE,
    "currentProject",
    "A current project this person works on."
);

named_node!(
    DEPICTION,
    NS_BASE,
    "depiction",
    "A depiction of some thing."
);

named_node!(
    DEPICTS,
    NS_BASE,
    "depicts",
    "A thing depicted in this representation."
);

named_node_deprecated!(
    DEPRECATED_DNA_CHECKSUM,
    NS_BASE,
    "dnaChecksum",
    "A checksum for the DNA of some thing. Joke.",
    "",
    "Archaic term, kept for reading old data"
);

named_node!(
    DOCUMENT,
    NS_BASE,
    "Document",
    "A document."
);

named_node_deprecated!(
    DEPRECATED_FAMILY_NAME,
    NS_BASE,
    "family_name",
    "The family name of some person.",
    "",
    "Use this instead: foaf:familyName"
);

named_node!(
    FAMILY_NAME,
    NS_BASE,
    "familyName",
    "The family name of some person."
);

named_node!(
    FIRST_NAME,
    NS_BASE,
    "firstName",
    "The first name of a person."
);

named_node!(
    FOCUS,
    NS_BASE,
    "focus",
    "The underlying or 'focal' entity associated with some SKOS-described concept."
);

named_node_deprecated!(
    DEPRECATED_FUNDED_BY,
    NS_BASE,
    "fundedBy",
    "An organization funding a project or person.",
    "",
    "Archaic term, kept for reading old data"
);

named_node_deprecated!(
    DEPRECATED_GEEKCODE,
    NS_BASE,
    "geekcode",
    "A textual geekcode for this person, see http://www.geekcode.com/geek.html",
    "",
    "Archaic term, kept for reading old data"
);

named_node!(
    GENDER,
    NS_BASE,
    "gender",
    "The gender of this Agent (typically but not necessarily 'male' or 'female')."
);

named_node!(
    GIVEN_NAME,
    NS_BASE,
    "givenName",
    "The given name of some person."
);

named_node_deprecated!(
    DEPRECATED_GIVENNAME,
    NS_BASE,
    "givenname",
    "The given name of some person.",
    "",
    "Use this instead: foaf:givenName"
);

named_node!(
    GROUP,
    NS_BASE,
    "Group",
    "A class of Agents."
);

named_node_deprecated!(
    DEPRECATED_HOLDS_ACCOUNT,
    NS_BASE,
    "holdsAccount",
    "Indicates an account held by this agent.",
    "",
    "Use this instead: foaf:account"
);

named_node!(
    HOMEPAGE,
    NS_BASE,
    "homepage",
    "A homepage for some thing."
);

named_node!(
    ICQ_CHAT_ID,
    NS_BASE,
    "icqChatID",
    "An ICQ chat ID"
);

named_node!(
    IMAGE,
    NS_BASE,
    "Image",
    "An image."
);

named_node!(
    IMG,
    NS_BASE,
    "img",
    "An image that can be used to represent some thing (ie. those depictions which are particularly representative of something, eg. one's photo on a homepage)."
);

named_node!(
    INTEREST,
    NS_BASE,
    "interest",
    "A page about a topic of interest to this person."
);

named_node!(
    IS_PRIMARY_TOPIC_OF,
    NS_BASE,
    "isPrimaryTopicOf",
    "A document that this thing is the primary topic of."
);

named_node!(
    JABBER_ID,
    NS_BASE,
    "jabberID",
    "A jabber ID for something."
);

named_node!(
    KNOWS,
    NS_BASE,
    "knows",
    "A person known by this person (indicating some level of reciprocated interaction between the parties)."
);

named_node!(
    LABEL_PROPERTY,
    NS_BASE,
    "LabelProperty",
    "A foaf:LabelProperty is any RDF property with textual values that serve as labels."
);

named_node!(
    LAST_NAME,
    NS_BASE,
    "lastName",
    "The last name of a person."
);

named_node!(
    LOGO,
    NS_BASE,
    "logo",
    "A logo representing some thing."
);

named_node!(
    MADE,
    NS_BASE,
    "made",
    "Something that was made by this agent."
);

named_node!(
    MAKER,
    NS_BASE,
    "maker",
    "An agent that made this thing."
);

named_node!(
    MBOX,
    NS_BASE,
    "mbox",
    "A personal mailbox, ie. an Internet mailbox associated with exactly one owner, the first owner of this mailbox. This is a 'static inverse functional property', in that there is (across time and change) at most one individual that ever has any particular value for foaf:mbox."
);

named_node!(
    MBOX_SHA_1_SUM,
    NS_BASE,
    "mbox_sha1sum",
    "The sha1sum of the URI of an Internet mailbox associated with exactly one owner, the first owner of the mailbox."
);

named_node!(
    MEMBER,
    NS_BASE,
    "member",
    "Indicates a member of a Group"
);

named_node!(
    MEMBERSHIP_CLASS,
    NS_BASE,
    "membershipClass",
    "Indicates the class of individuals that are a member of a Group"
);

named_node!(
    MSN_CHAT_ID,
    NS_BASE,
    "msnChatID",
    "An MSN chat ID"
);

named_node!(
    MYERS_BRIGGS,
    NS_BASE,
    "myersBriggs",
    "A Myers Briggs (MBTI) personality classification."
);

named_node!(
    NAME,
    NS_BASE,
    "name",
    "A name for some thing."
);

named_node!(
    NICK,
    NS_BASE,
    "nick",
    "A short informal nickname characterising an agent (includes login identifiers, IRC and other chat nicknames)."
);

named_node!(
    ONLINE_ACCOUNT,
    NS_BASE,
    "OnlineAccount",
    "An online account."
);

named_node!(
    ONLINE_CHAT_ACCOUNT,
    NS_BASE,
    "OnlineChatAccount",
    "An online chat account."
);

named_node!(
    ONLINE_ECOMMERCE_ACCOUNT,
    NS_BASE,
    "OnlineEcommerceAccount",
    "An online e-commerce account."
);

named_node!(
    ONLINE_GAMING_ACCOUNT,
    NS_BASE,
    "OnlineGamingAccount",
    "An online gaming account."
);

named_node!(
    OPENID,
    NS_BASE,
    "openid",
    "An OpenID for an Agent."
);

named_node!(
    ORGANIZATION,
    NS_BASE,
    "Organization",
    "An organization."
);

named_node!(
    PAGE,
    NS_BASE,
    "page",
    "A page or document about this thing."
);

named_node!(
    PAST_PROJECT,
    NS_BASE,
    "pastProject",
    "A project this person has previously worked on."
);

named_node!(
    PERSON,
    NS_BASE,
    "Person",
    "A person."
);

named_node!(
    PERSONAL_PROFILE_DOCUMENT,
    NS_BASE,
    "PersonalProfileDocument",
    "A personal profile RDF document."
);

named_node!(
    PHONE,
    NS_BASE,
    "phone",
    "A phone, specified using fully qualified tel: URI scheme (refs: http://www.w3.org/Addressing/schemes.html#tel)."
);

named_node!(
    PLAN,
    NS_BASE,
    "plan",
    "A .plan comment, in the tradition of finger and '.plan' files."
);

named_node!(
    PRIMARY_TOPIC,
    NS_BASE,
    "primaryTopic",
    "The primary topic of some page or document."
);

named_node!(
    PROJECT,
    NS_BASE,
    "Project",
    "A project (a collective endeavour of some kind)."
);

named_node!(
    PUBLICATIONS,
    NS_BASE,
    "publications",
    "A link to the publications of this person."
);

named_node!(
    SCHOOL_HOMEPAGE,
    NS_BASE,
    "schoolHomepage",
    "A homepage of a school attended by the person."
);

named_node!(
    SHA_1,
    NS_BASE,
    "sha1",
    "A sha1sum hash, in hex."
);

named_node!(
    SKYPE_ID,
    NS_BASE,
    "skypeID",
    "A Skype ID"
);

named_node!(
    STATUS,
    NS_BASE,
    "status",
    "A string expressing what the user is happy for the general public (normally) to know about their current activity."
);

named_node!(
    SURNAME,
    NS_BASE,
    "surname",
    "The surname of some person."
);

named_node_deprecated!(
    DEPRECATED_THEME,
    NS_BASE,
    "theme",
    "A theme.",
    "",
    "Archaic term, kept for reading old data"
);

named_node!(
    THUMBNAIL,
    NS_BASE,
    "thumbnail",
    "A derived thumbnail image."
);

named_node!(
    TIPJAR,
    NS_BASE,
    "tipjar",
    "A tipjar document for this agent, describing means for payment and reward."
);

named_node!(
    TITLE,
    NS_BASE,
    "title",
    "Title (Mr, Mrs, Ms, Dr. etc)"
);

named_node!(
    TOPIC,
    NS_BASE,
    "topic",
    "A topic of some page or document."
);

named_node!(
    TOPIC_INTEREST,
    NS_BASE,
    "topic_interest",
    "A thing of interest to this person."
);

named_node!(
    WEBLOG,
    NS_BASE,
    "weblog",
    "A weblog of some thing (whether person, group, company etc.)."
);

named_node!(
    WORK_INFO_HOMEPAGE,
    NS_BASE,
    "workInfoHomepage",
    "A work info homepage of some person; a page about their work for some organization."
);

named_node!(
    WORKPLACE_HOMEPAGE,
    NS_BASE,
    "workplaceHomepage",
    "A workplace homepage of some person; the homepage of an organization they work for."
);

named_node!(
    YAHOO_CHAT_ID,
    NS_BASE,
    "yahooChatID",
    "A Yahoo chat ID"
);

vocabulary!(
    Foaf,
    "Friend of a Friend",
    [
        ACCOUNT,
        ACCOUNT_NAME,
        ACCOUNT_SERVICE_HOMEPAGE,
        AGE,
        AGENT,
        AIM_CHAT_ID,
        BASED_NEAR,
        BIRTHDAY,
        CURRENT_PROJECT,
        DEPICTION,
        DEPICTS,
        DEPRECATED_DNA_CHECKSUM,
        DOCUMENT,
        DEPRECATED_FAMILY_NAME,
        FAMILY_NAME,
        FIRST_NAME,
        FOCUS,
        DEPRECATED_FUNDED_BY,
        DEPRECATED_GEEKCODE,
        GENDER,
        GIVEN_NAME,
        DEPRECATED_GIVENNAME,
        GROUP,
        DEPRECATED_HOLDS_ACCOUNT,
        HOMEPAGE,
        ICQ_CHAT_ID,
        IMAGE,
        IMG,
        INTEREST,
        IS_PRIMARY_TOPIC_OF,
        JABBER_ID,
        KNOWS,
        LABEL_PROPERTY,
        LAST_NAME,
        LOGO,
        MADE,
        MAKER,
        MBOX,
        MBOX_SHA_1_SUM,
        MEMBER,
        MEMBERSHIP_CLASS,
        MSN_CHAT_ID,
        MYERS_BRIGGS,
        NAME,
        NICK,
        ONLINE_ACCOUNT,
        ONLINE_CHAT_ACCOUNT,
        ONLINE_ECOMMERCE_ACCOUNT,
        ONLINE_GAMING_ACCOUNT,
        OPENID,
        ORGANIZATION,
        PAGE,
        PAST_PROJECT,
        PERSON,
        PERSONAL_PROFILE_DOCUMENT,
        PHONE,
        PLAN,
        PRIMARY_TOPIC,
        PROJECT,
        PUBLICATIONS,
        SCHOOL_HOMEPAGE,
        SHA_1,
        SKYPE_ID,
        STATUS,
        SURNAME,
        DEPRECATED_THEME,
        THUMBNAIL,
        TIPJAR,
        TITLE,
        TOPIC,
        TOPIC_INTEREST,
        WEBLOG,
        WORK_INFO_HOMEPAGE,
        WORKPLACE_HOMEPAGE,
        YAHOO_CHAT_ID,
    ]
);
