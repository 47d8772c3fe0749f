// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [The Music Ontology (MO)](
//! http://purl.org/ontology/mo/)
//! vocabulary.

use crate::{named_node, named_node_deprecated, vocabulary};

pub const NS_BASE: &str = "http://purl.org/ontology/mo/";
pub const NS_PREFERRED_PREFIX: &str = "mo";

named_node!(
    ACTIVITY_CLASS,
    NS_BASE,
    "Activity",
    "An activity period, defining when an artist was musically active."
);

named_node!(
    ACTIVITY,
    NS_BASE,
    "activity",
    "Relates an artist to an activity period"
);

named_node!(
    ACTIVITY_END,
    NS_BASE,
    "activity_end",
    "Relates an artist to a date at which its activity ended"
);

named_node!(
    ACTIVITY_START,
    NS_BASE,
    "activity_start",
    "Relates an artist to a date at which its activity started"
);

named_node!(
    ALBUM,
    NS_BASE,
    "album",
    "One or more track issued together. This is a type of MusicalManifestation defined by the musical industry."
);

named_node!(
    AMAZON_ASIN,
    NS_BASE,
    "amazon_asin",
    "Used to link a work or the expression of a work to its corresponding Amazon ASINs page."
);

named_node!(
    ANALOG_SIGNAL,
    NS_BASE,
    "AnalogSignal",
    "An analog signal."
);

named_node!(
    ARRANGED_IN,
    NS_BASE,
    "arranged_in",
    "Associates a work to an arrangement event where it was arranged"
);

named_node!(
    ARRANGEMENT,
    NS_BASE,
    "Arrangement",
    "An arrangement event. Takes as agent the arranger, and produces a score (informational object, not the actually published score)."
);

named_node!(
    ARRANGEMENT_OF,
    NS_BASE,
    "arrangement_of",
    "Associates an arrangement event to a work"
);

named_node!(
    ARRANGER,
    NS_BASE,
    "Arranger",
    "A person arranging a musical work."
);

named_node!(
    ARTIST,
    NS_BASE,
    "artist",
    "Relates a membership event with the corresponding artist"
);

named_node!(
    AUDIOBOOK,
    NS_BASE,
    "audiobook",
    "Book read by a narrator without music. This is a type of MusicalManifestation defined by the musical industry."
);

named_node!(
    AUDIO_FILE,
    NS_BASE,
    "AudioFile",
    "An audio file, which may be available on a local file system or through http, ftp, etc."
);

named_node!(
    AVAILABLE_AS,
    NS_BASE,
    "available_as",
    "Relates a musical manifestation to a musical item (this album, and my particular cd), holding the entire manifestation."
);

named_node_deprecated!(
    DEPRECATED_AVAILABLE_AS,
    NS_BASE,
    "availableAs",
    "Legacy spelling of `mo:available_as`.",
    "",
    "Use this instead: mo:available_as"
);

named_node!(
    BIOGRAPHY,
    NS_BASE,
    "biography",
    "Used to link an artist to their online biography."
);

named_node!(
    BITS_PER_SAMPLE,
    NS_BASE,
    "bitsPerSample",
    "Associates a digital signal to the number of bits used to encode one sample."
);

named_node!(
    BOOTLEG,
    NS_BASE,
    "bootleg",
    "An unofficial/underground musical work or the expression of a musical work that was not sanctioned by the artist and/or the corporate body."
);

named_node!(
    BPM,
    NS_BASE,
    "bpm",
    "Indicates the BPM of a MusicalWork or a particular Performance Beats per minute: the pace of music measured by the number of beats occurring in 60 seconds."
);

named_node!(
    CATALOGUE_NUMBER,
    NS_BASE,
    "catalogue_number",
    "Links a release with the corresponding catalogue number"
);

named_node!(
    CD,
    NS_BASE,
    "CD",
    "Compact Disc used as medium to record a musical manifestation."
);

named_node!(
    CHANNELS,
    NS_BASE,
    "channels",
    "Associates a signal to the number of channels it holds (mono --> 1, stereo --> 2)."
);

named_node!(
    COLLABORATED_WITH,
    NS_BASE,
    "collaborated_with",
    "Used to relate two collaborating people on a work."
);

named_node!(
    COMPILATION,
    NS_BASE,
    "compilation",
    "Collection of previously released manifestations of a musical expression by one or more artists. This is a type of MusicalManifestation defined by the musical industry."
);

named_node!(
    COMPILATION_OF,
    NS_BASE,
    "compilation_of",
    "Indicates that a musical manifestation is a compilation of several Signals."
);

named_node!(
    COMPILED,
    NS_BASE,
    "compiled",
    "Used to relate an person or a group of person who compiled the manifestation of a musical work."
);

named_node!(
    COMPILER,
    NS_BASE,
    "compiler",
    "Used to relate the manifestation of a musical work to a person or a group of person who compiled it."
);

named_node!(
    COMPOSED_IN,
    NS_BASE,
    "composed_in",
    "Associates a MusicalWork to the Composition event pertaining to its creation. For example, I might use this property to associate the Magic Flute to its composition event, occuring during 1782 and having as a mo:composer Mozart."
);

named_node!(
    COMPOSER_CLASS,
    NS_BASE,
    "Composer",
    "A person or a group of people who composes a musical work."
);

named_node!(
    COMPOSER,
    NS_BASE,
    "composer",
    "Associates a composition event to the actual composer. For example, this property could link the event corresponding to the composition of the Magic Flute in 1782 to Mozart himself (who obviously has a FOAF profile:-) )."
);

named_node!(
    COMPOSITION,
    NS_BASE,
    "Composition",
    r#"A composition event. Takes as agent the composer himself. It produces a MusicalWork, or a MusicalExpression (when the initial "product" is a score, for example), or both..."#
);

named_node!(
    CONDUCTED,
    NS_BASE,
    "conducted",
    "Relates agents to the performances they were conducting"
);

named_node!(
    CONDUCTOR_CLASS,
    NS_BASE,
    "Conductor",
    "A person conducting a musical performance."
);

named_node!(
    CONDUCTOR,
    NS_BASE,
    "conductor",
    "Relates a performance to the conductor involved"
);

named_node!(
    CONTAINS_SAMPLE_FROM,
    NS_BASE,
    "contains_sample_from",
    "Relates a signal to another signal, which has been sampled."
);

named_node!(
    CORPORATE_BODY,
    NS_BASE,
    "CorporateBody",
    "Organization or group of individuals and/or other organizations involved in the music market."
);

named_node!(
    DAT,
    NS_BASE,
    "DAT",
    "Digital Audio Tape used as medium to record a musical manifestation."
);

named_node!(
    DCC,
    NS_BASE,
    "DCC",
    "Digital Compact Cassette used as medium to record a musical manifestation."
);

named_node!(
    DERIVED_FROM,
    NS_BASE,
    "derived_from",
    "A related signal from which the described signal is derived."
);

named_node!(
    DIGITAL_SIGNAL,
    NS_BASE,
    "DigitalSignal",
    "A digital signal"
);

named_node!(
    DISCOGRAPHY,
    NS_BASE,
    "discography",
    "Used to links an artist to an online discography of their musical works. The discography should provide a summary of each released musical work of the artist."
);

named_node!(
    DISCOGS,
    NS_BASE,
    "discogs",
    "Used to link a musical work or the expression of a musical work, an artist or a corporate body to to its corresponding Discogs page."
);

named_node!(
    DJMIX_OF,
    NS_BASE,
    "djmix_of",
    r#"Indicates that all (or most of) the tracks of a musical work or the expression of a musical work were mixed together from all (or most of) the tracks from another musical work or the expression of a musical work to form a so called DJ-Mix. The tracks might have been altered by pitching (so that the tempo of one track matches the tempo of the following track) and fading (so that one track blends in smoothly with the other). If the tracks have been more substantially altered, the "mo:remix" relationship type is more appropriate."#
);

named_node!(
    DJMIXED,
    NS_BASE,
    "djmixed",
    "Used to relate an artist who djmixed a musical work or the expression of a musical work. The artist usually selected the tracks, chose their sequence, and slightly changed them by fading (so that one track blends in smoothly with the other) or pitching (so that the tempo of one track matches the tempo of the following track). This applies to a 'Mixtape' in which all tracks were DJ-mixed together into one single long track."
);

named_node!(
    DJMIXED_BY,
    NS_BASE,
    "djmixed_by",
    "Used to relate a work or the expression of a work to an artist who djmixed it. The artist usually selected the tracks, chose their sequence, and slightly changed them by fading (so that one track blends in smoothly with the other) or pitching (so that the tempo of one track matches the tempo of the following track). This applies to a 'Mixtape' in which all tracks were DJ-mixed together into one single long track."
);

named_node!(
    DOWNLOAD,
    NS_BASE,
    "download",
    "This property can be used to link from a person to the website where they make their works available, or from a manifestation (a track or an album, for example) to a web page where it is available for download. It is better to use one of the three sub-properties instead of this one in order to specify wether the content can be accessed for free (mo:freedownload), if it is just free preview material (mo:previewdownload), or if it can be accessed for some money (mo:paiddownload) (this includes links to the Amazon store, for example). This property MUST be used only if the content is just available through a web page (holding, for example a Flash application) - it is better to link to actual content directly through the use of mo:available_as and mo:Stream, mo:Torrent or mo:ED2K, etc. Therefore, Semantic Web user agents that don't know how to read HTML and even less to rip streams from Flash applications can still access the audio content."
);

named_node!(
    DURATION,
    NS_BASE,
    "duration",
    "The duration of a track or a signal in ms"
);

named_node!(
    DVDA,
    NS_BASE,
    "DVDA",
    "DVD-Audio used as medium to record a musical manifestation."
);

named_node!(
    EAN,
    NS_BASE,
    "ean",
    "The European Article Number (EAN) is a universal identifier for products, commonly printed in form of barcodes on them. The numbers represented by those codes can either be 8 or 13 digits long, with the 13-digit-version being most common. EANs form a superset of the North American Universal Product Code (UPC) as every UPC can be made an EAN by adding a leading zero to it. Additionally every EAN is also a Japanese Article Number (JAN). The identifiers were formerly assigned by EAN International which merged with Uniform Code Council (UCC, the guys behind the UPCs) and Electronic Commerce Council of Canada (ECCC) to become GS1."
);

named_node!(
    ED_2_K,
    NS_BASE,
    "ED2K",
    "Something available on the E-Donkey peer-2-peer filesharing network"
);

named_node!(
    ENCODES,
    NS_BASE,
    "encodes",
    "Relates a MusicalItem (a track on a particular CD, an audio file, a stream somewhere) to the signal it encodes. This is usually a lower-resolution version of the master signal (issued from a Recording event)."
);

named_node!(
    ENCODING,
    NS_BASE,
    "encoding",
    r#"Method used to convert analog electronic signals into digital format such as "MP3 CBR @ 128kbps", "OGG @ 160kbps", "FLAC", etc."#
);

named_node!(
    ENGINEER,
    NS_BASE,
    "engineer",
    "Relates a performance or a recording to the engineer involved"
);

named_node!(
    ENGINEERED,
    NS_BASE,
    "engineered",
    "Relates agents to the performances/recordings they were engineering in"
);

named_node!(
    EP,
    NS_BASE,
    "ep",
    "An EP"
);

named_node!(
    EVENT_HOMEPAGE,
    NS_BASE,
    "event_homepage",
    "Links a particular event to a web page"
);

named_node_deprecated!(
    DEPRECATED_EVENT_HOME_PAGE,
    NS_BASE,
    "eventHomePage",
    "Legacy spelling of `mo:event_homepage`.",
    "",
    "Use this instead: mo:event_homepage"
);

named_node!(
    EXCHANGE_ITEM,
    NS_BASE,
    "exchange_item",
    "A person, a group of person or an organization exchanging an exemplar of a single manifestation."
);

named_node!(
    FANPAGE,
    NS_BASE,
    "fanpage",
    "Used to link an artist to a fan-created webpage devoted to that artist."
);

named_node!(
    FESTIVAL,
    NS_BASE,
    "Festival",
    "A festival - musical/artistic event lasting several days, like Glastonbury, Rock Am Ring... We migth decompose this event (which is in fact just a classification of the space/time region related to a particular festival) using hasSubEvent in several performances at different space/time."
);

named_node!(
    FREE_DOWNLOAD,
    NS_BASE,
    "free_download",
    "This property can be used to link from a person to the website where they make their works available, or from a manifestation (a track or an album, for example) to a web page where it is available for free download. This property MUST be used only if the content is just available through a web page (holding, for example a Flash application) - it is better to link to actual content directly through the use of mo:available_as and mo:Stream, mo:Torrent or mo:ED2K, etc. Therefore, Semantic Web user agents that don't know how to read HTML and even less to rip streams from Flash applications can still access the audio content."
);

named_node_deprecated!(
    DEPRECATED_FREEDOWNLOAD,
    NS_BASE,
    "freedownload",
    "Legacy spelling of `mo:free_download`.",
    "",
    "Use this instead: mo:free_download"
);

named_node!(
    GENRE,
    NS_BASE,
    "genre",
    "Associates an event (like a performance or a recording) to a particular musical genre. Further version of this property may also include works and scores in the domain."
);

named_node!(
    GENRE_CLASS,
    NS_BASE,
    "Genre",
    r#"An expressive style of music. Any taxonomy can be plug-in here. You can either define a genre by yourself, like this: :mygenre a mo:Genre; dc:title "electro rock". Or you can refer to a DBPedia genre (such as http://dbpedia.org/resource/Baroque_music), allowing semantic web clients to access easily really detailed structured information about the genre you are refering to."#
);

named_node!(
    GRID,
    NS_BASE,
    "grid",
    "The Global Release Identifier (GRid) is a system for uniquely identifying Releases of music over electronic networks (that is, online stores where you can buy music as digital files). As that it can be seen as the equivalent of the BarCode (or more correctly the GTIN) as found on physical releases of music. Like the ISRC (a code for identifying single recordings as found on releases) it was developed by the IFPI but it does not appear to be a standard of the ISO."
);

named_node!(
    GROUP,
    NS_BASE,
    "group",
    "Relates a membership event with the corresponding group"
);

named_node!(
    GTIN,
    NS_BASE,
    "gtin",
    "GTIN is a grouping term for EANs and UPCs. In common speech those are called barcodes although the barcodes are just a representation of those identifying numbers."
);

named_node!(
    HAS_TRACK,
    NS_BASE,
    "has_track",
    "Indicates that a musical manifestation has a particular track"
);

named_node!(
    HEADLINER,
    NS_BASE,
    "headliner",
    "Relates a performance to the headliner(s) involved"
);

named_node!(
    HOMEPAGE,
    NS_BASE,
    "homepage",
    "Links an artist, a record, etc. to a corresponding web page"
);

named_node!(
    IMAGE,
    NS_BASE,
    "image",
    "Indicates a pictorial image (JPEG, GIF, PNG, Etc.) of a musical work, the expression of a musical work, the manifestation of a work or the examplar of a manifestation."
);

named_node!(
    IMDB,
    NS_BASE,
    "imdb",
    "Used to link an artist, a musical work or the expression of a musical work to their equivalent page on IMDb, the InternetMovieDatabase."
);

named_node!(
    INSTRUMENT,
    NS_BASE,
    "instrument",
    "Relates a performance to a musical instrument involved"
);

named_node!(
    INSTRUMENT_CLASS,
    NS_BASE,
    "Instrument",
    "Any of various devices or contrivances that can be used to produce musical tones or sound. Any taxonomy can be used to subsume this concept. The default one is one extracted by Ivan Herman from the Musicbrainz instrument taxonomy, conforming to SKOS. This concept holds a seeAlso link towards this taxonomy."
);

named_node!(
    INSTRUMENTATION,
    NS_BASE,
    "Instrumentation",
    "Instrumentation deals with the techniques of writing music for a specific instrument, including the limitations of the instrument, playing techniques and idiomatic handling of the instrument."
);

named_node!(
    INTERPRETER,
    NS_BASE,
    "interpreter",
    "Adds an involved music artist, who interpreted, remixed, or otherwise modified an existing signal, which resulted in the signal that is here the subject of this relation."
);

named_node!(
    INTERVIEW,
    NS_BASE,
    "interview",
    "Recording of the questioning of a person. This is a type of MusicalManifestation defined by the musical industry."
);

named_node!(
    IPI,
    NS_BASE,
    "ipi",
    "The Interested Parties Information Code (IPI) is an ISO standard similar to ISBNs for identifying the people or groups with some involvement with a particular musical work / compositions."
);

named_node!(
    ISMN,
    NS_BASE,
    "ismn",
    "The International Standard Music Number (ISMN) is an ISO standard similar to ISBNs for identifying printed music publications"
);

named_node!(
    ISRC,
    NS_BASE,
    "isrc",
    "The ISRC (International Standard Recording Code) is the international identification system for sound recordings and music videorecordings. Each ISRC is a unique and permanent identifier for a specific recording which can be permanently encoded into a product as its digital fingerprint. Encoded ISRC provide the means to automatically identify recordings for royalty payments."
);

named_node!(
    ISWC,
    NS_BASE,
    "iswc",
    "Links a musical work to the corresponding ISWC number"
);

named_node!(
    ITEM,
    NS_BASE,
    "item",
    "Relates a musical manifestation to one of its exemplars (a musical item)"
);

named_node!(
    KEY,
    NS_BASE,
    "key",
    "Indicated the key used by the musicians during a performance, or the key of a MusicalWork. Any of 24 major or minor diatonic scales that provide the tonal framework for a piece of music."
);

named_node!(
    LABEL_CLASS,
    NS_BASE,
    "Label",
    "Trade name of a company that produces musical works or expression of musical works."
);

named_node!(
    LABEL,
    NS_BASE,
    "label",
    "Associates a release event with the label releasing the record"
);

named_node!(
    LC,
    NS_BASE,
    "lc",
    "The Label Code (LC) was introduced in 1977 by the IFPI (International Federation of Phonogram and Videogram Industries) in order to unmistakably identify the different record labels (see Introduction, Record labels) for rights purposes. The Label Code consists historically of 4 figures, presently being extended to 5 figures, preceded by LC and a dash (e.g. LC-0193 = Electrola; LC-0233 = His Master's Voice). Note that the number of countries using the LC is limited, and that the code given on the item is not always accurate."
);

named_node!(
    LEVEL,
    NS_BASE,
    "level",
    "This annotation property associates to a particular Music Ontology term the corresponding expressiveness level. These levels can be: - 1: Only editorial/Musicbrainz type information - 2: Workflow information - 3: Even decomposition This property is mainly used for specification generation."
);

named_node!(
    LIBRETTO,
    NS_BASE,
    "Libretto",
    "Libretto"
);

named_node!(
    LICENCE,
    NS_BASE,
    "licence",
    "Used to link a work or the expression of a work to the license under which they can be manipulated (downloaded, modified, etc). This is usually used to link to a Creative Commons licence."
);

named_node!(
    LISTENED,
    NS_BASE,
    "listened",
    "Relates agents to the performances they were listening in"
);

named_node!(
    LISTENER,
    NS_BASE,
    "listener",
    "Relates a performance to the listener involved"
);

named_node!(
    LISTENER_CLASS,
    NS_BASE,
    "Listener",
    "A person listening to a performance."
);

named_node!(
    LIVE,
    NS_BASE,
    "live",
    "A musical manifestation that was recorded live. This is a type of MusicalManifestation defined by the musical industry."
);

named_node!(
    LYRICS_CLASS,
    NS_BASE,
    "Lyrics",
    "Lyrics"
);

named_node!(
    LYRICS,
    NS_BASE,
    "lyrics",
    "Associates lyrics with a musical work"
);

named_node!(
    MAGNETIC_TAPE,
    NS_BASE,
    "MagneticTape",
    "Magnetic analogue tape used as medium to record a musical manifestation."
);

named_node!(
    MAILORDER,
    NS_BASE,
    "mailorder",
    "Used to link a musical work or the expression of a musical work to a website where people can buy a copy of the musical manifestation."
);

named_node!(
    MASHUP_OF,
    NS_BASE,
    "mashup_of",
    "Indicates that musical works or the expressions of a musical work were mashed up on this album or track. This means that two musical works or the expressions of a musical work by different artists are mixed together, over each other, or otherwise combined into a single musical work (usually by a third artist, the remixer)."
);

named_node!(
    MD,
    NS_BASE,
    "MD",
    "Mini Disc used as medium to record a musical manifestation."
);

named_node!(
    MEDIA_TYPE,
    NS_BASE,
    "media_type",
    "The mediatype (file format or MIME type, or physical medium) of a musical manifestation, e.g. a MP3, CD or vinyl."
);

named_node!(
    MEDIUM,
    NS_BASE,
    "Medium",
    "A means or instrumentality for storing or communicating musical manifestation."
);

named_node!(
    MEDLEY_OF,
    NS_BASE,
    "medley_of",
    "Indicates that a musical expression is a medley of several other musical expressions. This means that the orignial musical expression were rearranged to create a new musical expression in the form of a medley."
);

named_node!(
    MEMBER,
    NS_BASE,
    "member",
    "Indicates a member of a musical group"
);

named_node!(
    MEMBER_OF,
    NS_BASE,
    "member_of",
    "Inverse of the foaf:member property"
);

named_node!(
    MEMBERSHIP_CLASS,
    NS_BASE,
    "Membership",
    "A membership event, where one or several people belongs to a group during a particular time period."
);

named_node!(
    MEMBERSHIP,
    NS_BASE,
    "membership",
    "Relates an agent with related membership events"
);

named_node!(
    METER,
    NS_BASE,
    "meter",
    "Associates a musical work or a score with its meter"
);

named_node!(
    MOVEMENT_CLASS,
    NS_BASE,
    "Movement",
    "A movement is a self-contained part of a musical work. While individual or selected movements from a composition are sometimes performed separately, a performance of the complete work requires all the movements to be performed in succession. Often a composer attempts to interrelate the movements thematically, or sometimes in more subtle ways, in order that the individual movements exert a cumulative effect. In some forms, composers sometimes link the movements, or ask for them to be played without a pause between them."
);

named_node!(
    MOVEMENT,
    NS_BASE,
    "movement",
    "Indicates that a musical work has movements"
);

named_node!(
    MOVEMENT_NUMBER,
    NS_BASE,
    "movement_number",
    "Indicates the position of a movement in a musical work."
);

named_node_deprecated!(
    DEPRECATED_MOVEMENT_NUM,
    NS_BASE,
    "movementNum",
    "Legacy spelling of `mo:movement_number`.",
    "",
    "Use this instead: mo:movement_number"
);

named_node!(
    MUSICAL_EXPRESSION,
    NS_BASE,
    "MusicalExpression",
    "The intellectual or artistic realization of a work in the form of alpha-numeric, musical, or choreographic notation, sound, etc., or any combination of such forms. For example: Work #1 Franz Schubert's Trout quintet Expression #1 the composer's score Expression #2 sound issued from the performance by the Amadeus Quartet and Hephzibah Menuhin on piano Expression #3 sound issued from the performance by the Cleveland Quartet and Yo-Yo Ma on the cello . . . . The Music Ontology defines the following sub-concepts of a MusicalExpression, which should be used instead of MusicalExpression itself: Score (the result of an arrangement), Sound (produced during a performance), Signal. However, it is possible to stick to FRBR and bypass the worflow mechanism this ontology defines by using the core FRBR properties on such objects. But it is often better to use events to interconnect such expressions (allowing to go deeply into the production process - `this performer was playing this particular instrument at that particular time')."
);

named_node!(
    MUSICAL_ITEM,
    NS_BASE,
    "MusicalItem",
    "A single exemplar of a musical expression. For example, it could be a single exemplar of a CD. This is normally an single object (a CD) possessed by somebody. From the FRBR final report: The entity defined as item is a concrete entity. It is in many instances a single physical object (e.g., a copy of a one-volume monograph, a single audio cassette, etc.). There are instances, however, where the entity defined as item comprises more than one physical object (e.g., a monograph issued as two separately bound volumes, a recording issued on three separate compact discs, etc.). In terms of intellectual content and physical form, an item exemplifying a manifestation is normally the same as the manifestation itself. However, variations may occur from one item to another, even when the items exemplify the same manifestation, where those variations are the result of actions external to the intent of the producer of the manifestation (e.g., damage occurring after the item was produced, binding performed by a library, etc.)."
);

named_node!(
    MUSICAL_MANIFESTATION,
    NS_BASE,
    "MusicalManifestation",
    r#"This entity is related to the edition/production/publication of a musical expression (musical manifestation are closely related with the music industry (their terms, concepts, definitions, methods (production, publication, etc.), etc.) From the FRBR final report: The entity defined as manifestation encompasses a wide range of materials, including manuscripts, books, periodicals, maps, posters, sound recordings, films, video recordings, CD-ROMs, multimedia kits, etc. As an entity, manifestation represents all the physical objects that bear the same characteristics, in respect to both intellectual content and physical form. Work #1 J. S. Bach's Six suites for unaccompanied cello Expression #1 sound issued during the performance by Janos Starker recorded in 1963 and 1965 o Manifestation #1 recordings released on 33 1/3 rpm sound discs in 1965 by Mercury o Manifestation #2 recordings re-released on compact disc in 1991 by Mercury Expression #2 sound issued during the performances by Yo-Yo Ma recorded in 1983 o Manifestation #1 recordings released on 33 1/3 rpm sound discs in 1983 by CBS Records o Manifestation #2 recordings re-released on compact disc in 1992 by CBS Records Changes that occur deliberately or even inadvertently in the production process that affect the copies result, strictly speaking, in a new manifestation. A manifestation resulting from such a change may be identified as a particular "state" or "issue" of the publication. Changes that occur to an individual copy after the production process is complete (e.g., the loss of a page, rebinding, etc.) are not considered to result in a new manifestation. That copy is simply considered to be an exemplar (or item) of the manifestation that deviates from the copy as produced. With the entity defined as manifestation we can describe the physical characteristics of a set of items and the characteristics associated with the production and distribution of that set of items that may be important factors in enabling users to choose a manifestation appropriate to their physical needs and constraints, and to identify and acquire a copy of that manifestation. Defining manifestation as an entity also enables us to draw relationships between specific manifestations of a work. We can use the relationships between manifestations to identify, for example, the specific publication that was used to create a microreproduction."#
);

named_node!(
    MUSICAL_WORK,
    NS_BASE,
    "MusicalWork",
    "Distinct intellectual or artistic musical creation. From the FRBR final report: A work is an abstract entity; there is no single material object one can point to as the work. We recognize the work through individual realizations or expressions of the work, but the work itself exists only in the commonality of content between and among the various expressions of the work. When we speak of Homer's Iliad as a work, our point of reference is not a particular recitation or text of the work, but the intellectual creation that lies behind all the various expressions of the work. For example: work #1 J. S. Bach's The art of the fugue"
);

named_node!(
    MUSIC_ARTIST,
    NS_BASE,
    "MusicArtist",
    "A person or a group of people (or a computer :-) ), whose musical creative work shows sensitivity and imagination"
);

named_node!(
    MUSICBRAINZ,
    NS_BASE,
    "musicbrainz",
    "Linking an agent, a track or a record to its corresponding Musicbrainz page."
);

named_node!(
    MUSICBRAINZ_GUID,
    NS_BASE,
    "musicbrainz_guid",
    "Links an object to the corresponding Musicbrainz identifier"
);

named_node!(
    MUSIC_GROUP,
    NS_BASE,
    "MusicGroup",
    "Group of musicians, or musical ensemble, usually popular or folk, playing parts of or improvising off of a musical arrangement."
);

named_node!(
    MUSICMOZ,
    NS_BASE,
    "musicmoz",
    "Used to link an artist, a musical work or the expression of a musical work to its corresponding MusicMoz page."
);

named_node!(
    MYSPACE,
    NS_BASE,
    "myspace",
    "Used to link a person to its corresponding MySpace page."
);

named_node!(
    OFFICIAL,
    NS_BASE,
    "official",
    "Any musical work or the expression of a musical work officially sanctioned by the artist and/or their corporate body."
);

named_node!(
    OLGA,
    NS_BASE,
    "olga",
    "Used to link a track to a tabulature file for track in the On-Line Guitar Archive."
);

named_node!(
    ONLINECOMMUNITY,
    NS_BASE,
    "onlinecommunity",
    "Used to link a person with an online community web page like a blog, a wiki, a forum, a livejournal page, Etc."
);

named_node!(
    OPUS,
    NS_BASE,
    "opus",
    "Used to define a creative work, especially a musical composition numbered to designate the order of a composer's works."
);

named_node!(
    ORCHESTRATION,
    NS_BASE,
    "Orchestration",
    "Orchestration includes, in addition to instrumentation, the handling of groups of instruments and their balance and interaction."
);

named_node!(
    ORIGIN,
    NS_BASE,
    "origin",
    "Relates an artist to its geographic origin"
);

named_node!(
    OTHER_RELEASE_OF,
    NS_BASE,
    "other_release_of",
    "Indicates that two musical manifestations are essentially the same."
);

named_node!(
    PAID_DOWNLOAD,
    NS_BASE,
    "paid_download",
    "Provide a link from an artist to a web page where all of that artist's musical work is available for some money, or a link from a manifestation (record/track, for example) to a web page providing a paid access to this manifestation."
);

named_node_deprecated!(
    DEPRECATED_PAIDDOWNLOAD,
    NS_BASE,
    "paiddownload",
    "Legacy spelling of `mo:paid_download`.",
    "",
    "Use this instead: mo:paid_download"
);

named_node!(
    PERFORMANCE,
    NS_BASE,
    "Performance",
    "A performance event. It might include as agents performers, engineers, conductors, or even listeners. It might include as factors a score, a MusicalWork, musical instruments. It might produce a sound:-)"
);

named_node!(
    PERFORMANCE_OF,
    NS_BASE,
    "performance_of",
    "Associates a Performance to a musical work or an arrangement that is being used as a factor in it. For example, I might use this property to attach the Magic Flute musical work to a particular Performance."
);

named_node!(
    PERFORMED,
    NS_BASE,
    "performed",
    "Relates agents to the performances they were performing in"
);

named_node!(
    PERFORMED_IN,
    NS_BASE,
    "performed_in",
    "Associates a Musical Work or an Score to Performances in which they were a factor. For example, I might use this property in order to associate the Magic Flute to a particular performance at the Opera Bastille last year."
);

named_node!(
    PERFORMER,
    NS_BASE,
    "performer",
    "Relates a performance to the performer involved"
);

named_node!(
    PERFORMER_CLASS,
    NS_BASE,
    "Performer",
    "A person or a group of people performing music."
);

named_node!(
    POSSESS_ITEM,
    NS_BASE,
    "possess_item",
    "A person, a group of person or an organization possessing an exemplar of a single manifestation."
);

named_node!(
    PREVIEW,
    NS_BASE,
    "preview",
    "Relates a musical manifestation to a musical item, this last one being a preview of the first"
);

named_node!(
    PREVIEW_DOWNLOAD,
    NS_BASE,
    "preview_download",
    "This property can be used to link from a person to the website where they make previews of their works available, or from a manifestation (a track or an album, for example) to a web page where a preview download is available. This property MUST be used only if the content is just available through a web page (holding, for example a Flash application) - it is better to link to actual content directly through the use of mo:available_as and mo:Stream, mo:Torrent or mo:ED2K, etc. Therefore, Semantic Web user agents that don't know how to read HTML and even less to rip streams from Flash applications can still access the audio content."
);

named_node!(
    PRIMARY_INSTRUMENT,
    NS_BASE,
    "primary_instrument",
    "Indicates that an artist primarily plays an instrument, or that a member was primarily playing a particular instrument during his membership"
);

named_node!(
    PRODUCED,
    NS_BASE,
    "produced",
    "Used to relate an person or a group of person who produced the manifestation of a work."
);

named_node!(
    PRODUCED_SCORE,
    NS_BASE,
    "produced_score",
    "Associates an arrangement or a composition event to a score product (score here does not refer to a published score, but more an abstract arrangement of a particular work)."
);

named_node!(
    PRODUCED_SIGNAL,
    NS_BASE,
    "produced_signal",
    "Associates a Recording to the outputted signal."
);

named_node!(
    PRODUCED_SIGNAL_GROUP,
    NS_BASE,
    "produced_signal_group",
    "Associates a recording session with a group of master signals produced by it."
);

named_node!(
    PRODUCED_SOUND,
    NS_BASE,
    "produced_sound",
    "Associates a Performance to a physical Sound that is being produced by it."
);

named_node!(
    PRODUCED_WORK,
    NS_BASE,
    "produced_work",
    "Associates a composition event to the produced MusicalWork. For example, this property could link the event corresponding to the composition of the Magic Flute in 1782 to the Magic Flute musical work itself. This musical work can then be used in particular performances."
);

named_node!(
    PRODUCER,
    NS_BASE,
    "producer",
    "Used to relate the manifestation of a work to a person or a group of person who produced it."
);

named_node_deprecated!(
    DEPRECATED_PRODUCES_SIGNAL,
    NS_BASE,
    "producesSignal",
    "Legacy spelling of `mo:produced_signal`.",
    "",
    "Use this instead: mo:produced_signal"
);

named_node_deprecated!(
    DEPRECATED_PRODUCES_SOUND,
    NS_BASE,
    "producesSound",
    "Legacy spelling of `mo:produced_sound`.",
    "",
    "Use this instead: mo:produced_sound"
);

named_node_deprecated!(
    DEPRECATED_PRODUCES_WORK,
    NS_BASE,
    "producesWork",
    "Legacy spelling of `mo:produced_work`.",
    "",
    "Use this instead: mo:produced_work"
);

named_node_deprecated!(
    DEPRECATED_PRODUCT_OF_COMPOSITION,
    NS_BASE,
    "productOfComposition",
    "Legacy spelling of `mo:composed_in`.",
    "",
    "Use this instead: mo:composed_in"
);

named_node!(
    PROMOTION,
    NS_BASE,
    "promotion",
    "A giveaway musical work or the expression of a musical work intended to promote an upcoming official musical work or the expression of a musical work."
);

named_node!(
    PUBLICATION_OF,
    NS_BASE,
    "publication_of",
    "Link a particular manifestation to the related signal, score, libretto, or lyrics"
);

named_node_deprecated!(
    DEPRECATED_PUBLICATION_OF,
    NS_BASE,
    "publicationOf",
    "Legacy spelling of `mo:publication_of`.",
    "",
    "Use this instead: mo:publication_of"
);

named_node!(
    PUBLISHED,
    NS_BASE,
    "published",
    "Used to relate an person or a group of person who published the manifestation of a work."
);

named_node!(
    PUBLISHED_AS,
    NS_BASE,
    "published_as",
    "Links a musical expression (e.g. a signal or a score) to one of its manifestations (e.g. a track on a particular record or a published score)."
);

named_node_deprecated!(
    DEPRECATED_PUBLISHED_AS,
    NS_BASE,
    "publishedAs",
    "Legacy spelling of `mo:published_as`.",
    "",
    "Use this instead: mo:published_as"
);

named_node!(
    PUBLISHED_LIBRETTO,
    NS_BASE,
    "PublishedLibretto",
    "A published libretto"
);

named_node!(
    PUBLISHED_LYRICS,
    NS_BASE,
    "PublishedLyrics",
    "Published lyrics, as a book or as a text file, for example"
);

named_node!(
    PUBLISHED_SCORE,
    NS_BASE,
    "PublishedScore",
    "A published score (subclass of MusicalManifestation)"
);

named_node!(
    PUBLISHER,
    NS_BASE,
    "publisher",
    "Used to relate a musical manifestation to a person or a group of person who published it."
);

named_node!(
    PUBLISHING_LOCATION,
    NS_BASE,
    "publishing_location",
    "Relates a musical manifestation to its publication location."
);

named_node_deprecated!(
    DEPRECATED_PUBLISHING_LOCATION,
    NS_BASE,
    "publishingLocation",
    "Legacy spelling of `mo:publishing_location`.",
    "",
    "Use this instead: mo:publishing_location"
);

named_node!(
    PUID,
    NS_BASE,
    "puid",
    "Link a signal to the PUIDs associated with it, that is, PUID computed from MusicalItems (mo:AudioFile) derived from this signal. PUIDs (Portable Unique IDentifier) are the IDs used in the proprietary MusicDNS AudioFingerprinting system which is operated by MusicIP. Using PUIDs, one (with some luck) can identify the Signal object associated with a particular audio file, therefore allowing to access further information (on which release this track is featured? etc.). Using some more metadata one can identify the particular Track corresponding to the audio file (a track on a particular release)."
);

named_node!(
    RECORD,
    NS_BASE,
    "record",
    "Associates a release with the records it contains. A single release can be associated with multiple records, for example for a multi-disc release."
);

named_node!(
    RECORD_CLASS,
    NS_BASE,
    "Record",
    "A published record (manifestation which first aim is to render the product of a recording)"
);

named_node!(
    RECORD_COUNT,
    NS_BASE,
    "record_count",
    "Associates a release with the number of records it contains, e.g. the number of discs it contains in the case of a multi-disc release."
);

named_node!(
    RECORD_NUMBER,
    NS_BASE,
    "record_number",
    "Indicates the position of a record in a release (e.g. a 2xLP, etc.)."
);

named_node!(
    RECORD_SIDE,
    NS_BASE,
    "record_side",
    r#"Associates the side on a vinyl record, where a track is located, e.g. A, B, C, etc. This property can then also be used in conjunction with mo:track_number, so that one can infer e.g. "A1", that means, track number 1 on side A."#
);

named_node!(
    RECORDED_AS,
    NS_BASE,
    "recorded_as",
    r#"This is a shortcut property, allowing to bypass all the Sound/Recording steps. This property allows to directly link a Performance to the recorded Signal. This is recommended for "normal" users. However, advanced users wanting to express things such as the location of the microphone will have to create this shortcut as well as the whole workflow, in order to let the "normal" users access simply the, well, simple information:-) ."#
);

named_node!(
    RECORDED_IN,
    NS_BASE,
    "recorded_in",
    "Associates a physical Sound to a Recording event where it is being used in order to produce a signal. For example, I might use this property to associate the sound produced by a particular performance of the magic flute to a given recording, done using my cell-phone."
);

named_node_deprecated!(
    DEPRECATED_RECORDED_AS,
    NS_BASE,
    "recordedAs",
    "Legacy spelling of `mo:recorded_as`.",
    "",
    "Use this instead: mo:recorded_as"
);

named_node!(
    RECORDING,
    NS_BASE,
    "Recording",
    r#"A recording event. Takes a sound as a factor to produce a signal (analog or digital). The location of such events (if any) is the actual location of the corresponding microphone or the "recording device"."#
);

named_node!(
    RECORDING_OF,
    NS_BASE,
    "recording_of",
    "Associates a Recording event to a physical Sound being recorded. For example, I might use this property to associate a given recording, done using my cell phone, to the sound produced by a particular performance of the magic flute."
);

named_node!(
    RECORDING_SESSION,
    NS_BASE,
    "RecordingSession",
    "A set of performances/recordings/mastering events. This event can be decomposed in its constituent events using event:sub_event"
);

named_node!(
    RECORDS,
    NS_BASE,
    "records",
    "This is the inverse of the shortcut property recordedAs, allowing to relate directly a performance to a signal."
);

named_node!(
    RELEASE,
    NS_BASE,
    "release",
    "Associates a release with the corresponding release event"
);

named_node!(
    RELEASE_CLASS,
    NS_BASE,
    "Release",
    "A specific release, with barcode, box, liner notes, cover art, and a number of records"
);

named_node!(
    RELEASE_STATUS,
    NS_BASE,
    "release_status",
    "Relates a musical manifestation to its release status (bootleg, ...)"
);

named_node!(
    RELEASE_TYPE,
    NS_BASE,
    "release_type",
    "Relates a musical manifestation to its release type (interview, spoken word, album, ...)"
);

named_node!(
    RELEASE_EVENT,
    NS_BASE,
    "ReleaseEvent",
    "A release event, in a particular place (e.g. a country) at a particular time. Other factors of this event might include cover art, liner notes, box, etc. or a release grouping all these."
);

named_node_deprecated!(
    DEPRECATED_RELEASE_STATUS,
    NS_BASE,
    "releaseStatus",
    "Legacy spelling of `mo:release_status`.",
    "",
    "Use this instead: mo:release_status"
);

named_node!(
    RELEASE_STATUS_CLASS,
    NS_BASE,
    "ReleaseStatus",
    "Musical manifestation release status."
);

named_node_deprecated!(
    DEPRECATED_RELEASE_TYPE,
    NS_BASE,
    "releaseType",
    "Legacy spelling of `mo:release_type`.",
    "",
    "Use this instead: mo:release_type"
);

named_node!(
    RELEASE_TYPE_CLASS,
    NS_BASE,
    "ReleaseType",
    r#"Release type of a particular manifestation, such as "album" or "interview"..."#
);

named_node!(
    REMASTER_OF,
    NS_BASE,
    "remaster_of",
    "This relates two musical work or the expression of a musical work, where one is a remaster of the other. A remaster is a new version made for release from source recordings that were earlier released separately. This is usually done to improve the audio quality or adjust for more modern playback equipment. The process generally doesn't involve changing the music in any artistically important way. It may, however, result in tracks that are a few seconds longer or shorter."
);

named_node!(
    REMIX,
    NS_BASE,
    "remix",
    "Musical manifestation that primarily contains remixed material. This is a type of MusicalManifestation defined by the musical industry."
);

named_node!(
    REMIX_OF,
    NS_BASE,
    "remix_of",
    "Used to relate the remix of a musical work in a substantially altered version produced by mixing together individual tracks or segments of an original musical source work."
);

named_node!(
    REMIXED,
    NS_BASE,
    "remixed",
    "Used to relate an artist who remixed a musical work or the expression of a musical work. This involves taking just one other musical work and using audio editing to make it sound like a significantly different, but usually still recognisable, song. It can be used to link an artist to a single song that they remixed, or, if they remixed an entire musical work."
);

named_node!(
    REMIXER,
    NS_BASE,
    "remixer",
    "Used to relate a musical work or the expression of a musical work to an artist who remixed it. This involves taking just one other musical work and using audio editing to make it sound like a significantly different, but usually still recognisable, song. It can be used to link an artist to a single song that they remixed, or, if they remixed an entire musical work."
);

named_node!(
    REVIEW,
    NS_BASE,
    "review",
    "Used to link a work or the expression of a work to a review. The review does not have to be open content, as long as it is accessible to the general internet population."
);

named_node!(
    SACD,
    NS_BASE,
    "SACD",
    "Super Audio Compact Disc used as medium to record a musical manifestation."
);

named_node!(
    SAMPLE_RATE,
    NS_BASE,
    "sample_rate",
    "Associates a digital signal to its sample rate. It might be easier to express it this way instead of creating a timeline and a sampling timeline."
);

named_node!(
    SAMPLED,
    NS_BASE,
    "sampled",
    "Used to relate an artist who sampled a Signal."
);

named_node!(
    SAMPLED_VERSION,
    NS_BASE,
    "sampled_version",
    "Associates an analog signal with a sampled version of it"
);

named_node!(
    SAMPLED_VERSION_OF,
    NS_BASE,
    "sampled_version_of",
    "Associates a digital signal with the analog version of it"
);

named_node_deprecated!(
    DEPRECATED_SAMPLED_VERSION_OF,
    NS_BASE,
    "sampledVersionOf",
    "Legacy spelling of `mo:sampled_version_of`.",
    "",
    "Use this instead: mo:sampled_version_of"
);

named_node!(
    SAMPLER,
    NS_BASE,
    "sampler",
    "Used to relate the signal of a musical work to an artist who sampled it."
);

named_node_deprecated!(
    DEPRECATED_SAMPLE_RATE,
    NS_BASE,
    "sampleRate",
    "Legacy spelling of `mo:sample_rate`.",
    "",
    "Use this instead: mo:sample_rate"
);

named_node!(
    SCORE,
    NS_BASE,
    "Score",
    r#"Here, we are dealing with the informational object (the MusicalExpression), not the actually "published" score. This may be, for example, the product of an arrangement process."#
);

named_node!(
    SELL_ITEM,
    NS_BASE,
    "sell_item",
    "A person, a group of person or an organization selling an exemplar of a single manifestation."
);

named_node!(
    SHOW,
    NS_BASE,
    "Show",
    r#"A show - a musical event lasting several days, in a particular venue. Examples can be "The Magic Flute" at the Opera Bastille, August 2005, or a musical in the west end..."#
);

named_node!(
    SIGNAL,
    NS_BASE,
    "signal",
    "Associates a group of signals with one of the signals it contains"
);

named_node!(
    SIGNAL_CLASS,
    NS_BASE,
    "Signal",
    "A subclass of MusicalExpression, representing a signal, for example a master signal produced by a performance and a recording."
);

named_node!(
    SIGNAL_GROUP,
    NS_BASE,
    "SignalGroup",
    "A musical expression representing a group of signals, for example a set of masters resulting from a whole recording/mastering session."
);

named_node_deprecated!(
    DEPRECATED_SIGNAL_TIME,
    NS_BASE,
    "signalTime",
    "Legacy spelling of `mo:time`.",
    "",
    "Use this instead: mo:time"
);

named_node!(
    SIMILAR_TO,
    NS_BASE,
    "similar_to",
    "A similarity relationships between two objects (so far, either an agent, a signal or a genre, but this could grow). This relationship is pretty general and doesn't make any assumptions on how the similarity claim was derived. Such similarity statements can come from a range of different sources (Musicbrainz similarities between artists, or coming from some automatic content analysis). However, the origin of such statements should be kept using a named graph approach - and ultimately, the documents providing such statements should attach some metadata to themselves (confidence of the claim, etc.)."
);

named_node!(
    SINGER,
    NS_BASE,
    "singer",
    "Associates a performance to a musical artist singing in it"
);

named_node!(
    SINGLE,
    NS_BASE,
    "single",
    "A single or record single is a type of release, typically a recording of two tracks. In most cases, the single is a song that is released separately from an album, but it can still appear on an album."
);

named_node!(
    SOLO_MUSIC_ARTIST,
    NS_BASE,
    "SoloMusicArtist",
    "Single person whose musical creative work shows sensitivity and imagination."
);

named_node!(
    SOUND,
    NS_BASE,
    "Sound",
    "A subclass of MusicalExpression, representing a sound. Realisation of a MusicalWork during a musical Performance."
);

named_node!(
    SOUND_ENGINEER,
    NS_BASE,
    "SoundEngineer",
    "A person who records, mixes or masters sound."
);

named_node!(
    SOUNDTRACK,
    NS_BASE,
    "soundtrack",
    "Sound recording on a narrow strip of a motion picture film. This is a type of MusicalManifestation defined by the musical industry."
);

named_node!(
    SPOKENWORD,
    NS_BASE,
    "spokenword",
    "Spoken word is a form of music or artistic performance in which lyrics, poetry, or stories are spoken rather than sung. Spoken-word is often done with a musical background, but emphasis is kept on the speaker. This is a type of MusicalManifestation defined by the musical industry."
);

named_node!(
    STREAM,
    NS_BASE,
    "Stream",
    "Transmission over a network used as medium to broadcast a musical manifestation"
);

named_node!(
    SUPPORTING_MUSICIAN,
    NS_BASE,
    "supporting_musician",
    "Used to relate an artist doing long-time instrumental or vocal support for another artist."
);

named_node!(
    TEMPO,
    NS_BASE,
    "tempo",
    "Rate of speed or pace of music. Tempo markings are traditionally given in Italian; common markings include: grave (solemn; very, very slow); largo (broad; very slow); adagio (quite slow); andante (a walking pace); moderato (moderate); allegro (fast; cheerful); vivace (lively); presto (very fast); accelerando (getting faster); ritardando (getting slower); and a tempo (in time; returning to the original pace)."
);

named_node!(
    TEXT,
    NS_BASE,
    "text",
    "Associates lyrics with their text."
);

named_node!(
    TIME,
    NS_BASE,
    "time",
    "Associates a Signal to a time object - its actual domain"
);

named_node!(
    TORRENT,
    NS_BASE,
    "Torrent",
    "Something available on the Bittorrent peer-2-peer filesharing network"
);

named_node!(
    TRACK,
    NS_BASE,
    "track",
    "Indicates a part of a musical manifestation - in this particular case, a track."
);

named_node!(
    TRACK_CLASS,
    NS_BASE,
    "Track",
    "A track on a particular record"
);

named_node!(
    TRACK_COUNT,
    NS_BASE,
    "track_count",
    "The track count of a record"
);

named_node!(
    TRACK_NUMBER,
    NS_BASE,
    "track_number",
    "Indicates the position of a track on a record medium (a CD, etc.)."
);

named_node_deprecated!(
    DEPRECATED_TRACK_NUM,
    NS_BASE,
    "trackNum",
    "Legacy spelling of `mo:track_number`.",
    "",
    "Use this instead: mo:track_number"
);

named_node!(
    TRANSCRIPTION,
    NS_BASE,
    "Transcription",
    "Transcription event"
);

named_node!(
    TRANSLATION_OF,
    NS_BASE,
    "translation_of",
    "Indicates that a work or the expression of a work has translated or transliterated into another expression of a work."
);

named_node!(
    TRIBUTE_TO,
    NS_BASE,
    "tribute_to",
    "Indicates a musical work or the expression of a musical work that is a tribute to an artist - normally consisting of music being composed by the artist but performed by other artists."
);

named_node!(
    TRMID,
    NS_BASE,
    "trmid",
    "Indicates the TRMID of a track. TRM IDs are MusicBrainz' old AudioFingerprinting system. TRM (TRM Recognizes Music) IDs are (somewhat) unique ids that represent the audio signature of a musical piece (see AudioFingerprint)."
);

named_node!(
    UPC,
    NS_BASE,
    "upc",
    r#"UPC stands for "Universal Product Code", which was the original barcode used in the United States and Canada. The UPC (now officially EAN.UCC-12 is a numerical method of identifying products without redundancy worldwide for all types of products in the retail sector. The EAN is a superset of the original UPC increasing the digits to 13 with the prefix 0 reserved for UPC. As of 2005, manufacturers are only allowed to use the new 13-digit codes on their items, rather than having two separate numbers."#
);

named_node_deprecated!(
    DEPRECATED_USED_IN_PERFORMANCE,
    NS_BASE,
    "usedInPerformance",
    "Legacy spelling of `mo:performed_in`.",
    "",
    "Use this instead: mo:performed_in"
);

named_node_deprecated!(
    DEPRECATED_USED_IN_RECORDING,
    NS_BASE,
    "usedInRecording",
    "Legacy spelling of `mo:recorded_in`.",
    "",
    "Use this instead: mo:recorded_in"
);

named_node_deprecated!(
    DEPRECATED_USES_SOUND,
    NS_BASE,
    "usesSound",
    "Legacy spelling of `mo:recording_of`.",
    "",
    "Use this instead: mo:recording_of"
);

named_node_deprecated!(
    DEPRECATED_USES_WORK,
    NS_BASE,
    "usesWork",
    "Legacy spelling of `mo:performance_of`.",
    "",
    "Use this instead: mo:performance_of"
);

named_node!(
    UUID,
    NS_BASE,
    "uuid",
    "Links an object to an universally unique identifier for it."
);

named_node!(
    VINYL,
    NS_BASE,
    "Vinyl",
    "Vinyl used as medium to record a musical manifestation"
);

named_node!(
    WANT_ITEM,
    NS_BASE,
    "want_item",
    "A person, a group of person or an organization wanting an exemplar of a single manifestation."
);

named_node!(
    WIKIPEDIA,
    NS_BASE,
    "wikipedia",
    "Used to link an work, an expression of a work, a manifestation of a work, a person, an instrument or a musical genre to its corresponding WikiPedia page. The full URL should be used, not just the WikiName."
);

vocabulary!(
    Mo,
    "The Music Ontology",
    namespace_term,
    [
        ACTIVITY_CLASS,
        ACTIVITY,
        ACTIVITY_END,
        ACTIVITY_START,
        ALBUM,
        AMAZON_ASIN,
        ANALOG_SIGNAL,
        ARRANGED_IN,
        ARRANGEMENT,
        ARRANGEMENT_OF,
        ARRANGER,
        ARTIST,
        AUDIOBOOK,
        AUDIO_FILE,
        AVAILABLE_AS,
        DEPRECATED_AVAILABLE_AS,
        BIOGRAPHY,
        BITS_PER_SAMPLE,
        BOOTLEG,
        BPM,
        CATALOGUE_NUMBER,
        CD,
        CHANNELS,
        COLLABORATED_WITH,
        COMPILATION,
        COMPILATION_OF,
        COMPILED,
        COMPILER,
        COMPOSED_IN,
        COMPOSER_CLASS,
        COMPOSER,
        COMPOSITION,
        CONDUCTED,
        CONDUCTOR_CLASS,
        CONDUCTOR,
        CONTAINS_SAMPLE_FROM,
        CORPORATE_BODY,
        DAT,
        DCC,
        DERIVED_FROM,
        DIGITAL_SIGNAL,
        DISCOGRAPHY,
        DISCOGS,
        DJMIX_OF,
        DJMIXED,
        DJMIXED_BY,
        DOWNLOAD,
        DURATION,
        DVDA,
        EAN,
        ED_2_K,
        ENCODES,
        ENCODING,
        ENGINEER,
        ENGINEERED,
        EP,
        EVENT_HOMEPAGE,
        DEPRECATED_EVENT_HOME_PAGE,
        EXCHANGE_ITEM,
        FANPAGE,
        FESTIVAL,
        FREE_DOWNLOAD,
        DEPRECATED_FREEDOWNLOAD,
        GENRE,
        GENRE_CLASS,
        GRID,
        GROUP,
        GTIN,
        HAS_TRACK,
        HEADLINER,
        HOMEPAGE,
        IMAGE,
        IMDB,
        INSTRUMENT,
        INSTRUMENT_CLASS,
        INSTRUMENTATION,
        INTERPRETER,
        INTERVIEW,
        IPI,
        ISMN,
        ISRC,
        ISWC,
        ITEM,
        KEY,
        LABEL_CLASS,
        LABEL,
        LC,
        LEVEL,
        LIBRETTO,
        LICENCE,
        LISTENED,
        LISTENER,
        LISTENER_CLASS,
        LIVE,
        LYRICS_CLASS,
        LYRICS,
        MAGNETIC_TAPE,
        MAILORDER,
        MASHUP_OF,
        MD,
        MEDIA_TYPE,
        MEDIUM,
        MEDLEY_OF,
        MEMBER,
        MEMBER_OF,
        MEMBERSHIP_CLASS,
        MEMBERSHIP,
        METER,
        MOVEMENT_CLASS,
        MOVEMENT,
        MOVEMENT_NUMBER,
        DEPRECATED_MOVEMENT_NUM,
        MUSICAL_EXPRESSION,
        MUSICAL_ITEM,
        MUSICAL_MANIFESTATION,
        MUSICAL_WORK,
        MUSIC_ARTIST,
        MUSICBRAINZ,
        MUSICBRAINZ_GUID,
        MUSIC_GROUP,
        MUSICMOZ,
        MYSPACE,
        OFFICIAL,
        OLGA,
        ONLINECOMMUNITY,
        OPUS,
        ORCHESTRATION,
        ORIGIN,
        OTHER_RELEASE_OF,
        PAID_DOWNLOAD,
        DEPRECATED_PAIDDOWNLOAD,
        PERFORMANCE,
        PERFORMANCE_OF,
        PERFORMED,
        PERFORMED_IN,
        PERFORMER,
        PERFORMER_CLASS,
        POSSESS_ITEM,
        PREVIEW,
        PREVIEW_DOWNLOAD,
        PRIMARY_INSTRUMENT,
        PRODUCED,
        PRODUCED_SCORE,
        PRODUCED_SIGNAL,
        PRODUCED_SIGNAL_GROUP,
        PRODUCED_SOUND,
        PRODUCED_WORK,
        PRODUCER,
        DEPRECATED_PRODUCES_SIGNAL,
        DEPRECATED_PRODUCES_SOUND,
        DEPRECATED_PRODUCES_WORK,
        DEPRECATED_PRODUCT_OF_COMPOSITION,
        PROMOTION,
        PUBLICATION_OF,
        DEPRECATED_PUBLICATION_OF,
        PUBLISHED,
        PUBLISHED_AS,
        DEPRECATED_PUBLISHED_AS,
        PUBLISHED_LIBRETTO,
        PUBLISHED_LYRICS,
        PUBLISHED_SCORE,
        PUBLISHER,
        PUBLISHING_LOCATION,
        DEPRECATED_PUBLISHING_LOCATION,
        PUID,
        RECORD,
        RECORD_CLASS,
        RECORD_COUNT,
        RECORD_NUMBER,
        RECORD_SIDE,
        RECORDED_AS,
        RECORDED_IN,
        DEPRECATED_RECORDED_AS,
        RECORDING,
        RECORDING_OF,
        RECORDING_SESSION,
        RECORDS,
        RELEASE,
        RELEASE_CLASS,
        RELEASE_STATUS,
        RELEASE_TYPE,
        RELEASE_EVENT,
        DEPRECATED_RELEASE_STATUS,
        RELEASE_STATUS_CLASS,
        DEPRECATED_RELEASE_TYPE,
        RELEASE_TYPE_CLASS,
        REMASTER_OF,
        REMIX,
        REMIX_OF,
        REMIXED,
        REMIXER,
        REVIEW,
        SACD,
        SAMPLE_RATE,
        SAMPLED,
        SAMPLED_VERSION,
        SAMPLED_VERSION_OF,
        DEPRECATED_SAMPLED_VERSION_OF,
        SAMPLER,
        DEPRECATED_SAMPLE_RATE,
        SCORE,
        SELL_ITEM,
        SHOW,
        SIGNAL,
        SIGNAL_CLASS,
        SIGNAL_GROUP,
        DEPRECATED_SIGNAL_TIME,
        SIMILAR_TO,
        SINGER,
        SINGLE,
        SOLO_MUSIC_ARTIST,
        SOUND,
        SOUND_ENGINEER,
        SOUNDTRACK,
        SPOKENWORD,
        STREAM,
        SUPPORTING_MUSICIAN,
        TEMPO,
        TEXT,
        TIME,
        TORRENT,
        TRACK,
        TRACK_CLASS,
        TRACK_COUNT,
        TRACK_NUMBER,
        DEPRECATED_TRACK_NUM,
        TRANSCRIPTION,
        TRANSLATION_OF,
        TRIBUTE_TO,
        TRMID,
        UPC,
        DEPRECATED_USED_IN_PERFORMANCE,
        DEPRECATED_USED_IN_RECORDING,
        DEPRECATED_USES_SOUND,
        DEPRECATED_USES_WORK,
        UUID,
        VINYL,
        WANT_ITEM,
        WIKIPEDIA,
    ]
);
