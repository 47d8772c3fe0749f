// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// The order of the terms in a generated module.
///
/// Dictionary coders number the terms in this order,
/// so it has to stay the same once codes were handed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TermOrder {
    /// By local name, case-insensitively;
    /// on a tie, upper case first (`Track` before `track`).
    #[default]
    Name,
    /// As the subjects first appear in the ontology file.
    Source,
}

impl TermOrder {
    pub const NAMES: [&'static str; 2] = ["name", "source"];
}

#[derive(Error, Debug)]
#[error("Unknown term order '{0}'; use one of: name, source")]
pub struct UnknownTermOrder(String);

impl FromStr for TermOrder {
    type Err = UnknownTermOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "source" => Ok(Self::Source),
            _ => Err(UnknownTermOrder(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Ontology files to generate one module each from.
    /// The RDF format is chosen by file extension, defaulting to Turtle.
    pub ontologies: Vec<PathBuf>,
    /// Where the generated modules get written to.
    pub out_dir: PathBuf,
    /// Text to put on top of each generated module,
    /// usually a license header.
    pub header: Option<String>,
    /// Overwrite already existing modules.
    pub force: bool,
    pub term_order: TermOrder,
    /// Make the namespace IRI itself the first term of each vocabulary.
    pub namespace_term: bool,
    /// A Rust file (usually the `lib.rs` of the vocab crate)
    /// to declare each generated module in.
    pub register_in: Option<PathBuf>,
}
