// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use cli_utils as _;

pub mod cli;
pub mod config;
pub mod parse;

use std::fs;
use std::io;
use std::path::Path;

use config::Config;
use git_version::git_version;
use oxrdfio::RdfFormat;
use rdfvocab_base::util;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// The RDF format of an ontology file, judged by its extension;
/// Turtle if unknown.
#[must_use]
pub fn rdf_format(ont: &Path) -> RdfFormat {
    util::extract_file_ext(ont)
        .and_then(RdfFormat::from_extension)
        .unwrap_or(RdfFormat::Turtle)
}

/// Declares `pub mod <module>;` in the given Rust file,
/// next to the other module declarations, ordered by name.
/// The file gets created if it does not exist.
/// Returns whether the declaration was added.
///
/// # Errors
///
/// If the file cannot be read or written.
pub fn register_module(lib_file: &Path, module: &str) -> io::Result<bool> {
    const MOD_DECL: &str = "pub mod ";
    let declaration = format!("{MOD_DECL}{module};");
    let content = if util::look_for_file(lib_file)? {
        fs::read_to_string(lib_file)?
    } else {
        String::new()
    };
    let mut lines: Vec<&str> = content.lines().collect();
    if lines.iter().any(|line| line.trim() == declaration) {
        return Ok(false);
    }

    let mut insert_at = None;
    let mut after_last_decl = None;
    for (idx, line) in lines.iter().enumerate() {
        let Some(declared) = line
            .strip_prefix(MOD_DECL)
            .and_then(|rest| rest.strip_suffix(';'))
        else {
            continue;
        };
        if insert_at.is_none() && declared > module {
            insert_at = Some(idx);
        }
        after_last_decl = Some(idx + 1);
    }
    let insert_at = insert_at.or(after_last_decl).unwrap_or(lines.len());
    lines.insert(insert_at, &declaration);

    let mut updated = lines.join("\n");
    updated.push('\n');
    util::write_atomically(lib_file, updated.as_bytes())?;
    Ok(true)
}

#[allow(clippy::doc_markdown)]
/// Generates one of more Rust `vocab` files (for OxRDF)
/// from one or more ontology files.
///
/// # Errors
///
/// - one of the input files cannot be read or parsed
/// - the output directory cannot be created
/// - one of the output files cannot be written
/// - two input files would be written to the same output file
/// - one of the input vocabularies does not have a preferred namespace prefix defined internally
/// - one of the input vocabularies does not have a preferred namespace uri defined internally
/// - the file to declare the modules in cannot be updated
pub fn generate(config: &Config) -> io::Result<()> {
    if util::ensure_dir_exists(&config.out_dir)? {
        tracing::debug!("Created output directory '{}'", config.out_dir.display());
    }
    let mut written_out_files = Vec::new();
    for ont in &config.ontologies {
        let content = fs::read(ont)?;
        let format = rdf_format(ont);
        tracing::debug!("Parsing '{}' as {format} ...", ont.display());

        let rdf_cont = parse::rdf(content.as_slice(), format).map_err(io::Error::other)?;
        let vocab_info = rdf_cont
            .into_vocab_info(config.term_order)
            .map_err(io::Error::other)?;
        let ont_namespace = vocab_info
            .preferred_namespace_prefix
            .clone()
            .or_else(|| {
                ont.file_stem()
                    .map(|stem_os_str| stem_os_str.to_string_lossy().to_string())
            })
            .ok_or_else(|| io::Error::other(format!(
                "For input file '{ont}', we were unable to find a preferred namespace prefix; we checked within the ontology data, and considered the input file-name.",
                ont = ont.display())))?;
        let rust_vocab_src = vocab_info
            .to_str(config.header.as_deref(), config.namespace_term)
            .map_err(io::Error::other)?;
        let out_file = config.out_dir.join(format!("{ont_namespace}.rs"));
        if written_out_files.contains(&out_file) {
            return Err(io::Error::other(format!(
                "Two (or more) input ontologies result in the same output file name: {}; please change that.", out_file.display())));
        }
        if config.force || !util::look_for_file(&out_file)? {
            tracing::info!(
                "Writing {} terms to '{}'",
                vocab_info.subjects.len(),
                out_file.display()
            );
            util::write_atomically(&out_file, rust_vocab_src.as_bytes())?;
        } else {
            tracing::warn!(
                "Keeping existing file '{}'; use --force to overwrite it",
                out_file.display()
            );
        }
        written_out_files.push(out_file);
        if let Some(lib_file) = &config.register_in {
            if register_module(lib_file, &ont_namespace)? {
                tracing::info!(
                    "Declared module '{ont_namespace}' in '{}'",
                    lib_file.display()
                );
            }
        }
    }

    Ok(())
}
