// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs;
use std::path::{Path, PathBuf};

use rdfvocab_vocabgen::config::{Config, TermOrder};
use rdfvocab_vocabgen::{generate, register_module};

const HEADER: &str = "// SPDX-License-Identifier: CC0-1.0";

const MINI_MO: &str = r#"
@prefix mo: <http://purl.org/ontology/mo/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix vann: <http://purl.org/vocab/vann/> .
@prefix vs: <http://www.w3.org/2003/06/sw-vocab-status/ns#> .
@prefix dcterms: <http://purl.org/dc/terms/> .

<http://purl.org/ontology/mo>
    a owl:Ontology ;
    dcterms:title "The Music Ontology" ;
    vann:preferredNamespacePrefix "mo" ;
    vann:preferredNamespaceUri "http://purl.org/ontology/mo/" .

mo:Track a owl:Class ;
    rdfs:comment "A track on a particular record" .

mo:track a owl:ObjectProperty ;
    rdfs:comment "Indicates a part of a musical manifestation" .

mo:trackNum a rdf:Property ;
    vs:term_status "deprecated" .
"#;

fn write_ontology(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn config(ontologies: Vec<PathBuf>, out_dir: PathBuf, force: bool) -> Config {
    Config {
        ontologies,
        out_dir,
        header: Some(HEADER.to_owned()),
        force,
        ..Config::default()
    }
}

#[test]
fn writes_one_module_per_ontology() {
    let dir = tempfile::tempdir().unwrap();
    let ont = write_ontology(dir.path(), "music.ttl", MINI_MO);
    let out_dir = dir.path().join("out");

    generate(&config(vec![ont], out_dir.clone(), false)).unwrap();

    let src = fs::read_to_string(out_dir.join("mo.rs")).unwrap();
    assert!(src.starts_with(HEADER));
    assert!(src.contains("pub const NS_PREFERRED_PREFIX: &str = \"mo\";"));
    assert!(src.contains("    TRACK_CLASS,\n    NS_BASE,\n    \"Track\","));
    assert!(src.contains("    TRACK,\n    NS_BASE,\n    \"track\","));
    assert!(src.contains("named_node_deprecated!(\n    DEPRECATED_TRACK_NUM,"));
    assert!(src.contains("vocabulary!(\n    Mo,\n    \"The Music Ontology\","));
}

#[test]
fn dictionary_compatible_module() {
    let dir = tempfile::tempdir().unwrap();
    let ont = write_ontology(dir.path(), "mo.ttl", MINI_MO);
    let lib_rs = dir.path().join("lib.rs");
    fs::write(&lib_rs, "pub mod foaf;\npub mod owl;\npub mod registry;\n").unwrap();
    let config = Config {
        term_order: TermOrder::Source,
        namespace_term: true,
        register_in: Some(lib_rs.clone()),
        ..config(vec![ont], dir.path().to_owned(), false)
    };

    generate(&config).unwrap();
    let src = fs::read_to_string(dir.path().join("mo.rs")).unwrap();
    assert!(src.ends_with(
        "    namespace_term,\n    [\n        TRACK_CLASS,\n        TRACK,\n        DEPRECATED_TRACK_NUM,\n    ]\n);\n"
    ));
    assert_eq!(
        fs::read_to_string(&lib_rs).unwrap(),
        "pub mod foaf;\npub mod mo;\npub mod owl;\npub mod registry;\n"
    );

    // once only
    generate(&config).unwrap();
    assert_eq!(fs::read_to_string(&lib_rs).unwrap().matches("pub mod mo;").count(), 1);
}

#[test]
fn module_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let lib_rs = dir.path().join("lib.rs");

    assert!(register_module(&lib_rs, "rdf").unwrap());
    assert_eq!(fs::read_to_string(&lib_rs).unwrap(), "pub mod rdf;\n");

    fs::write(&lib_rs, "//! Vocabularies.\n\npub mod dc;\npub mod rdf;\n\nuse oxrdf::NamedNodeRef;\n").unwrap();
    assert!(register_module(&lib_rs, "dcterms").unwrap());
    assert!(register_module(&lib_rs, "xsd").unwrap());
    assert!(register_module(&lib_rs, "bibo").unwrap());
    assert!(!register_module(&lib_rs, "rdf").unwrap());
    assert_eq!(
        fs::read_to_string(&lib_rs).unwrap(),
        "//! Vocabularies.\n\npub mod bibo;\npub mod dc;\npub mod dcterms;\npub mod rdf;\npub mod xsd;\n\nuse oxrdf::NamedNodeRef;\n"
    );
}

#[test]
fn keeps_existing_files_unless_forced() {
    let dir = tempfile::tempdir().unwrap();
    let ont = write_ontology(dir.path(), "mo.ttl", MINI_MO);
    let out_file = dir.path().join("mo.rs");
    fs::write(&out_file, "// hand written").unwrap();

    generate(&config(vec![ont.clone()], dir.path().to_owned(), false)).unwrap();
    assert_eq!(fs::read_to_string(&out_file).unwrap(), "// hand written");

    generate(&config(vec![ont], dir.path().to_owned(), true)).unwrap();
    assert!(fs::read_to_string(&out_file)
        .unwrap()
        .contains("TRACK_CLASS"));
}

#[test]
fn same_output_twice_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let ont_a = write_ontology(dir.path(), "a.ttl", MINI_MO);
    let ont_b = write_ontology(dir.path(), "b.ttl", MINI_MO);
    let out_dir = dir.path().join("out");

    let res = generate(&config(vec![ont_a, ont_b], out_dir, true));
    assert!(res.is_err());
}

#[test]
fn ontology_without_ontology_subject() {
    let dir = tempfile::tempdir().unwrap();
    let ont = write_ontology(
        dir.path(),
        "broken.ttl",
        "<http://example.com/a> <http://example.com/b> \"c\" .",
    );
    let res = generate(&config(vec![ont], dir.path().join("out"), false));
    assert!(res.is_err());
}

#[test]
fn format_from_extension() {
    use oxrdfio::RdfFormat;
    use rdfvocab_vocabgen::rdf_format;

    assert_eq!(rdf_format(Path::new("a.ttl")), RdfFormat::Turtle);
    assert_eq!(rdf_format(Path::new("a.nt")), RdfFormat::NTriples);
    assert_eq!(rdf_format(Path::new("a.rdf")), RdfFormat::RdfXml);
    assert_eq!(rdf_format(Path::new("a")), RdfFormat::Turtle);
}
