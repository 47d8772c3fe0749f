// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    collections::{HashMap, HashSet},
    fmt::{Display, Write as _},
    io::Read,
    rc::Rc,
};

use const_format::concatcp;
use convert_case::{Case, Casing};
use oxrdf::{NamedNode, Subject, Term};
use oxrdfio::{RdfFormat, RdfParseError, RdfParser};
use petgraph::graph::{DefaultIx, DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use thiserror::Error;

use crate::config::TermOrder;

const PF_CC: &str = "http://creativecommons.org/ns#";
const PF_DCTERMS: &str = "http://purl.org/dc/terms/";
const PF_OWL: &str = "http://www.w3.org/2002/07/owl#";
const PF_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const PF_RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
const PF_SCHEMA: &str = "http://schema.org/";
const PF_VANN: &str = "http://purl.org/vocab/vann/";
const PF_VS: &str = "http://www.w3.org/2003/06/sw-vocab-status/ns#";

const RDF_TYPE: &str = concatcp!(PF_RDF, "type");
const TITLE_PREDS: [&str; 2] = [concatcp!(PF_DCTERMS, "title"), concatcp!(PF_RDFS, "label")];
const DESCRIPTION_PREDS: [&str; 2] = [
    concatcp!(PF_DCTERMS, "description"),
    concatcp!(PF_RDFS, "comment"),
];
const CLASS_TYPES: [&str; 2] = [concatcp!(PF_OWL, "Class"), concatcp!(PF_RDFS, "Class")];
const DEPRECATED_TYPES: [&str; 2] = [
    concatcp!(PF_OWL, "DeprecatedClass"),
    concatcp!(PF_OWL, "DeprecatedProperty"),
];

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct PrefixedIri {
    prefix_name: String,
    prefix_value: String,
    postfix: String,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum ParsedNamedNode {
    Prefixed(PrefixedIri),
    BaseRelative(PrefixedIri),
    Full(NamedNode),
}

#[derive(Error, Debug)]
pub enum VocabExtractError {
    #[error("Failed to parse the RDF input: {0}")]
    Parse(#[from] RdfParseError),
    #[error("No owl:Ontology subject found!")]
    MissingOntology,
    #[error("Expected a literal as the object of {subject} {predicate}, got {found}")]
    ExpectedLiteral {
        subject: String,
        predicate: String,
        found: String,
    },
    #[error("Graph node {0} does not exist")]
    DanglingNode(usize),
}

#[derive(Error, Debug)]
pub enum RustVocabGenError {
    #[error("The vocabulary property `preferred_namespace_prefix` is required")]
    MissingNamespacePrefix,
    #[error("The vocabulary property `prefix_namespace_uri` is required")]
    MissingNamespaceUri,
}

impl Display for ParsedNamedNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefixed(node) => write!(f, "{}:{}", node.prefix_name, node.postfix),
            Self::BaseRelative(node) => write!(f, "<{}>", node.postfix),
            Self::Full(node) => write!(f, "{}", node.as_str()),
        }
    }
}

impl ParsedNamedNode {
    fn raw(&self) -> String {
        match self {
            Self::Prefixed(node) | Self::BaseRelative(node) => {
                format!("{}{}", node.prefix_value, node.postfix)
            }
            Self::Full(node) => node.as_str().to_owned(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Node {
    Iri(ParsedNamedNode),
    Literal(String),
}

impl Node {
    fn raw_iri(&self) -> Option<String> {
        match self {
            Self::Iri(node) => Some(node.raw()),
            Self::Literal(_) => None,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(node) => node.fmt(f),
            Self::Literal(lit_str) => {
                if lit_str.contains('\n') {
                    write!(f, r#""""{lit_str}""""#)
                } else {
                    write!(f, r#""{lit_str}""#)
                }
            }
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct Deprecation {
    pub enabled: bool,
    pub since: String,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct SubjectMeta {
    pub postfix: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_class: bool,
    pub deprecation: Deprecation,
}

impl SubjectMeta {
    /// The doc text of the generated constant.
    #[must_use]
    pub fn doc(&self) -> String {
        self.description
            .as_deref()
            .or(self.title.as_deref())
            .map_or_else(
                || format!("No description found for {}", self.postfix),
                |doc| doc.trim().to_owned(),
            )
    }
}

type NodeIdx = NodeIndex<DefaultIx>;
pub type Edge = Node;

pub type RdfGraph = DiGraph<Node, Edge>;

#[derive(Debug, Clone)]
pub struct RdfContent {
    pub graph: Rc<RdfGraph>,
    /// In order of first appearance as a subject.
    pub subjects: Vec<NodeIdx>,
    pub base: Option<String>,
    pub prefixes: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct VocabInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub preferred_namespace_prefix: Option<String>,
    pub preferred_namespace_uri: Option<String>,
    /// In the [`TermOrder`] asked for.
    pub subjects: Vec<SubjectMeta>,
}

/// The part of the subjects IRI that follows the namespace,
/// or `None` if it is not part of the namespace.
fn local_name(subj: &Node, ns_uri: Option<&str>) -> Option<String> {
    let Node::Iri(iri) = subj else {
        return None;
    };
    match (ns_uri, iri) {
        (Some(ns), _) => iri
            .raw()
            .strip_prefix(ns)
            .filter(|postfix| !postfix.is_empty())
            .map(ToOwned::to_owned),
        (None, ParsedNamedNode::Prefixed(prefxd)) => Some(prefxd.postfix.clone()),
        (None, _) => None,
    }
}

impl RdfContent {
    fn node(&self, node_idx: NodeIdx) -> Result<&Node, VocabExtractError> {
        self.graph
            .node_weight(node_idx)
            .ok_or(VocabExtractError::DanglingNode(node_idx.index()))
    }

    /// Extract the literal string of the pointed to node.
    ///
    /// # Errors
    ///
    /// If the given node-ID points to a non-literal node.
    pub fn extract_literal_string(
        &self,
        subj_idx: NodeIdx,
        pred: &Edge,
        obj_idx: NodeIdx,
    ) -> Result<String, VocabExtractError> {
        match self.node(obj_idx)? {
            Node::Literal(lit) => Ok(lit.clone()),
            obj @ Node::Iri(_) => Err(VocabExtractError::ExpectedLiteral {
                subject: self.node(subj_idx)?.to_string(),
                predicate: pred.to_string(),
                found: obj.to_string(),
            }),
        }
    }

    fn find_ontology(&self) -> Result<Option<NodeIdx>, VocabExtractError> {
        for subj_idx in &self.subjects {
            for pred_ref in self.graph.edges(*subj_idx) {
                if pred_ref.weight().raw_iri().as_deref() != Some(RDF_TYPE) {
                    continue;
                }
                let obj = self.node(pred_ref.target())?;
                if obj.raw_iri().as_deref() == Some(concatcp!(PF_OWL, "Ontology")) {
                    return Ok(Some(*subj_idx));
                }
            }
        }
        Ok(None)
    }

    fn extract_subj_metas(
        &self,
        ont_subj_idx: NodeIdx,
        ns_uri: Option<&str>,
        order: TermOrder,
    ) -> Result<Vec<SubjectMeta>, VocabExtractError> {
        let mut subjects = Vec::new();
        for subj_idx in &self.subjects {
            if *subj_idx == ont_subj_idx {
                continue;
            }
            let subj = self.node(*subj_idx)?;
            let Some(postfix) = local_name(subj, ns_uri) else {
                tracing::warn!("Ignoring subject outside of the vocabulary namespace: {subj}");
                continue;
            };
            let mut title = None;
            let mut description = None;
            let mut is_class = false;
            let mut deprecation = Deprecation::default();
            for pred_ref in self.graph.edges(*subj_idx) {
                let pred = pred_ref.weight();
                let Some(pred_iri) = pred.raw_iri() else {
                    continue;
                };
                let pred_iri = pred_iri.as_str();
                let obj_idx = pred_ref.target();
                if pred_iri == RDF_TYPE {
                    let obj_iri = self.node(obj_idx)?.raw_iri();
                    let obj_iri = obj_iri.as_deref().unwrap_or_default();
                    is_class |= CLASS_TYPES.contains(&obj_iri);
                    deprecation.enabled |= DEPRECATED_TYPES.contains(&obj_iri);
                } else if TITLE_PREDS.contains(&pred_iri) {
                    title = Some(self.extract_literal_string(*subj_idx, pred, obj_idx)?);
                } else if DESCRIPTION_PREDS.contains(&pred_iri) {
                    description = Some(self.extract_literal_string(*subj_idx, pred, obj_idx)?);
                } else if pred_iri == concatcp!(PF_VS, "term_status") {
                    deprecation.enabled |= self
                        .extract_literal_string(*subj_idx, pred, obj_idx)?
                        .eq_ignore_ascii_case("deprecated");
                } else if pred_iri == concatcp!(PF_OWL, "deprecated") {
                    deprecation.enabled |= self
                        .extract_literal_string(*subj_idx, pred, obj_idx)?
                        .eq_ignore_ascii_case("true");
                } else if pred_iri == concatcp!(PF_CC, "deprecatedOn") {
                    deprecation.since = self.extract_literal_string(*subj_idx, pred, obj_idx)?;
                } else if pred_iri == concatcp!(PF_SCHEMA, "supersededBy") {
                    let obj = self.node(obj_idx)?;
                    deprecation.message = format!("Use this instead: {obj}");
                }
            }
            subjects.push(SubjectMeta {
                postfix,
                title,
                description,
                is_class,
                deprecation,
            });
        }
        if order == TermOrder::Name {
            subjects.sort_by(|subj_a, subj_b| {
                subj_a
                    .postfix
                    .to_lowercase()
                    .cmp(&subj_b.postfix.to_lowercase())
                    .then_with(|| subj_a.postfix.cmp(&subj_b.postfix))
            });
        }

        Ok(subjects)
    }

    /// Extract vocabulary/ontology meta-data.
    ///
    /// # Errors
    ///
    /// - No `owl:Ontology` subject was found.
    /// - A literal valued property has a non-literal value.
    pub fn into_vocab_info(self, order: TermOrder) -> Result<VocabInfo, VocabExtractError> {
        let ont_subj_idx = self
            .find_ontology()?
            .ok_or(VocabExtractError::MissingOntology)?;
        let mut preferred_namespace_prefix = None;
        let mut preferred_namespace_uri = None;
        let mut title = None;
        let mut description = None;
        for pred_ref in self.graph.edges(ont_subj_idx) {
            let pred = pred_ref.weight();
            let Some(pred_iri) = pred.raw_iri() else {
                continue;
            };
            let pred_iri = pred_iri.as_str();
            let value = || self.extract_literal_string(ont_subj_idx, pred, pred_ref.target());
            if pred_iri == concatcp!(PF_VANN, "preferredNamespacePrefix") {
                preferred_namespace_prefix = Some(value()?);
            } else if pred_iri == concatcp!(PF_VANN, "preferredNamespaceUri") {
                preferred_namespace_uri = Some(value()?);
            } else if TITLE_PREDS.contains(&pred_iri) {
                title = Some(value()?);
            } else if DESCRIPTION_PREDS.contains(&pred_iri) {
                description = Some(value()?);
            }
        }

        let subjects =
            self.extract_subj_metas(ont_subj_idx, preferred_namespace_uri.as_deref(), order)?;

        Ok(VocabInfo {
            title,
            description,
            preferred_namespace_prefix,
            preferred_namespace_uri,
            subjects,
        })
    }
}

/// Formats `text` as a Rust string literal,
/// using a raw string only if it contains double quotes.
#[must_use]
pub fn str_literal(text: &str) -> String {
    if !text.contains('"') {
        return format!("\"{}\"", text.replace('\\', "\\\\"));
    }
    let mut hashes = String::from("#");
    while text.contains(&format!("\"{hashes}")) {
        hashes.push('#');
    }
    format!("r{hashes}\"{text}\"{hashes}")
}

/// Chooses a unique constant name for each subject, in order.
///
/// - local name in `SCREAMING_SNAKE_CASE`
/// - deprecated terms get a `DEPRECATED_` prefix
/// - a class sharing its name with a property gets a `_CLASS` suffix
/// - any remaining clash gets `__2`, `__3`, ...
#[must_use]
pub fn const_names(subjects: &[SubjectMeta]) -> Vec<String> {
    let bases: Vec<String> = subjects
        .iter()
        .map(|subj| {
            format!(
                "{}{}",
                if subj.deprecation.enabled {
                    "DEPRECATED_"
                } else {
                    ""
                },
                subj.postfix.to_case(Case::Constant)
            )
        })
        .collect();
    let mut property_bases = HashSet::new();
    for (subj, base) in subjects.iter().zip(&bases) {
        if !subj.is_class {
            property_bases.insert(base.as_str());
        }
    }

    let mut seen_consts = HashSet::new();
    let mut names = Vec::with_capacity(subjects.len());
    for (subj, base) in subjects.iter().zip(&bases) {
        let const_base = if subj.is_class && property_bases.contains(base.as_str()) {
            format!("{base}_CLASS")
        } else {
            base.clone()
        };
        let mut subj_const = const_base.clone();
        let mut distinguishing_idx = 1;
        while seen_consts.contains(&subj_const) {
            distinguishing_idx += 1;
            subj_const = format!("{const_base}__{distinguishing_idx}");
        }
        seen_consts.insert(subj_const.clone());
        names.push(subj_const);
    }
    names
}

impl VocabInfo {
    /// Convert to Rust vocab code.
    /// With `namespace_term`, the namespace IRI leads the term set.
    ///
    /// # Errors
    ///
    /// - The `preferred_namespace_prefix` property is set to `None`.
    /// - The `preferred_namespace_uri` property is set to `None`.
    pub fn to_str(
        &self,
        header: Option<&str>,
        namespace_term: bool,
    ) -> Result<String, RustVocabGenError> {
        let namespace_prefix = self
            .preferred_namespace_prefix
            .as_ref()
            .ok_or(RustVocabGenError::MissingNamespacePrefix)?;
        let namespace_uri = self
            .preferred_namespace_uri
            .as_ref()
            .ok_or(RustVocabGenError::MissingNamespaceUri)?;
        let title = self.title.as_deref().unwrap_or("NO_TITLE");
        let any_deprecated = self.subjects.iter().any(|subj| subj.deprecation.enabled);

        let mut vocab = String::new();
        if let Some(header) = header {
            vocab.push_str(header.trim_end());
            vocab.push_str("\n\n");
        }
        // Writing to a String never fails.
        let _ = write!(
            vocab,
            r#"//! [{title} ({})](
//! {namespace_uri})
//! vocabulary.

use crate::{{named_node, {}vocabulary}};

pub const NS_BASE: &str = "{namespace_uri}";
pub const NS_PREFERRED_PREFIX: &str = "{namespace_prefix}";
"#,
            namespace_prefix.to_ascii_uppercase(),
            if any_deprecated {
                "named_node_deprecated, "
            } else {
                ""
            },
        );

        let names = const_names(&self.subjects);
        for (subj, subj_const) in self.subjects.iter().zip(&names) {
            let deprecation_args = if subj.deprecation.enabled {
                format!(
                    ",\n    {},\n    {}",
                    str_literal(&subj.deprecation.since),
                    str_literal(&subj.deprecation.message)
                )
            } else {
                String::new()
            };
            let _ = write!(
                vocab,
                "\nnamed_node{}!(\n    {subj_const},\n    NS_BASE,\n    \"{}\",\n    {}{deprecation_args}\n);\n",
                if subj.deprecation.enabled {
                    "_deprecated"
                } else {
                    ""
                },
                subj.postfix,
                str_literal(&subj.doc()),
            );
        }

        let _ = write!(
            vocab,
            "\nvocabulary!(\n    {},\n    {},\n{}    [\n",
            namespace_prefix.to_case(Case::Pascal),
            str_literal(title),
            if namespace_term {
                "    namespace_term,\n"
            } else {
                ""
            },
        );
        for subj_const in &names {
            let _ = writeln!(vocab, "        {subj_const},");
        }
        vocab.push_str("    ]\n);\n");

        Ok(vocab)
    }
}

fn parse_iri(
    subj: &NamedNode,
    base: Option<&str>,
    prefixes: &[(&str, &str)],
) -> ParsedNamedNode {
    for prefix in prefixes {
        if let Some(postfix) = subj.as_str().strip_prefix(prefix.1) {
            return ParsedNamedNode::Prefixed(PrefixedIri {
                prefix_name: prefix.0.to_string(),
                prefix_value: prefix.1.to_string(),
                postfix: postfix.to_string(),
            });
        }
    }
    if let Some(base_iri) = base {
        if let Some(postfix) = subj.as_str().strip_prefix(base_iri) {
            return ParsedNamedNode::BaseRelative(PrefixedIri {
                prefix_name: String::new(),
                prefix_value: base_iri.to_owned(),
                postfix: postfix.to_string(),
            });
        }
    }
    ParsedNamedNode::Full(subj.clone())
}

/// Reads RDF triples into a graph, skipping blank nodes.
///
/// # Errors
///
/// If the input is not valid RDF in the given format.
pub fn rdf<R>(input: R, format: RdfFormat) -> Result<RdfContent, VocabExtractError>
where
    R: Read,
{
    let mut graph = RdfGraph::new();
    let mut subjects = Vec::new();
    let mut seen_subjects = HashSet::new();

    let mut parser = RdfParser::from_format(format).for_reader(input);
    let mut iri_to_graph_idx = HashMap::new();
    while let Some(quad) = parser.next() {
        let quad = quad?;
        if let Subject::NamedNode(subj) = &quad.subject {
            let prefixes = parser.prefixes().collect::<Vec<_>>();
            let base = parser.base_iri();

            let subj_iri = Node::Iri(parse_iri(subj, base, &prefixes));
            let pred_iri = Node::Iri(parse_iri(&quad.predicate, base, &prefixes));

            let obj_node = match quad.object {
                Term::NamedNode(nn) => Node::Iri(parse_iri(&nn, base, &prefixes)),
                Term::BlankNode(bn) => {
                    tracing::debug!("BlankNode objects are not supported -> ignored! {:?}", bn);
                    continue;
                }
                Term::Literal(lit) => Node::Literal(lit.value().to_string()),
                Term::Triple(tr) => {
                    tracing::warn!("Triple objects are not supported -> ignored! {:?}", tr);
                    continue;
                }
            };

            let subj_idx = *iri_to_graph_idx
                .entry(subj_iri.clone())
                .or_insert_with(|| graph.add_node(subj_iri));
            let obj_idx = *iri_to_graph_idx
                .entry(obj_node.clone())
                .or_insert_with(|| graph.add_node(obj_node));
            if seen_subjects.insert(subj_idx) {
                subjects.push(subj_idx);
            }
            graph.add_edge(subj_idx, obj_idx, pred_iri);
        } else {
            tracing::debug!("Ignoring triple with subject: {}", quad.subject);
        }
    }

    Ok(RdfContent {
        graph: Rc::new(graph),
        subjects,
        base: parser.base_iri().map(std::borrow::ToOwned::to_owned),
        prefixes: parser
            .prefixes()
            .map(|p| (p.0.to_owned(), p.1.to_owned()))
            .collect(),
    })
}
