//! Tree parsing and XPath queries behind a small trait seam.
//!
//! Validators never walk the XML tree themselves. They issue XPath queries against a
//! [`XmlTree`] obtained from a [`DocumentAccess`], which keeps the rule layer
//! declarative and the parser swappable. [`LibXmlAccess`] is the default backend.
use libxml::{parser::Parser, tree::Document, tree::Node, xpath};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

pub const METS_NS: &str = "http://www.loc.gov/METS/";
pub const MODS_NS: &str = "http://www.loc.gov/mods/v3";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
pub const GT_NS: &str = "http://www.ocr-d.de/GT/";
pub const PAGE_2019_NS: &str = "http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15";
pub const PAGE_2018_NS: &str = "http://schema.primaresearch.org/PAGE/gts/pagecontent/2018-07-15";
pub const PAGE_2017_NS: &str = "http://schema.primaresearch.org/PAGE/gts/pagecontent/2017-07-15";
pub const PAGE_2013_NS: &str = "http://schema.primaresearch.org/PAGE/gts/pagecontent/2013-07-15";

/// Prefix bindings registered on every parsed tree.
pub const NAMESPACES: &[(&str, &str)] = &[
    ("mets", METS_NS),
    ("mods", MODS_NS),
    ("xlink", XLINK_NS),
    ("gt", GT_NS),
    ("pc", PAGE_2019_NS),
];

/// Errors raised while reading or querying a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("path is not valid UTF-8: {}", path.display())]
    InvalidPath { path: PathBuf },
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("cannot bind namespace prefix '{prefix}'")]
    Namespace { prefix: String },
    #[error("XPath evaluation failed: {expr}")]
    XPath { expr: String },
}

/// Read access to a single element.
pub trait XmlNode {
    fn attribute(&self, name: &str) -> Option<String>;
    fn attribute_ns(&self, name: &str, namespace: &str) -> Option<String>;
}

/// A parsed, read-only document that answers XPath queries.
pub trait XmlTree {
    type Node: XmlNode;

    /// File the tree was parsed from.
    fn path(&self) -> &Path;

    /// Namespace URI of the root element, if it has one.
    fn root_namespace(&self) -> Option<String>;

    fn query_nodes(&self, expr: &str) -> Result<Vec<Self::Node>, DocumentError>;

    /// Evaluate `expr` with `node` as the context node.
    fn query_nodes_under(
        &self,
        node: &Self::Node,
        expr: &str,
    ) -> Result<Vec<Self::Node>, DocumentError>;

    /// String values of every node matched by `expr`.
    fn query_values(&self, expr: &str) -> Result<Vec<String>, DocumentError>;
}

/// Parser entry point.
pub trait DocumentAccess {
    type Tree: XmlTree;

    fn parse(&self, path: &Path) -> Result<Self::Tree, DocumentError>;
}

/// [`DocumentAccess`] backed by libxml2.
#[derive(Debug, Clone)]
pub struct LibXmlAccess {
    bindings: Vec<(String, String)>,
}

impl LibXmlAccess {
    pub fn new() -> Self {
        Self::with_bindings(NAMESPACES.iter().copied())
    }

    pub fn with_bindings<'a>(bindings: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            bindings: bindings
                .into_iter()
                .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
                .collect(),
        }
    }
}

impl Default for LibXmlAccess {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAccess for LibXmlAccess {
    type Tree = LibXmlTree;

    fn parse(&self, path: &Path) -> Result<LibXmlTree, DocumentError> {
        // libxml reports a missing file as a generic parse failure
        if !path.is_file() {
            return Err(DocumentError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let path_str = path.to_str().ok_or_else(|| DocumentError::InvalidPath {
            path: path.to_path_buf(),
        })?;

        let doc = Parser::default()
            .parse_file(path_str)
            .map_err(|e| DocumentError::Parse {
                path: path.to_path_buf(),
                message: format!("{e:?}"),
            })?;
        let ctx = xpath::Context::new(&doc).map_err(|_| DocumentError::Parse {
            path: path.to_path_buf(),
            message: "cannot create XPath context".to_string(),
        })?;
        for (prefix, uri) in &self.bindings {
            ctx.register_namespace(prefix, uri)
                .map_err(|_| DocumentError::Namespace {
                    prefix: prefix.clone(),
                })?;
        }
        trace!(path = %path.display(), "parsed document");

        Ok(LibXmlTree {
            path: path.to_path_buf(),
            doc,
            ctx,
        })
    }
}

/// A libxml2 document with its XPath context.
pub struct LibXmlTree {
    path: PathBuf,
    doc: Document,
    ctx: xpath::Context,
}

impl XmlNode for Node {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn attribute_ns(&self, name: &str, namespace: &str) -> Option<String> {
        self.get_attribute_ns(name, namespace)
    }
}

impl XmlTree for LibXmlTree {
    type Node = Node;

    fn path(&self) -> &Path {
        &self.path
    }

    fn root_namespace(&self) -> Option<String> {
        self.doc
            .get_root_element()
            .and_then(|root| root.get_namespace())
            .map(|ns| ns.get_href())
    }

    fn query_nodes(&self, expr: &str) -> Result<Vec<Node>, DocumentError> {
        self.ctx.findnodes(expr, None).map_err(|_| xpath_error(expr))
    }

    fn query_nodes_under(&self, node: &Node, expr: &str) -> Result<Vec<Node>, DocumentError> {
        self.ctx
            .findnodes(expr, Some(node))
            .map_err(|_| xpath_error(expr))
    }

    fn query_values(&self, expr: &str) -> Result<Vec<String>, DocumentError> {
        self.ctx
            .findvalues(expr, None)
            .map_err(|_| xpath_error(expr))
    }
}

fn xpath_error(expr: &str) -> DocumentError {
    DocumentError::XPath {
        expr: expr.to_string(),
    }
}

/// Quote `value` as an XPath string literal.
pub(crate) fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        format!("'{value}'")
    } else if !value.contains('"') {
        format!("\"{value}\"")
    } else {
        let parts = value
            .split('\'')
            .map(|part| format!("'{part}'"))
            .collect::<Vec<_>>()
            .join(", \"'\", ");
        format!("concat({parts})")
    }
}
