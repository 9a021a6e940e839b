//! XSD schemas indexed by target namespace.
//!
//! A document is validated against the schema whose `targetNamespace` equals the
//! namespace of the document's root element. File names and extensions play no part
//! in the selection.
use crate::document::DocumentError;
use libxml::{
    error::StructuredError,
    parser::Parser,
    schemas::{SchemaParserContext, SchemaValidationContext},
    tree::Document,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use thiserror::Error;
use tracing::{debug, warn};

/// Schemas shipped with the crate, registered by [`SchemaRegistry::bundled`].
const BUNDLED: &[(&str, &str)] = &[
    ("mets.xsd", include_str!("../assets/schemas/mets.xsd")),
    (
        "page-2019-07-15.xsd",
        include_str!("../assets/schemas/page-2019-07-15.xsd"),
    ),
    (
        "page-2018-07-15.xsd",
        include_str!("../assets/schemas/page-2018-07-15.xsd"),
    ),
    (
        "page-2017-07-15.xsd",
        include_str!("../assets/schemas/page-2017-07-15.xsd"),
    ),
    (
        "page-2013-07-15.xsd",
        include_str!("../assets/schemas/page-2013-07-15.xsd"),
    ),
];

/// Imported by a bundled schema through a relative `schemaLocation`; never registered.
const SUPPORT: &[(&str, &str)] = &[("xlink.xsd", include_str!("../assets/schemas/xlink.xsd"))];

/// Errors raised while registering schemas or validating against them.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("cannot read schema {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("schema {name} is not well-formed: {message}")]
    Parse { name: String, message: String },
    #[error("schema {name} declares no targetNamespace")]
    MissingTargetNamespace { name: String },
    #[error("schema {name} does not compile: {}", diagnostics.join("; "))]
    Compile {
        name: String,
        diagnostics: Vec<String>,
    },
    #[error("no schema registered for namespace '{namespace}' ({})", path.display())]
    UnknownNamespace { namespace: String, path: PathBuf },
    #[error("XML validation error in {}: {}", path.display(), diagnostics.join("; "))]
    Validation {
        path: PathBuf,
        diagnostics: Vec<String>,
    },
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Where a registered schema comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Shipped with the crate and unpacked next to the schemas it imports.
    Bundled { name: &'static str, path: PathBuf },
    File(PathBuf),
}

impl SchemaSource {
    pub fn name(&self) -> String {
        match self {
            SchemaSource::Bundled { name, .. } => (*name).to_string(),
            SchemaSource::File(path) => path.display().to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            SchemaSource::Bundled { path, .. } | SchemaSource::File(path) => path,
        }
    }

    fn text(&self) -> Result<String, SchemaError> {
        std::fs::read_to_string(self.path()).map_err(|source| SchemaError::Io {
            path: self.path().to_path_buf(),
            source,
        })
    }

    // compiled from a file so relative imports resolve against its directory
    fn validation_context(&self) -> Result<SchemaValidationContext, SchemaError> {
        let path = self.path();
        let path_str = path.to_str().ok_or_else(|| {
            SchemaError::Document(DocumentError::InvalidPath {
                path: path.to_path_buf(),
            })
        })?;
        let mut parser_ctx = SchemaParserContext::from_file(path_str);
        SchemaValidationContext::from_parser(&mut parser_ctx).map_err(|errors| {
            SchemaError::Compile {
                name: self.name(),
                diagnostics: format_diagnostics(errors),
            }
        })
    }
}

/// Immutable after startup; holds no compiled state, so it can be shared freely.
///
/// Bundled schemas live in a private scratch directory that is removed when the last
/// clone of the registry is dropped.
///
/// # Examples
/// ```rust
/// use metsval_core::schema::SchemaRegistry;
///
/// let registry = SchemaRegistry::bundled()?;
/// assert!(registry.contains("http://www.loc.gov/METS/"));
/// # Ok::<(), metsval_core::schema::SchemaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, SchemaSource>,
    _bundle: Option<Arc<TempDir>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the schemas shipped with the crate.
    pub fn bundled() -> Result<Self, SchemaError> {
        let dir = tempfile::Builder::new()
            .prefix("metsval-schemas")
            .tempdir()
            .map_err(|source| SchemaError::Io {
                path: std::env::temp_dir(),
                source,
            })?;
        for &(name, text) in SUPPORT.iter().chain(BUNDLED) {
            let path = dir.path().join(name);
            std::fs::write(&path, text).map_err(|source| SchemaError::Io {
                path: path.clone(),
                source,
            })?;
        }
        debug!(dir = %dir.path().display(), "unpacked bundled schemas");

        let dir = Arc::new(dir);
        let mut registry = Self {
            schemas: BTreeMap::new(),
            _bundle: Some(Arc::clone(&dir)),
        };
        for &(name, _) in BUNDLED {
            registry.register(SchemaSource::Bundled {
                name,
                path: dir.path().join(name),
            })?;
        }
        Ok(registry)
    }

    /// Register `source` under its declared target namespace and return that namespace.
    ///
    /// The schema is compiled once here so broken schemas fail at startup.
    pub fn register(&mut self, source: SchemaSource) -> Result<String, SchemaError> {
        let namespace = target_namespace(&source)?;
        source.validation_context()?;
        debug!(schema = %source.name(), %namespace, "registered schema");
        if let Some(previous) = self.schemas.insert(namespace.clone(), source) {
            warn!(
                %namespace,
                replaced = %previous.name(),
                "schema registration replaced an earlier schema"
            );
        }
        Ok(namespace)
    }

    /// Register every `*.xsd` file in `dir`, in file name order.
    pub fn register_dir(&mut self, dir: &Path) -> Result<Vec<String>, SchemaError> {
        let read_dir = std::fs::read_dir(dir).map_err(|source| SchemaError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut files = Vec::new();
        for entry in read_dir {
            let path = entry
                .map_err(|source| SchemaError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?
                .path();
            if path.extension().is_some_and(|ext| ext == "xsd") {
                files.push(path);
            }
        }
        files.sort();

        files
            .into_iter()
            .map(|path| self.register(SchemaSource::File(path)))
            .collect()
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.schemas.contains_key(namespace)
    }

    /// Registered namespaces in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn source(&self, namespace: &str) -> Option<&SchemaSource> {
        self.schemas.get(namespace)
    }

    /// Validate `path` against the schema registered for its root namespace.
    ///
    /// Nothing is cached: the document is re-read and the schema recompiled per call.
    pub fn validate(&self, path: &Path) -> Result<(), SchemaError> {
        // check first because libxml only reports a generic parse failure
        if !path.is_file() {
            return Err(DocumentError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let path_str = path.to_str().ok_or_else(|| DocumentError::InvalidPath {
            path: path.to_path_buf(),
        })?;
        let document =
            Parser::default()
                .parse_file(path_str)
                .map_err(|e| DocumentError::Parse {
                    path: path.to_path_buf(),
                    message: format!("{e:?}"),
                })?;

        let namespace = root_namespace(&document).unwrap_or_default();
        let source = self
            .schemas
            .get(&namespace)
            .ok_or_else(|| SchemaError::UnknownNamespace {
                namespace: namespace.clone(),
                path: path.to_path_buf(),
            })?;
        debug!(path = %path.display(), schema = %source.name(), "validating against schema");

        let mut validation_ctx = source.validation_context()?;
        validation_ctx
            .validate_document(&document)
            .map_err(|errors| SchemaError::Validation {
                path: path.to_path_buf(),
                diagnostics: format_diagnostics(errors),
            })
    }
}

fn target_namespace(source: &SchemaSource) -> Result<String, SchemaError> {
    let text = source.text()?;
    let document = Parser::default()
        .parse_string(&text)
        .map_err(|e| SchemaError::Parse {
            name: source.name(),
            message: format!("{e:?}"),
        })?;
    document
        .get_root_element()
        .and_then(|root| root.get_attribute("targetNamespace"))
        .filter(|ns| !ns.is_empty())
        .ok_or_else(|| SchemaError::MissingTargetNamespace {
            name: source.name(),
        })
}

fn root_namespace(document: &Document) -> Option<String> {
    document
        .get_root_element()
        .and_then(|root| root.get_namespace())
        .map(|ns| ns.get_href())
}

fn format_diagnostics(errors: Vec<StructuredError>) -> Vec<String> {
    errors
        .into_iter()
        .map(|se| format!("{se:?}"))
        .collect::<Vec<String>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        METS_NS, PAGE_2013_NS, PAGE_2017_NS, PAGE_2018_NS, PAGE_2019_NS, XLINK_NS,
    };
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(contents.as_bytes()).expect("write");
        path
    }

    const NOTE_XSD: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
        targetNamespace="urn:example:note" elementFormDefault="qualified">
      <xs:element name="note" type="xs:string"/>
    </xs:schema>"#;

    fn good_manifest() -> String {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("workspaces")
            .join("good")
            .join("mets.xml");
        std::fs::read_to_string(path).expect("read fixture manifest")
    }

    fn page_descriptor(namespace: &str) -> String {
        format!(
            r#"<pc:PcGts xmlns:pc="{namespace}">
  <pc:Metadata>
    <pc:Creator>test</pc:Creator>
    <pc:Created>2024-03-01T10:00:00</pc:Created>
    <pc:LastChange>2024-03-01T10:00:00</pc:LastChange>
    <pc:Comments>scanned twice</pc:Comments>
  </pc:Metadata>
  <pc:Page imageFilename="OCR-D-IMG/0001.png" imageWidth="1" imageHeight="1">
    <pc:TextRegion id="r1"><pc:Coords points="0,0 1,0 1,1"/></pc:TextRegion>
  </pc:Page>
</pc:PcGts>"#
        )
    }

    #[test]
    fn bundled_schemas_are_indexed_by_namespace() {
        let registry = SchemaRegistry::bundled().expect("bundled schemas");
        let namespaces = registry.namespaces().collect::<Vec<_>>();
        assert_eq!(
            namespaces,
            vec![PAGE_2013_NS, PAGE_2017_NS, PAGE_2018_NS, PAGE_2019_NS, METS_NS]
        );
        assert!(!registry.contains(XLINK_NS));
    }

    #[test]
    fn every_page_revision_accepts_a_descriptor_with_comments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SchemaRegistry::bundled().expect("bundled schemas");
        for namespace in [PAGE_2013_NS, PAGE_2017_NS, PAGE_2018_NS, PAGE_2019_NS] {
            let page = write_file(dir.path(), "page.xml", &page_descriptor(namespace));
            registry
                .validate(&page)
                .unwrap_or_else(|e| panic!("{namespace}: {e}"));
        }
    }

    #[test]
    fn page_element_order_is_enforced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SchemaRegistry::bundled().expect("bundled schemas");
        let page = page_descriptor(PAGE_2019_NS).replace(
            r#"<pc:TextRegion id="r1">"#,
            r#"<pc:Surprise/><pc:TextRegion id="r1">"#,
        );
        let path = write_file(dir.path(), "page.xml", &page);
        let err = registry.validate(&path).unwrap_err();
        assert!(matches!(err, SchemaError::Validation { .. }));
    }

    #[test]
    fn manifest_with_xlink_locations_validates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SchemaRegistry::bundled().expect("bundled schemas");
        let manifest = write_file(dir.path(), "mets.xml", &good_manifest());
        registry.validate(&manifest).expect("fixture manifest is valid");
    }

    #[test]
    fn unknown_metadata_type_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SchemaRegistry::bundled().expect("bundled schemas");
        let xml = good_manifest();
        assert!(xml.contains(r#"MDTYPE="MODS""#));
        let manifest = write_file(
            dir.path(),
            "mets.xml",
            &xml.replace(r#"MDTYPE="MODS""#, r#"MDTYPE="TOTALLY-BOGUS""#),
        );

        let err = registry.validate(&manifest).unwrap_err();
        assert!(
            matches!(err, SchemaError::Validation { ref diagnostics, .. } if !diagnostics.is_empty())
        );
    }

    #[test]
    fn unknown_location_type_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = SchemaRegistry::bundled().expect("bundled schemas");
        let xml = good_manifest();
        assert!(xml.contains(r#"LOCTYPE="URL""#));
        let manifest = write_file(
            dir.path(),
            "mets.xml",
            &xml.replacen(r#"LOCTYPE="URL""#, r#"LOCTYPE="FTP""#, 1),
        );

        let err = registry.validate(&manifest).unwrap_err();
        assert!(matches!(err, SchemaError::Validation { .. }));
    }

    #[test]
    fn bundled_files_outlive_every_clone_of_the_registry() {
        let registry = SchemaRegistry::bundled().expect("bundled schemas");
        let mets = registry
            .source(METS_NS)
            .expect("mets schema")
            .path()
            .to_path_buf();
        let xlink = mets.with_file_name("xlink.xsd");
        assert!(xlink.is_file());

        let clone = registry.clone();
        drop(registry);
        assert!(mets.is_file());
        assert!(clone.contains(METS_NS));

        drop(clone);
        assert!(!mets.exists());
        assert!(!xlink.exists());
    }

    #[test]
    fn selection_ignores_file_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut registry = SchemaRegistry::new();
        let schema = write_file(dir.path(), "note.xsd", NOTE_XSD);
        let ns = registry
            .register(SchemaSource::File(schema))
            .expect("register");
        assert_eq!(ns, "urn:example:note");

        let doc = write_file(
            dir.path(),
            "note.txt",
            r#"<note xmlns="urn:example:note">hello</note>"#,
        );
        registry.validate(&doc).expect("valid note");
    }

    #[test]
    fn unknown_namespace_is_distinct_from_invalid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut registry = SchemaRegistry::new();
        registry
            .register(SchemaSource::File(write_file(dir.path(), "note.xsd", NOTE_XSD)))
            .expect("register");

        let foreign = write_file(dir.path(), "a.xml", r#"<note xmlns="urn:other">x</note>"#);
        let err = registry.validate(&foreign).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownNamespace { ref namespace, .. } if namespace == "urn:other"));

        let invalid = write_file(
            dir.path(),
            "b.xml",
            r#"<note xmlns="urn:example:note"><child/></note>"#,
        );
        let err = registry.validate(&invalid).unwrap_err();
        assert!(matches!(err, SchemaError::Validation { ref diagnostics, .. } if !diagnostics.is_empty()));
    }

    #[test]
    fn schema_without_target_namespace_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let schema = write_file(
            dir.path(),
            "plain.xsd",
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                 <xs:element name="plain" type="xs:string"/>
               </xs:schema>"#,
        );
        let err = SchemaRegistry::new()
            .register(SchemaSource::File(schema))
            .unwrap_err();
        assert!(matches!(err, SchemaError::MissingTargetNamespace { .. }));
    }

    #[test]
    fn register_dir_picks_up_only_xsd_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "note.xsd", NOTE_XSD);
        write_file(dir.path(), "readme.txt", "not a schema");

        let mut registry = SchemaRegistry::bundled().expect("bundled");
        let added = registry.register_dir(dir.path()).expect("register dir");
        assert_eq!(added, vec!["urn:example:note".to_string()]);
        assert!(registry.contains(METS_NS));
    }

    #[test]
    fn missing_document_is_document_error() {
        let registry = SchemaRegistry::bundled().expect("bundled");
        let err = registry.validate(Path::new("nowhere/mets.xml")).unwrap_err();
        assert!(matches!(err, SchemaError::Document(DocumentError::NotFound { .. })));
    }
}
