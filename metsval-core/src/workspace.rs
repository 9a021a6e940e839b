//! Runs schema validation and every manifest rule in a fixed order.
use crate::config::Config;
use crate::document::{DocumentAccess, LibXmlAccess, XmlTree, xpath_literal};
use crate::error::{FailureKind, ValidationError};
use crate::manifest::{Location, ManifestRuleValidator, Warning, manifest_dir, resolve_local};
use crate::page::check_image_reference;
use crate::schema::SchemaRegistry;
use crate::sniff::{ContentSniffer, MediaTypeSniffer};
use crate::vocabulary::ControlledVocabulary;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Outcome of a passing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub manifest: PathBuf,
    pub warnings: Vec<Warning>,
    pub pages_checked: usize,
}

impl ValidationReport {
    /// Passed without warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validates one workspace manifest.
///
/// Order: schema, unique identifier, ground-truth labels, physical map, file groups.
/// All must pass and the first failing step ends the run. Optional descriptive fields
/// only produce warnings. With [`Config::check_pages`] set, every local PAGE descriptor
/// is then schema-validated and cross-checked against the manifest.
///
/// # Examples
/// ```rust,no_run
/// use metsval_core::config::Config;
/// use metsval_core::schema::SchemaRegistry;
/// use metsval_core::vocabulary::ControlledVocabulary;
/// use metsval_core::workspace::WorkspaceValidator;
/// use std::path::Path;
///
/// let config = Config::default();
/// let registry = SchemaRegistry::bundled()?;
/// let vocabulary = ControlledVocabulary::canonical();
/// let validator = WorkspaceValidator::new(&registry, &vocabulary, &config);
/// let report = validator.validate(Path::new("workspace/mets.xml"))?;
/// assert!(report.is_clean());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct WorkspaceValidator<'a, D = LibXmlAccess, S = ContentSniffer> {
    registry: &'a SchemaRegistry,
    config: &'a Config,
    rules: ManifestRuleValidator<'a, S>,
    access: D,
}

impl<'a> WorkspaceValidator<'a> {
    pub fn new(
        registry: &'a SchemaRegistry,
        vocabulary: &'a ControlledVocabulary,
        config: &'a Config,
    ) -> Self {
        Self::with_parts(registry, vocabulary, config, LibXmlAccess::new(), ContentSniffer)
    }
}

impl<'a, D: DocumentAccess, S: MediaTypeSniffer> WorkspaceValidator<'a, D, S> {
    pub fn with_parts(
        registry: &'a SchemaRegistry,
        vocabulary: &'a ControlledVocabulary,
        config: &'a Config,
        access: D,
        sniffer: S,
    ) -> Self {
        let rules = ManifestRuleValidator::with_sniffer(vocabulary, sniffer)
            .page_media_type(config.page_media_type());
        Self {
            registry,
            config,
            rules,
            access,
        }
    }

    pub fn validate(&self, manifest: &Path) -> Result<ValidationReport, ValidationError> {
        let span = info_span!("validate", manifest = %manifest.display());
        let _guard = span.enter();

        self.registry.validate(manifest)?;
        let tree = self.access.parse(manifest)?;

        self.rules.check_unique_identifier(&tree)?;
        self.rules.check_ground_truth_labels(&tree)?;
        self.rules.check_physical_map(&tree)?;
        self.rules.check_file_groups(&tree)?;

        let warnings = if self.config.warn_optional_fields() {
            self.rules.check_optional_fields(&tree)?
        } else {
            Vec::new()
        };
        let pages_checked = if self.config.check_pages() {
            self.validate_pages(&tree)?
        } else {
            0
        };

        info!(warnings = warnings.len(), pages_checked, "workspace valid");
        Ok(ValidationReport {
            manifest: manifest.to_path_buf(),
            warnings,
            pages_checked,
        })
    }

    /// Schema-validate and cross-check every local page descriptor listed in the
    /// manifest. Returns how many were checked.
    pub fn validate_pages(&self, manifest: &D::Tree) -> Result<usize, ValidationError> {
        let base = manifest_dir(manifest.path());
        let xpath = format!(
            "/mets:mets/mets:fileSec//mets:file[@MIMETYPE={}]/mets:FLocat/@xlink:href",
            xpath_literal(self.config.page_media_type())
        );

        let mut checked = 0;
        for location in manifest.query_values(&xpath)? {
            let Location::Local(local) = Location::classify(&location) else {
                debug!(%location, "skipping remote page descriptor");
                continue;
            };
            let path = resolve_local(&base, local);
            if !path.is_file() {
                return Err(ValidationError::new(FailureKind::FileNotFound, location));
            }
            self.registry.validate(&path)?;
            let page = self.access.parse(&path)?;
            check_image_reference(&page, manifest)?;
            checked += 1;
        }
        Ok(checked)
    }
}
