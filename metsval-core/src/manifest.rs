//! Business rules evaluated against a parsed METS manifest.
//!
//! Every rule is a read-only XPath pass over the tree. Rules stop at their first
//! violation, except [`ManifestRuleValidator::check_file_groups`], which collects all
//! of them before failing.
use crate::config::PAGE_MEDIA_TYPE;
use crate::document::{XLINK_NS, XmlNode, XmlTree, xpath_literal};
use crate::error::{FailureKind, ValidationError, ValidationIssue};
use crate::sniff::{ContentSniffer, MediaTypeSniffer};
use crate::vocabulary::ControlledVocabulary;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

pub(crate) const UNIQUE_IDENTIFIER_XPATH: &str = "//mods:identifier[@type='purl' or @type='url' or @type='urn' or @type='handle' or @type='dtaid']";
pub(crate) const PHYSICAL_SEQUENCE_XPATH: &str =
    "/mets:mets/mets:structMap[@TYPE='PHYSICAL']/mets:div[@TYPE='physSequence']";
// fileGrp may nest; every level is a group of its own
pub(crate) const FILE_GROUP_XPATH: &str = "/mets:mets/mets:fileSec//mets:fileGrp";
pub(crate) const FILE_LOCATION_XPATH: &str = "//mets:file/mets:FLocat/@xlink:href";

const FILE_PREFIX: &str = "file://";

/// Descriptive MODS fields whose absence only warrants a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptiveField {
    Language,
    Genre,
    Classification,
}

impl DescriptiveField {
    pub const ALL: [DescriptiveField; 3] = [
        DescriptiveField::Language,
        DescriptiveField::Genre,
        DescriptiveField::Classification,
    ];

    fn xpath(&self) -> &'static str {
        match self {
            DescriptiveField::Language => "//mods:language/mods:languageTerm",
            DescriptiveField::Genre => "//mods:genre",
            DescriptiveField::Classification => "//mods:classification",
        }
    }
}

impl fmt::Display for DescriptiveField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DescriptiveField::Language => "language",
            DescriptiveField::Genre => "genre",
            DescriptiveField::Classification => "classification",
        };
        f.write_str(name)
    }
}

/// Soft finding that does not invalidate a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub field: DescriptiveField,
    pub message: String,
}

/// One `mets:file` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub id: String,
    pub mime_type: Option<String>,
    pub location: Option<String>,
    pub group_id: Option<String>,
}

/// One `mets:fileGrp` with its entries in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub name: String,
    pub entries: Vec<FileEntry>,
}

/// Where a file entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location<'a> {
    Remote(&'a str),
    Local(&'a str),
}

impl<'a> Location<'a> {
    /// `http`, `https` and `ftp` URLs are remote. A `file://` prefix is dropped and the
    /// rest treated as a path; anything that does not parse as a URL is a path too.
    pub fn classify(location: &'a str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https" | "ftp") => {
                Location::Remote(location)
            }
            _ => Location::Local(strip_file_prefix(location)),
        }
    }
}

pub(crate) fn strip_file_prefix(location: &str) -> &str {
    location.strip_prefix(FILE_PREFIX).unwrap_or(location)
}

/// Directory that relative locations of `manifest` resolve against.
pub(crate) fn manifest_dir(manifest: &Path) -> PathBuf {
    manifest
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Resolve a local location against the manifest directory.
///
/// Relative locations are joined to `base`. Absolute ones, such as the path left
/// over from `file:///data/0001.tif`, name the file directly and are used unchanged.
pub(crate) fn resolve_local(base: &Path, local: &str) -> PathBuf {
    let local = Path::new(local);
    if local.is_absolute() {
        local.to_path_buf()
    } else {
        base.join(local)
    }
}

/// Read every file group of the manifest.
pub fn file_groups<T: XmlTree>(tree: &T) -> Result<Vec<FileGroup>, ValidationError> {
    let mut groups = Vec::new();
    for group_node in tree.query_nodes(FILE_GROUP_XPATH)? {
        let mut entries = Vec::new();
        for file_node in tree.query_nodes_under(&group_node, "mets:file")? {
            let location = tree
                .query_nodes_under(&file_node, "mets:FLocat")?
                .first()
                .and_then(|locat| locat.attribute_ns("href", XLINK_NS));
            entries.push(FileEntry {
                id: file_node.attribute("ID").unwrap_or_default(),
                mime_type: file_node.attribute("MIMETYPE"),
                location,
                group_id: file_node.attribute("GROUPID"),
            });
        }
        groups.push(FileGroup {
            name: group_node.attribute("USE").unwrap_or_default(),
            entries,
        });
    }
    Ok(groups)
}

/// Runs the manifest rules.
///
/// # Examples
/// ```rust,no_run
/// use metsval_core::document::{DocumentAccess, LibXmlAccess};
/// use metsval_core::manifest::ManifestRuleValidator;
/// use metsval_core::vocabulary::ControlledVocabulary;
/// use std::path::Path;
///
/// let vocabulary = ControlledVocabulary::canonical();
/// let rules = ManifestRuleValidator::new(&vocabulary);
/// let tree = LibXmlAccess::new().parse(Path::new("workspace/mets.xml"))?;
/// rules.check_physical_map(&tree)?;
/// rules.check_file_groups(&tree)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ManifestRuleValidator<'a, S = ContentSniffer> {
    vocabulary: &'a ControlledVocabulary,
    sniffer: S,
    page_media_type: String,
}

impl<'a> ManifestRuleValidator<'a> {
    pub fn new(vocabulary: &'a ControlledVocabulary) -> Self {
        Self::with_sniffer(vocabulary, ContentSniffer)
    }
}

impl<'a, S: MediaTypeSniffer> ManifestRuleValidator<'a, S> {
    pub fn with_sniffer(vocabulary: &'a ControlledVocabulary, sniffer: S) -> Self {
        Self {
            vocabulary,
            sniffer,
            page_media_type: PAGE_MEDIA_TYPE.to_string(),
        }
    }

    /// Override the media type exempt from the sniffing cross-check.
    pub fn page_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.page_media_type = media_type.into();
        self
    }

    /// At least one MODS identifier of an external type must be present.
    pub fn check_unique_identifier<T: XmlTree>(&self, tree: &T) -> Result<(), ValidationError> {
        debug!(manifest = %tree.path().display(), "checking unique identifier");
        if tree.query_nodes(UNIQUE_IDENTIFIER_XPATH)?.is_empty() {
            return Err(ValidationError::new(
                FailureKind::MissingUniqueIdentifier,
                format!(
                    "no purl, url, urn, handle or dtaid identifier in {}",
                    tree.path().display()
                ),
            ));
        }
        Ok(())
    }

    /// Exactly one physical sequence must exist.
    pub fn check_physical_map<T: XmlTree>(&self, tree: &T) -> Result<(), ValidationError> {
        debug!(manifest = %tree.path().display(), "checking physical map");
        let found = tree.query_nodes(PHYSICAL_SEQUENCE_XPATH)?.len();
        if found != 1 {
            return Err(ValidationError::new(
                FailureKind::PhysicalMap,
                format!("expected exactly one physical sequence, found {found}"),
            ));
        }
        Ok(())
    }

    /// Group names unique, one media type per group, local files present and of the
    /// declared type. All violations are reported together.
    pub fn check_file_groups<T: XmlTree>(&self, tree: &T) -> Result<(), ValidationError> {
        debug!(manifest = %tree.path().display(), "checking file groups");
        let base = manifest_dir(tree.path());
        let mut seen = HashSet::new();
        let mut issues = Vec::new();

        for group in file_groups(tree)? {
            if !seen.insert(group.name.clone()) {
                issues.push(ValidationIssue::new(
                    FailureKind::GroupNameNotUnique,
                    group.name.clone(),
                ));
            }

            let first_type = group.entries.first().map(|entry| entry.mime_type.as_deref());
            for entry in &group.entries {
                if let Some(first) = first_type
                    && entry.mime_type.as_deref() != first
                {
                    issues.push(ValidationIssue::new(
                        FailureKind::MixedMediaTypes,
                        format!(
                            "group {}: {} declares {} instead of {}",
                            group.name,
                            entry.id,
                            entry.mime_type.as_deref().unwrap_or("nothing"),
                            first.unwrap_or("nothing"),
                        ),
                    ));
                }
                if let Some(issue) = self.check_local_file(&base, entry)? {
                    issues.push(issue);
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_issues(issues))
        }
    }

    fn check_local_file(
        &self,
        base: &Path,
        entry: &FileEntry,
    ) -> Result<Option<ValidationIssue>, ValidationError> {
        let Some(location) = entry.location.as_deref() else {
            debug!(id = %entry.id, "file entry without location");
            return Ok(None);
        };
        let local = match Location::classify(location) {
            Location::Remote(url) => {
                debug!(id = %entry.id, %url, "skipping remote file");
                return Ok(None);
            }
            Location::Local(local) => local,
        };

        let path = resolve_local(base, local);
        if !path.is_file() {
            return Ok(Some(ValidationIssue::new(
                FailureKind::FileNotFound,
                format!("{} ({})", location, entry.id),
            )));
        }

        let declared = entry.mime_type.as_deref().unwrap_or_default();
        if declared == self.page_media_type {
            return Ok(None);
        }
        let detected = self.sniffer.detect(&path)?;
        if detected != declared {
            return Ok(Some(ValidationIssue::new(
                FailureKind::WrongMediaType,
                format!(
                    "{}: declared '{declared}', detected '{detected}'",
                    entry.id
                ),
            )));
        }
        Ok(None)
    }

    /// Every condition label attached to a physical page must be canonical.
    ///
    /// Labels are read from `mdWrap` blocks marked `OTHERMDTYPE="GT"` only. Manifests
    /// without a physical map or without pages pass.
    pub fn check_ground_truth_labels<T: XmlTree>(&self, tree: &T) -> Result<(), ValidationError> {
        debug!(manifest = %tree.path().display(), "checking ground truth labels");
        let pages_xpath = format!("{PHYSICAL_SEQUENCE_XPATH}/mets:div[@TYPE='page']");
        for page in tree.query_nodes(&pages_xpath)? {
            let Some(dmdids) = page.attribute("DMDID") else {
                continue;
            };
            for dmdid in dmdids.split_whitespace() {
                let labels_xpath = format!(
                    "/mets:mets/mets:dmdSec[@ID={}]/mets:mdWrap[@OTHERMDTYPE='GT']/mets:xmlData/gt:gt/gt:state/@prop",
                    xpath_literal(dmdid)
                );
                for label in tree.query_values(&labels_xpath)? {
                    if self.vocabulary.lookup_by_path(&label).is_none() {
                        debug!(
                            page = %page.attribute("ID").unwrap_or_default(),
                            %label,
                            "label not in vocabulary"
                        );
                        return Err(ValidationError::new(FailureKind::WrongSemanticLabel, label));
                    }
                }
            }
        }
        Ok(())
    }

    /// Language, genre and classification are optional. Missing or empty ones are
    /// returned as warnings and logged.
    pub fn check_optional_fields<T: XmlTree>(
        &self,
        tree: &T,
    ) -> Result<Vec<Warning>, ValidationError> {
        let mut warnings = Vec::new();
        for field in DescriptiveField::ALL {
            let values = tree.query_values(field.xpath())?;
            if values.iter().all(|value| value.trim().is_empty()) {
                warn!(manifest = %tree.path().display(), %field, "optional field missing or empty");
                warnings.push(Warning {
                    field,
                    message: format!("{field} is missing or empty"),
                });
            }
        }
        Ok(warnings)
    }
}
