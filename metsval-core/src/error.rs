//! Validation failure reporting.
use crate::document::DocumentError;
use crate::schema::SchemaError;
use crate::sniff::SniffError;
use std::fmt;
use thiserror::Error;

/// Cause of a validation failure. Each kind renders with a fixed message prefix.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MissingUniqueIdentifier,
    PhysicalMap,
    GroupNameNotUnique,
    MixedMediaTypes,
    FileNotFound,
    WrongMediaType,
    WrongSemanticLabel,
    WrongImageUrl,
    UnknownNamespace,
    XmlValidation,
    /// A document could not be read, parsed or queried.
    Document,
}

impl FailureKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            FailureKind::MissingUniqueIdentifier => "Missing unique identifier",
            FailureKind::PhysicalMap => "Missing or duplicate physical map",
            FailureKind::GroupNameNotUnique => "Group name not unique",
            FailureKind::MixedMediaTypes => "Different media types within group",
            FailureKind::FileNotFound => "File does not exist",
            FailureKind::WrongMediaType => "Wrong media type for id",
            FailureKind::WrongSemanticLabel => "Wrong semantic label",
            FailureKind::WrongImageUrl => "Wrong image URL",
            FailureKind::UnknownNamespace => "Unknown namespace",
            FailureKind::XmlValidation => "XML validation error",
            FailureKind::Document => "Document error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Single offending condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub kind: FailureKind,
    pub detail: String,
}

impl ValidationIssue {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.prefix(), self.detail)
    }
}

/// The one failure signal of a validation run.
///
/// Most checks stop at their first violation and carry one issue; the file-group
/// scan collects every violation it finds. Callers branch on [`ValidationIssue::kind`].
#[derive(Debug, Error)]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ValidationError {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self::from_issues(vec![ValidationIssue::new(kind, detail)])
    }

    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            issues,
            source: None,
        }
    }

    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Kind of the first recorded issue.
    pub fn kind(&self) -> Option<FailureKind> {
        self.issues.first().map(|issue| issue.kind)
    }

    pub fn has_kind(&self, kind: FailureKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl From<DocumentError> for ValidationError {
    fn from(err: DocumentError) -> Self {
        ValidationError::new(FailureKind::Document, err.to_string()).with_source(err)
    }
}

impl From<SniffError> for ValidationError {
    fn from(err: SniffError) -> Self {
        ValidationError::new(FailureKind::Document, err.to_string()).with_source(err)
    }
}

impl From<SchemaError> for ValidationError {
    fn from(err: SchemaError) -> Self {
        let kind = match &err {
            SchemaError::UnknownNamespace { .. } => FailureKind::UnknownNamespace,
            SchemaError::Validation { .. } => FailureKind::XmlValidation,
            _ => FailureKind::Document,
        };
        let detail = match &err {
            SchemaError::UnknownNamespace { namespace, path } => {
                format!("'{namespace}' ({})", path.display())
            }
            SchemaError::Validation { path, .. } => path.display().to_string(),
            other => other.to_string(),
        };
        ValidationError::new(kind, detail).with_source(err)
    }
}
