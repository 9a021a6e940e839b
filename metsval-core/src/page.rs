//! Cross-check between a PAGE descriptor and the manifest that lists it.
use crate::document::{DocumentAccess, LibXmlAccess, XmlTree};
use crate::error::{FailureKind, ValidationError};
use crate::manifest::{FILE_LOCATION_XPATH, strip_file_prefix};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

// Namespace-agnostic so every PAGE revision is covered.
const IMAGE_FILENAME_XPATH: &str =
    "/*[local-name()='PcGts']/*[local-name()='Page']/@imageFilename";

/// The page's single `imageFilename`, minus any `file://` prefix, must appear verbatim
/// among the manifest's file locations.
pub fn check_image_reference<P: XmlTree, M: XmlTree>(
    page: &P,
    manifest: &M,
) -> Result<(), ValidationError> {
    let wrong_url = || {
        ValidationError::new(FailureKind::WrongImageUrl, page.path().display().to_string())
    };

    let filenames = page.query_values(IMAGE_FILENAME_XPATH)?;
    let [filename] = filenames.as_slice() else {
        debug!(
            page = %page.path().display(),
            found = filenames.len(),
            "expected exactly one imageFilename"
        );
        return Err(wrong_url());
    };
    let image = strip_file_prefix(filename);

    let locations = manifest.query_values(FILE_LOCATION_XPATH)?;
    let registered = locations.iter().map(String::as_str).collect::<HashSet<_>>();
    if !registered.contains(image) {
        debug!(page = %page.path().display(), %image, "image not registered in manifest");
        return Err(wrong_url());
    }
    Ok(())
}

/// Parses both documents and runs [`check_image_reference`].
#[derive(Debug, Clone, Default)]
pub struct PageConsistencyValidator<D = LibXmlAccess> {
    access: D,
}

impl PageConsistencyValidator {
    pub fn new() -> Self {
        Self::with_access(LibXmlAccess::new())
    }
}

impl<D: DocumentAccess> PageConsistencyValidator<D> {
    pub fn with_access(access: D) -> Self {
        Self { access }
    }

    pub fn validate_image_reference(
        &self,
        page_descriptor: &Path,
        manifest: &Path,
    ) -> Result<(), ValidationError> {
        let page = self.access.parse(page_descriptor)?;
        let manifest = self.access.parse(manifest)?;
        check_image_reference(&page, &manifest)
    }
}
