use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\0\0\0\0";
#[allow(dead_code)]
pub const TIFF_BYTES: &[u8] = b"II*\0\x08\0\0\0\0\0";
#[allow(dead_code)]
pub const PAGE_MEDIA_TYPE: &str = "application/vnd.prima.page+xml";

#[allow(dead_code)]
pub fn good_workspace() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/workspaces/good")
}

#[allow(dead_code)]
pub fn good_manifest() -> PathBuf {
    good_workspace().join("mets.xml")
}

/// Scratch workspace directory that is removed on drop.
pub struct Workspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    /// Copy of the known-good fixture workspace.
    pub fn from_good_fixture() -> Self {
        let workspace = Self::new();
        copy_dir(&good_workspace(), workspace.root());
        workspace
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create dirs");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    pub fn manifest(&self, xml: &str) -> PathBuf {
        self.write("mets.xml", xml)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root().join(relative)).expect("read file")
    }

    /// Rewrite the manifest with `from` replaced by `to`.
    pub fn edit_manifest(&self, from: &str, to: &str) -> PathBuf {
        let xml = self.read("mets.xml");
        assert!(xml.contains(from), "manifest does not contain {from:?}");
        self.manifest(&xml.replacen(from, to, 1))
    }
}

#[allow(dead_code)]
fn copy_dir(from: &Path, to: &Path) {
    for entry in std::fs::read_dir(from).expect("read fixture dir").flatten() {
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            std::fs::create_dir_all(&target).expect("create dir");
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target).expect("copy fixture");
        }
    }
}

/// Wrap sections into a METS document with all namespaces declared.
#[allow(dead_code)]
pub fn mets(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<mets:mets xmlns:mets="http://www.loc.gov/METS/"
           xmlns:mods="http://www.loc.gov/mods/v3"
           xmlns:xlink="http://www.w3.org/1999/xlink"
           xmlns:gt="http://www.ocr-d.de/GT/">
{body}
</mets:mets>"#
    )
}

#[allow(dead_code)]
pub fn file_entry(id: &str, mime_type: &str, href: &str) -> String {
    format!(
        r#"<mets:file ID="{id}" MIMETYPE="{mime_type}"><mets:FLocat LOCTYPE="OTHER" OTHERLOCTYPE="FILE" xlink:href="{href}"/></mets:file>"#
    )
}

#[allow(dead_code)]
pub fn file_group(name: &str, entries: &[String]) -> String {
    format!(
        r#"<mets:fileGrp USE="{name}">{}</mets:fileGrp>"#,
        entries.concat()
    )
}

#[allow(dead_code)]
pub fn file_sec(groups: &[String]) -> String {
    format!("<mets:fileSec>{}</mets:fileSec>", groups.concat())
}

#[allow(dead_code)]
pub fn gt_block(id: &str, labels: &[&str]) -> String {
    let states = labels
        .iter()
        .map(|label| format!(r#"<gt:state prop="{label}"/>"#))
        .collect::<String>();
    format!(
        r#"<mets:dmdSec ID="{id}"><mets:mdWrap MDTYPE="OTHER" OTHERMDTYPE="GT"><mets:xmlData><gt:gt>{states}</gt:gt></mets:xmlData></mets:mdWrap></mets:dmdSec>"#
    )
}

/// Physical structure map with one page div per `(page id, dmd id)`.
#[allow(dead_code)]
pub fn physical_map(pages: &[(&str, &str)]) -> String {
    let divs = pages
        .iter()
        .enumerate()
        .map(|(idx, (id, dmdid))| {
            format!(
                r#"<mets:div ID="{id}" TYPE="page" ORDER="{}" DMDID="{dmdid}"/>"#,
                idx + 1
            )
        })
        .collect::<String>();
    format!(
        r#"<mets:structMap TYPE="PHYSICAL"><mets:div TYPE="physSequence">{divs}</mets:div></mets:structMap>"#
    )
}

#[allow(dead_code)]
pub fn page_descriptor(image_filename: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<pc:PcGts xmlns:pc="http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15">
  <pc:Metadata>
    <pc:Creator>test</pc:Creator>
    <pc:Created>2024-03-01T10:00:00</pc:Created>
    <pc:LastChange>2024-03-01T10:00:00</pc:LastChange>
  </pc:Metadata>
  <pc:Page imageFilename="{image_filename}" imageWidth="1" imageHeight="1"/>
</pc:PcGts>"#
    )
}
