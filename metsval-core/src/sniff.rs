//! Content-based media type detection.
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const XML_MEDIA_TYPE: &str = "application/xml";
pub const OCTET_STREAM: &str = "application/octet-stream";

const HEAD_LEN: u64 = 8192;

/// Error raised when a file cannot be read for sniffing.
#[derive(Debug, Error)]
#[error("cannot read {} for media type detection: {source}", path.display())]
pub struct SniffError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Detects the media type of a file from its content.
pub trait MediaTypeSniffer {
    fn detect(&self, path: &Path) -> Result<String, SniffError>;
}

/// Magic-number sniffer. Never looks at the file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentSniffer;

impl MediaTypeSniffer for ContentSniffer {
    fn detect(&self, path: &Path) -> Result<String, SniffError> {
        let head = read_head(path).map_err(|source| SniffError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(sniff_bytes(&head).to_string())
    }
}

fn read_head(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut head = Vec::new();
    std::fs::File::open(path)?
        .take(HEAD_LEN)
        .read_to_end(&mut head)?;
    Ok(head)
}

fn sniff_bytes(head: &[u8]) -> &'static str {
    match infer::get(head) {
        Some(kind) if kind.mime_type() != "text/xml" => kind.mime_type(),
        _ if looks_like_xml(head) => XML_MEDIA_TYPE,
        _ => OCTET_STREAM,
    }
}

fn looks_like_xml(head: &[u8]) -> bool {
    let body = head.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(head);
    body.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'<')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEAD: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const TIFF_HEAD: &[u8] = b"II*\0\x08\0\0\0";

    #[test]
    fn image_magic_numbers() {
        assert_eq!(sniff_bytes(PNG_HEAD), "image/png");
        assert_eq!(sniff_bytes(TIFF_HEAD), "image/tiff");
        assert_eq!(sniff_bytes(b"\xFF\xD8\xFF\xE0\0\x10JFIF\0"), "image/jpeg");
    }

    #[test]
    fn xml_is_generic_xml() {
        assert_eq!(sniff_bytes(b"<?xml version=\"1.0\"?><a/>"), XML_MEDIA_TYPE);
        assert_eq!(sniff_bytes(b"\xEF\xBB\xBF  \n<PcGts/>"), XML_MEDIA_TYPE);
    }

    #[test]
    fn unknown_content_is_octet_stream() {
        assert_eq!(sniff_bytes(b"plain text"), OCTET_STREAM);
        assert_eq!(sniff_bytes(b""), OCTET_STREAM);
    }

    #[test]
    fn extension_is_ignored() {
        let mut file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("temp file");
        file.write_all(b"<?xml version=\"1.0\"?><x/>").expect("write");
        let detected = ContentSniffer.detect(file.path()).expect("detect");
        assert_eq!(detected, XML_MEDIA_TYPE);
    }

    #[test]
    fn unreadable_file_errors() {
        let err = ContentSniffer
            .detect(Path::new("no/such/image.tif"))
            .unwrap_err();
        assert_eq!(err.path, Path::new("no/such/image.tif"));
    }
}
