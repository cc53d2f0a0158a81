//! Archive packaging.
//!
//! A [`Packager`] turns named byte blobs into one downloadable container.
//! [`ZipPackager`] is the only implementation; the trait exists so the
//! dispatcher does not depend on the container format.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Content type of zip archives.
pub const ZIP_CONTENT_TYPE: &str = "application/zip";

/// Errors from archive assembly.
#[derive(Debug, thiserror::Error)]
pub enum PackagingError {
    #[error("failed to add {name} to archive: {source}")]
    Entry {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to write {name} content: {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to finalize archive: {0}")]
    Finish(#[source] zip::result::ZipError),

    #[error("duplicate archive entry: {0}")]
    DuplicateEntry(String),
}

/// Packs named blobs into a single container.
pub trait Packager: Send + Sync {
    /// Builds a container holding `entries` in the given order.
    fn pack(&self, entries: &[(&str, &[u8])]) -> Result<Vec<u8>, PackagingError>;

    /// MIME type of the containers this packager produces.
    fn content_type(&self) -> &'static str;
}

/// Deflate-compressed zip archives built in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPackager;

impl Packager for ZipPackager {
    fn pack(&self, entries: &[(&str, &[u8])]) -> Result<Vec<u8>, PackagingError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (i, (name, data)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(seen, _)| seen == name) {
                return Err(PackagingError::DuplicateEntry(name.to_string()));
            }
            writer
                .start_file(*name, options)
                .map_err(|source| PackagingError::Entry {
                    name: name.to_string(),
                    source,
                })?;
            writer
                .write_all(data)
                .map_err(|source| PackagingError::Write {
                    name: name.to_string(),
                    source,
                })?;
        }

        let cursor = writer.finish().map_err(PackagingError::Finish)?;
        Ok(cursor.into_inner())
    }

    fn content_type(&self) -> &'static str {
        ZIP_CONTENT_TYPE
    }
}

/// A packaged response, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    filename: String,
    content_type: &'static str,
    bytes: Vec<u8>,
}

impl Download {
    pub fn new(filename: impl Into<String>, content_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            bytes,
        }
    }

    /// Suggested file name, e.g. `colorterm.zip`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Exact size of the body in bytes.
    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }

    /// `Content-Disposition` header value.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_entries(bytes: &[u8]) -> Vec<(String, String)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut content = String::new();
                file.read_to_string(&mut content).unwrap();
                (file.name().to_string(), content)
            })
            .collect()
    }

    #[test]
    fn test_pack_keeps_order_and_content() {
        let bytes = ZipPackager
            .pack(&[("HowToInstall.txt", b"guide"), ("colorterm.yaml", b"accent: x\n")])
            .unwrap();
        assert_eq!(
            read_entries(&bytes),
            vec![
                ("HowToInstall.txt".to_string(), "guide".to_string()),
                ("colorterm.yaml".to_string(), "accent: x\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_pack_empty_blob() {
        let bytes = ZipPackager.pack(&[("empty.txt", b"")]).unwrap();
        assert_eq!(read_entries(&bytes), vec![("empty.txt".into(), String::new())]);
    }

    #[test]
    fn test_pack_rejects_duplicates() {
        let err = ZipPackager
            .pack(&[("a.txt", b"1"), ("a.txt", b"2")])
            .unwrap_err();
        assert!(matches!(err, PackagingError::DuplicateEntry(ref n) if n == "a.txt"));
    }

    #[test]
    fn test_download_headers() {
        let download = Download::new("colorterm.zip", ZIP_CONTENT_TYPE, vec![1, 2, 3]);
        assert_eq!(download.content_length(), 3);
        assert_eq!(download.content_type(), "application/zip");
        assert_eq!(
            download.content_disposition(),
            "attachment; filename=colorterm.zip"
        );
        assert_eq!(download.into_bytes(), vec![1, 2, 3]);
    }
}
