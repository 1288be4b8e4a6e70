//! Attachment model
//!
//! An attachment is a supporting document (receipt, invoice, statement) owned
//! by one expense. Its bytes live in the content-addressed blob store; the
//! record only carries metadata and a `blob:<hash>` reference.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// URL scheme for references into the blob store
pub const BLOB_SCHEME: &str = "blob:";

/// Length of a hex-encoded blake3 digest
const HASH_HEX_LEN: usize = 64;

/// A file attached to an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name
    pub name: String,

    /// Reference to the stored bytes (`blob:<blake3 hex>`)
    pub url: String,

    /// MIME type
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Size in bytes
    pub size: u64,
}

impl Attachment {
    /// Create an attachment record pointing at a stored blob
    pub fn from_blob(name: impl Into<String>, hash: &str, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            url: format!("{}{}", BLOB_SCHEME, hash),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// The content hash this attachment refers to, if the url is a blob
    /// store reference
    ///
    /// Browser object urls (`blob:http://...`) share the scheme but are not
    /// store references, so the digest shape is checked too.
    pub fn blob_hash(&self) -> Option<&str> {
        let hash = self.url.strip_prefix(BLOB_SCHEME)?;
        let is_digest = hash.len() == HASH_HEX_LEN
            && hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
        is_digest.then_some(hash)
    }
}

/// Guess a MIME type from a file's extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262";

    #[test]
    fn test_from_blob_url() {
        let att = Attachment::from_blob("receipt.pdf", HASH, "application/pdf", 2048);
        assert_eq!(att.url, format!("blob:{}", HASH));
        assert_eq!(att.blob_hash(), Some(HASH));
    }

    #[test]
    fn test_browser_object_url_is_not_a_blob_reference() {
        let att = Attachment {
            name: "receipt.pdf".into(),
            url: "blob:http://localhost:5173/6c1c2b0e-1f7c-4d1a-9d9e-1f2f3a4b5c6d".into(),
            mime_type: "application/pdf".into(),
            size: 10,
        };
        assert_eq!(att.blob_hash(), None);
    }

    #[test]
    fn test_serializes_type_field() {
        let att = Attachment::from_blob("bill.png", HASH, "image/png", 7);
        let json = serde_json::to_value(&att).unwrap();
        assert_eq!(json["type"], "image/png");
        assert_eq!(json["size"], 7);
        assert!(json.get("mime_type").is_none());
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for(Path::new("a/b/Receipt.PDF")), "application/pdf");
        assert_eq!(mime_type_for(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("noext")), "application/octet-stream");
    }
}
