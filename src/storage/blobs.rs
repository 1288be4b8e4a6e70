//! Content-addressed attachment storage
//!
//! Attachment bytes are stored once per distinct content under the hex blake3
//! digest of the bytes. Expenses reference them with `blob:<digest>` urls, so
//! attachments survive across sessions and identical files share storage.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HousingError, HousingResult};
use crate::models::{mime_type_for, AppState, Attachment};

use super::file_io::write_bytes_atomic;

/// Outcome of removing unreferenced blobs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub removed: usize,
    pub bytes_freed: u64,
}

/// Directory of attachment blobs keyed by content hash
#[derive(Debug, Clone)]
pub struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    /// Create a blob store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the blobs
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a blob with `hash` is stored at
    pub fn path_for(&self, hash: &str) -> PathBuf {
        self.dir.join(hash)
    }

    /// Store `bytes` and return their hash; existing content is not rewritten
    pub fn put_bytes(&self, bytes: &[u8]) -> HousingResult<String> {
        let hash = blake3::hash(bytes).to_hex().to_string();
        let path = self.path_for(&hash);

        if path.exists() {
            tracing::debug!(%hash, "Blob already stored");
        } else {
            write_bytes_atomic(&path, bytes)?;
            tracing::debug!(%hash, size = bytes.len(), "Stored blob");
        }

        Ok(hash)
    }

    /// Copy a file into the store and describe it as an attachment
    pub fn attach_file(&self, source: &Path) -> HousingResult<Attachment> {
        let bytes = fs::read(source).map_err(|e| {
            HousingError::Attachment(format!("Failed to read {}: {}", source.display(), e))
        })?;

        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                HousingError::Attachment(format!("Invalid file name: {}", source.display()))
            })?
            .to_string();

        let hash = self.put_bytes(&bytes)?;
        Ok(Attachment::from_blob(
            name,
            &hash,
            mime_type_for(source),
            bytes.len() as u64,
        ))
    }

    /// Path of the stored bytes, if the attachment refers to a blob that exists
    pub fn resolve(&self, attachment: &Attachment) -> Option<PathBuf> {
        let path = self.path_for(attachment.blob_hash()?);
        path.exists().then_some(path)
    }

    /// Read an attachment's bytes, checking them against their hash
    pub fn read(&self, attachment: &Attachment) -> HousingResult<Vec<u8>> {
        let hash = attachment.blob_hash().ok_or_else(|| {
            HousingError::Attachment(format!(
                "'{}' does not reference stored content",
                attachment.name
            ))
        })?;

        let bytes = fs::read(self.path_for(hash))
            .map_err(|_| HousingError::attachment_not_found(&attachment.name))?;

        if blake3::hash(&bytes).to_hex().as_str() != hash {
            return Err(HousingError::Attachment(format!(
                "Stored content for '{}' is damaged",
                attachment.name
            )));
        }

        Ok(bytes)
    }

    /// Hashes of every stored blob
    pub fn stored_hashes(&self) -> HousingResult<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut hashes = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                // Skip temp files from interrupted writes
                if !name.ends_with(".tmp") {
                    hashes.push(name.to_string());
                }
            }
        }
        hashes.sort();
        Ok(hashes)
    }

    /// Delete every blob no expense in `state` refers to
    pub fn prune(&self, state: &AppState) -> HousingResult<PruneReport> {
        let referenced: HashSet<&str> = state
            .expenses
            .iter()
            .flat_map(|e| e.attachments.iter())
            .filter_map(|a| a.blob_hash())
            .collect();

        let mut report = PruneReport::default();
        for hash in self.stored_hashes()? {
            if referenced.contains(hash.as_str()) {
                continue;
            }
            let path = self.path_for(&hash);
            let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
            fs::remove_file(&path).map_err(|e| {
                HousingError::Attachment(format!("Failed to remove {}: {}", path.display(), e))
            })?;
            tracing::info!(%hash, "Pruned unreferenced blob");
            report.removed += 1;
            report.bytes_freed += size;
        }

        Ok(report)
    }
}
