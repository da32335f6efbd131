//! Import and export of whole configuration documents.
//!
//! Both import paths (apply immediately, or hand off for review) share one
//! pure preparation step, [`prepare_import`], and differ only in where the
//! normalized document goes afterwards.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde_json::Value;
use strum::{Display, EnumString};
use tracing::info;

use crate::error::CoreError;
use crate::migrate::{MigrationReport, normalize};
use crate::store::{ConfigStore, ReviewSink};

pub const EXPORT_FILE_PREFIX: &str = "rdio-scanner-config";
pub const EXPORT_MIME: &str = "application/json";

const DATA_URI_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Where an imported document goes once normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ImportMode {
    /// Persist with a full replace.
    Apply,
    /// Hand to the review sink without persisting.
    Review,
}

/// A parsed and normalized import, ready to dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub mode: ImportMode,
    pub document: Value,
    pub report: MigrationReport,
}

impl ImportOutcome {
    /// Send the document to the collaborator `mode` selects.
    ///
    /// Persistence failures propagate unchanged; nothing is retried.
    pub async fn dispatch<S, R>(&self, store: &S, sink: &mut R) -> Result<(), CoreError>
    where
        S: ConfigStore + Sync,
        R: ReviewSink + Send,
    {
        match self.mode {
            ImportMode::Apply => {
                store.save(&self.document, true).await?;
                info!(changes = self.report.total(), "imported configuration applied");
            }
            ImportMode::Review => {
                sink.emit(&self.document, true);
                info!(changes = self.report.total(), "imported configuration sent for review");
            }
        }
        Ok(())
    }
}

/// Parse raw upload bytes into a document.
///
/// Accepts plain JSON (with or without a UTF-8 byte-order mark) or a
/// base64 data URI as produced by [`ExportFile::data_uri`].
pub fn parse_document(bytes: &[u8]) -> Result<Value, CoreError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let trimmed = bytes.trim_ascii_start();
    if trimmed.starts_with(DATA_URI_SCHEME.as_bytes()) {
        let uri = std::str::from_utf8(trimmed).map_err(|e| CoreError::DataUri {
            reason: e.to_string(),
        })?;
        let decoded = decode_data_uri(uri)?;
        return Ok(serde_json::from_slice(&decoded)?);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Parse and normalize an import. No partial result exists on parse failure.
pub fn prepare_import(bytes: &[u8], mode: ImportMode) -> Result<ImportOutcome, CoreError> {
    let document = parse_document(bytes)?;
    let normalized = normalize(document);
    Ok(ImportOutcome {
        mode,
        document: normalized.document,
        report: normalized.report,
    })
}

// ── Export ──────────────────────────────────────────────────────────

/// A serialized configuration ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    pub fn from_document(document: &Value, now: DateTime<Utc>) -> Result<Self, CoreError> {
        Ok(Self {
            file_name: export_file_name(now),
            mime: EXPORT_MIME,
            bytes: serde_json::to_vec_pretty(document)?,
        })
    }

    /// `data:` URI carrying the file, base64 over its UTF-8 bytes.
    pub fn data_uri(&self) -> String {
        format!(
            "{DATA_URI_SCHEME}{}{BASE64_MARKER}{}",
            self.mime,
            STANDARD.encode(&self.bytes)
        )
    }
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("{EXPORT_FILE_PREFIX}-{}.json", now.format("%Y-%m-%d"))
}

/// Decode the payload of a base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, CoreError> {
    let rest = uri
        .trim()
        .strip_prefix(DATA_URI_SCHEME)
        .ok_or_else(|| CoreError::DataUri {
            reason: "missing data: scheme".into(),
        })?;
    let (_, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or_else(|| CoreError::DataUri {
            reason: "only base64 data URIs are supported".into(),
        })?;
    STANDARD.decode(payload).map_err(|e| CoreError::DataUri {
        reason: e.to_string(),
    })
}

/// Load the current document from `store` and package it for download.
pub async fn export<S>(store: &S, now: DateTime<Utc>) -> Result<ExportFile, CoreError>
where
    S: ConfigStore + Sync,
{
    let document = store.load().await?;
    let file = ExportFile::from_document(&document, now)?;
    info!(file = %file.file_name, bytes = file.bytes.len(), "configuration exported");
    Ok(file)
}
