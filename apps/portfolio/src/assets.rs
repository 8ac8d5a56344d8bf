//! Asset loader: locates static files (profile photo, CV) next to the binary,
//! falling back to the working directory, and encodes them for inline embedding.
//!
//! Missing files are an expected condition: every lookup returns
//! `Result<Bytes, AssetNotFound>` and callers degrade to a visible notice.

use std::path::{Component, Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

/// A named asset could not be read from any resolution location.
///
/// Carries every path that was tried so the log line explains the miss.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("asset '{filename}' not found")]
pub struct AssetNotFound {
    pub filename: String,
    pub searched: Vec<PathBuf>,
}

impl AssetNotFound {
    fn new(filename: &str, searched: Vec<PathBuf>) -> Self {
        Self {
            filename: filename.to_string(),
            searched,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Source of raw asset bytes. Carried in `AppState` as `Arc<dyn AssetSource>`.
///
/// Implementations must never cache: the renderer re-reads on every pass.
pub trait AssetSource: Send + Sync {
    fn load(&self, filename: &str) -> Result<Bytes, AssetNotFound>;
}

// ────────────────────────────────────────────────────────────────────────────
// FsAssets: filesystem-backed loader
// ────────────────────────────────────────────────────────────────────────────

/// Filesystem loader with a two-step resolution rule:
/// 1. `base_dir/filename`
/// 2. `filename` relative to the fallback root (the process working directory
///    unless overridden)
#[derive(Debug, Clone)]
pub struct FsAssets {
    base_dir: PathBuf,
    fallback_dir: Option<PathBuf>,
}

impl FsAssets {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            fallback_dir: None,
        }
    }

    /// Replaces the working-directory fallback with an explicit root.
    #[cfg(test)]
    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = Some(dir.into());
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn candidates(&self, filename: &str) -> [PathBuf; 2] {
        let fallback = match &self.fallback_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        };
        [self.base_dir.join(filename), fallback]
    }
}

impl AssetSource for FsAssets {
    fn load(&self, filename: &str) -> Result<Bytes, AssetNotFound> {
        if !is_plain_relative(filename) {
            warn!("Rejected asset name '{filename}'");
            return Err(AssetNotFound::new(filename, Vec::new()));
        }

        let candidates = self.candidates(filename);
        for path in &candidates {
            if !path.is_file() {
                continue;
            }
            // The file may vanish or be unreadable between the check and the read.
            match std::fs::read(path) {
                Ok(data) => {
                    debug!("Loaded asset '{filename}' from {} ({} bytes)", path.display(), data.len());
                    return Ok(Bytes::from(data));
                }
                Err(e) => {
                    warn!("Failed to read asset at {}: {e}", path.display());
                }
            }
        }

        warn!(
            "Asset '{filename}' not found (searched: {})",
            candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Err(AssetNotFound::new(filename, candidates.to_vec()))
    }
}

/// True when `filename` is a relative path made only of normal components.
fn is_plain_relative(filename: &str) -> bool {
    if filename.is_empty() {
        return false;
    }
    Path::new(filename)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// Returns the directory holding the running executable.
pub fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

// ────────────────────────────────────────────────────────────────────────────
// Inline encoding
// ────────────────────────────────────────────────────────────────────────────

/// Standard base64 encoding used for embeddable payloads.
pub fn encode_inline(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Exact inverse of [`encode_inline`].
#[cfg(test)]
pub fn decode_inline(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(text)
}

/// Builds a `data:` URI, guessing the MIME type from the file extension.
pub fn data_uri(filename: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(filename).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), encode_inline(bytes))
}

// ────────────────────────────────────────────────────────────────────────────
// Downloads
// ────────────────────────────────────────────────────────────────────────────

pub const PDF_MIME: &str = "application/pdf";

/// An asset exposed as a downloadable byte stream.
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub body: Bytes,
}

impl Download {
    pub fn size_bytes(&self) -> usize {
        self.body.len()
    }

    /// `Content-Disposition` value that makes browsers save the file.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename.replace('"', ""))
    }
}

/// Loads a PDF asset for download.
pub fn load_pdf(source: &dyn AssetSource, filename: &str) -> Result<Download, AssetNotFound> {
    let body = source.load(filename)?;
    Ok(Download {
        filename: filename.to_string(),
        mime: PDF_MIME,
        body,
    })
}
