//! Pre-rendered chart images handed to the document renderer

use crate::error::{BlueprintError, BlueprintResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// A chart image produced by an external renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ChartImage {
    pub fn new(file_name: impl Into<String>, media_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type,
            bytes,
        }
    }

    /// Read an image file, inferring the media type from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> BlueprintResult<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let media_type = media_type_for(path).ok_or_else(|| BlueprintError::InvalidChart(file_name.clone()))?;
        let bytes = std::fs::read(path)?;

        log::debug!("Loaded chart {} ({} bytes, {})", file_name, bytes.len(), media_type);
        Ok(Self {
            file_name,
            media_type,
            bytes,
        })
    }

    /// `data:` URI embedding the image, for self-contained documents
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, STANDARD.encode(&self.bytes))
    }
}

fn media_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
