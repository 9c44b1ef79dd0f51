//! Token domain: the create flow's descriptor, image asset and launch request.
//!
//! A launch is described by a JSON file next to its image:
//!
//! ```json
//! {
//!   "image": "./logo.png",
//!   "name": "Portal Cat",
//!   "symbol": "PCAT",
//!   "description": "A cat that launches tokens",
//!   "twitter": "https://x.com/portalcat",
//!   "showName": true,
//!   "amount": 0.5,
//!   "slippage": 10,
//!   "tip": 0.0001
//! }
//! ```
//!
//! The image path is resolved against the descriptor's directory. Field values
//! are not checked here; the metadata and build services validate them, and
//! `amount`, `slippage` and `tip` are forwarded exactly as written.

pub mod client;
pub mod wire;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{PortalError, PortalResult};

/// Token descriptor as read from the JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    pub image: PathBuf,
    pub name: String,
    pub symbol: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub show_name: bool,
    pub amount: Number,
    pub slippage: Number,
    pub tip: Number,
}

/// Image bytes plus the name and content type used in the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    /// Read an image from disk. A missing or unreadable file is a config error.
    pub fn read(path: &Path) -> PortalResult<Self> {
        if !path.is_file() {
            return Err(PortalError::Config(format!(
                "Image not found at {}",
                path.display()
            )));
        }
        let bytes = std::fs::read(path).map_err(|e| {
            PortalError::Config(format!("Failed to read image {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self {
            mime: mime_for(path),
            file_name,
            bytes,
        })
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// A fully collected create request: descriptor plus its loaded image.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLaunch {
    pub descriptor: TokenDescriptor,
    pub image: ImageAsset,
}

impl TokenLaunch {
    /// Read the descriptor file and the image it references.
    pub fn load(path: impl AsRef<Path>) -> PortalResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PortalError::Config(format!(
                "Failed to read descriptor {}: {}",
                path.display(),
                e
            ))
        })?;
        let descriptor: TokenDescriptor = serde_json::from_str(&raw).map_err(|e| {
            PortalError::Config(format!("Malformed descriptor {}: {}", path.display(), e))
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let image_path = base.join(&descriptor.image);
        let image = ImageAsset::read(&image_path)?;

        tracing::debug!(
            name = %descriptor.name,
            symbol = %descriptor.symbol,
            image = %image_path.display(),
            image_bytes = image.bytes.len(),
            "Loaded token descriptor"
        );

        Ok(Self { descriptor, image })
    }
}
