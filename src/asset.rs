// ABOUTME: Image asset handling for the deckgen application
// ABOUTME: Classifies slide image references as embedded data, remote URLs, or unusable

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use log::warn;
use url::Url;

/// A slide image reference, decoded far enough to place it in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageAsset {
    Empty,
    /// Inline image bytes from a `data:` URI.
    Embedded { format: ImageFormat, bytes: Vec<u8> },
    /// An http(s) image that is linked rather than embedded.
    Remote(Url),
    Unsupported(String),
}

impl ImageAsset {
    pub fn parse(reference: &str) -> Self {
        let reference = reference.trim();
        if reference.is_empty() {
            return ImageAsset::Empty;
        }

        if let Some(rest) = reference.strip_prefix("data:") {
            return Self::parse_data_uri(rest)
                .unwrap_or_else(ImageAsset::Unsupported);
        }

        match Url::parse(reference) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => ImageAsset::Remote(url),
            Ok(url) => ImageAsset::Unsupported(format!("unsupported scheme '{}'", url.scheme())),
            Err(e) => ImageAsset::Unsupported(format!("not a URL: {}", e)),
        }
    }

    fn parse_data_uri(rest: &str) -> Result<Self, String> {
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| "data URI has no payload".to_string())?;
        if !header.ends_with(";base64") {
            return Err("data URI is not base64 encoded".to_string());
        }
        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| format!("invalid base64 payload: {}", e))?;

        // Trust the bytes over the declared media type
        let format = match image::guess_format(&bytes) {
            Ok(format) => format,
            Err(_) => {
                let mime = header.trim_end_matches(";base64");
                ImageFormat::from_mime_type(mime)
                    .ok_or_else(|| format!("unrecognised image type '{}'", mime))?
            }
        };
        Ok(ImageAsset::Embedded { format, bytes })
    }

    /// File extension used when the image is stored inside a document.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            ImageAsset::Embedded { format, .. } => Some(match format {
                ImageFormat::Jpeg => "jpeg",
                ImageFormat::Gif => "gif",
                ImageFormat::Bmp => "bmp",
                ImageFormat::Tiff => "tiff",
                ImageFormat::WebP => "webp",
                _ => "png",
            }),
            _ => None,
        }
    }

    /// The reference as something a browser can load, if any.
    pub fn browser_src(reference: &str) -> Option<&str> {
        match ImageAsset::parse(reference) {
            ImageAsset::Embedded { .. } | ImageAsset::Remote(_) => Some(reference.trim()),
            ImageAsset::Empty => None,
            ImageAsset::Unsupported(reason) => {
                warn!("Skipping image reference: {}", reason);
                None
            }
        }
    }
}
