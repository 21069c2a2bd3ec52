//! Defines the output of an export operation.

use std::io::{self, Write};
use std::ops::Deref;

use image::ImageFormat;
use mime::{self, Mime};


/// File name the exported banner is offered for download under.
pub const EXPORT_FILE_NAME: &'static str = "banner-sample.png";


/// A banner rasterized by a single export operation.
///
/// Holds the encoded PNG bytes; the artifact is not cached or reused,
/// every export produces a fresh one.
#[derive(Clone, Debug)]
#[must_use = "unused export artifact which must be used"]
pub struct ExportArtifact {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl ExportArtifact {
    #[inline]
    pub(super) fn new(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        ExportArtifact{width, height, bytes}
    }
}

impl ExportArtifact {
    /// Name the artifact is to be saved under.
    #[inline]
    pub fn file_name(&self) -> &'static str {
        EXPORT_FILE_NAME
    }

    /// Pixel dimensions of the exported image.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Image format of the artifact. Always PNG.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        ImageFormat::PNG
    }

    /// The MIME type matching the artifact's format.
    #[inline]
    pub fn mime_type(&self) -> Mime {
        mime::IMAGE_PNG
    }

    /// Raw bytes of the encoded image.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the artifact into a vector of bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write the encoded image out, e.g. into the download sink.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.bytes)
    }
}

impl Deref for ExportArtifact {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl Into<Vec<u8>> for ExportArtifact {
    fn into(self) -> Vec<u8> {
        self.into_bytes()
    }
}
