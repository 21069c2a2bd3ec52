//! Module handling user-supplied background images.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::sync::Arc;

use base64;
use image::{self, DynamicImage, GenericImage, ImageError, ImageFormat};

use model::ImageRef;


lazy_static! {
    /// Map of declared data-URI media types to supported image formats.
    pub static ref MEDIA_TYPE_FORMATS: HashMap<&'static str, ImageFormat> = hashmap!{
        "image/gif" => ImageFormat::GIF,
        "image/jpeg" => ImageFormat::JPEG,
        "image/png" => ImageFormat::PNG,
    };
}


/// A background image resolved from an `ImageRef` and decoded into pixels.
///
/// Decoding happens once, at set time; the pixels are shared from then on,
/// so cloning a `BackgroundImage` (or the config holding one) is cheap.
#[derive(Clone)]
pub struct BackgroundImage {
    source: ImageRef,
    image: Arc<DynamicImage>,
}

impl BackgroundImage {
    /// Resolve & decode the image behind given reference.
    pub fn load(source: &ImageRef) -> Result<BackgroundImage, BackgroundError> {
        let bytes = match *source {
            ImageRef::DataUri(ref uri) => decode_data_uri(uri)?,
            ImageRef::Path(ref path) => {
                let mut bytes = Vec::new();
                File::open(path)
                    .and_then(|mut f| f.read_to_end(&mut bytes))
                    .map_err(BackgroundError::Io)?;
                bytes
            }
        };

        // A media type declared in the URI picks the decoder directly;
        // otherwise the format is guessed from the payload.
        let image = match source.media_type()
            .and_then(|mt| MEDIA_TYPE_FORMATS.get(mt))
        {
            Some(&format) => image::load_from_memory_with_format(&bytes, format),
            None => image::load_from_memory(&bytes),
        }.map_err(BackgroundError::Decode)?;

        let (width, height) = image.dimensions();
        debug!("Background image decoded from {}: {}x{}", source, width, height);
        Ok(BackgroundImage{
            source: source.clone(),
            image: Arc::new(image),
        })
    }

    /// Wrap an already decoded image.
    pub(crate) fn from_image(source: ImageRef, image: DynamicImage) -> Self {
        BackgroundImage{source: source, image: Arc::new(image)}
    }
}

impl BackgroundImage {
    /// The reference this image was resolved from.
    #[inline]
    pub fn source(&self) -> &ImageRef {
        &self.source
    }

    /// Shared handle to the decoded pixels.
    #[inline]
    pub fn pixels(&self) -> Arc<DynamicImage> {
        self.image.clone()
    }

    /// Pixel dimensions of the decoded image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl fmt::Debug for BackgroundImage {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(fmt, "BackgroundImage({:?}, {}x{})", self.source, width, height)
    }
}


/// Extract the payload bytes out of a base64 data URI.
fn decode_data_uri(uri: &str) -> Result<Vec<u8>, BackgroundError> {
    let malformed = || BackgroundError::MalformedUri(uri.len());

    let rest = uri.splitn(2, ':').nth(1).ok_or_else(&malformed)?;
    let mut parts = rest.splitn(2, ',');
    let header = parts.next().ok_or_else(&malformed)?;
    let payload = parts.next().ok_or_else(&malformed)?;

    if !header.split(';').any(|p| p == "base64") {
        // Percent-encoded payloads are never produced by the upload flow.
        return Err(malformed());
    }
    base64::decode(payload).map_err(BackgroundError::Base64)
}


/// Error that may occur while resolving a background image reference.
#[derive(Debug)]
pub enum BackgroundError {
    /// The data URI is structurally invalid (no payload, or not base64).
    MalformedUri(usize),
    /// The base64 payload doesn't decode.
    Base64(base64::DecodeError),
    /// The referenced file could not be read.
    Io(io::Error),
    /// The bytes don't decode as an image in any supported format.
    Decode(ImageError),
}

impl Error for BackgroundError {
    fn description(&self) -> &str { "background image load error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            BackgroundError::MalformedUri(_) => None,
            BackgroundError::Base64(ref e) => Some(e),
            BackgroundError::Io(ref e) => Some(e),
            BackgroundError::Decode(ref e) => Some(e),
        }
    }
}

impl fmt::Display for BackgroundError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BackgroundError::MalformedUri(len) =>
                write!(fmt, "malformed data URI ({} bytes)", len),
            BackgroundError::Base64(ref e) => write!(fmt, "invalid base64 payload: {}", e),
            BackgroundError::Io(ref e) => write!(fmt, "cannot read image file: {}", e),
            BackgroundError::Decode(ref e) => write!(fmt, "cannot decode image: {}", e),
        }
    }
}
