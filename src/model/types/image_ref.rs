//! Module defining references to user-supplied background images.

use std::fmt;
use std::path::PathBuf;


/// Reference to a background image chosen by the user.
///
/// The upload flow reads the picked file and embeds it as a data URI;
/// hosts that keep files on disk can pass a path instead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ImageRef {
    /// An embedded `data:<media type>;base64,<payload>` URI.
    DataUri(String),
    /// Path to an image file.
    Path(PathBuf),
}

impl ImageRef {
    /// Create a data-URI reference out of raw image bytes.
    pub fn from_bytes<B: AsRef<[u8]>>(media_type: &str, bytes: B) -> Self {
        ImageRef::DataUri(format!("data:{};base64,{}",
            media_type, ::base64::encode(bytes.as_ref())))
    }

    /// The declared media type, for data URIs that carry one.
    pub fn media_type(&self) -> Option<&str> {
        match *self {
            ImageRef::DataUri(ref uri) => {
                let rest = uri.splitn(2, ':').nth(1)?;
                let header = rest.splitn(2, ',').next()?;
                let mt = header.split(';').next().unwrap_or("");
                if mt.is_empty() { None } else { Some(mt) }
            }
            ImageRef::Path(_) => None,
        }
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            // Data URIs can be megabytes long; don't dump the payload.
            ImageRef::DataUri(ref uri) => write!(fmt, "ImageRef::DataUri(<{} bytes>)", uri.len()),
            ImageRef::Path(ref path) => write!(fmt, "ImageRef::Path({:?})", path),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ImageRef::DataUri(ref uri) => {
                let media_type = self.media_type().unwrap_or("unknown");
                write!(fmt, "<data URI, {} ({} bytes)>", media_type, uri.len())
            }
            ImageRef::Path(ref path) => write!(fmt, "{}", path.display()),
        }
    }
}
