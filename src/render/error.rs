//! Export error.

use std::error::Error;
use std::fmt;
use std::io;

use resources::{Font, FontLoader, Loader};


/// Error that may occur during banner export.
pub enum ExportError<Fl = FontLoader>
    where Fl: Loader<Item=Font>
{
    /// The surface has no area to capture.
    EmptySurface,
    /// The font required for the banner text cannot be loaded.
    Font(String, Fl::Err),
    /// Encoding of the rasterized image failed.
    Encode(io::Error),
}

impl<Fl> Error for ExportError<Fl>
    where Fl: Loader<Item=Font>, Fl::Err: Error
{
    fn description(&self) -> &str { "banner export error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            ExportError::EmptySurface => None,
            ExportError::Font(_, ref e) => Some(e),
            ExportError::Encode(ref e) => Some(e),
        }
    }
}

impl<Fl> fmt::Debug for ExportError<Fl>
    where Fl: Loader<Item=Font>
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExportError::EmptySurface => write!(fmt, "ExportError::EmptySurface"),
            ExportError::Font(ref f, _) => write!(fmt, "ExportError::Font({:?})", f),
            ExportError::Encode(ref e) => write!(fmt, "ExportError::Encode({:?})", e),
        }
    }
}

impl<Fl> fmt::Display for ExportError<Fl>
    where Fl: Loader<Item=Font>, Fl::Err: fmt::Display
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExportError::EmptySurface => write!(fmt, "surface has zero area"),
            ExportError::Font(ref f, ref e) => write!(fmt, "cannot load font `{}`: {}", f, e),
            ExportError::Encode(ref e) => write!(fmt, "failed to encode the final image: {}", e),
        }
    }
}
