//! Module for loading the fonts that banner text is rendered with.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use rusttype::{self, FontCollection};

use super::Loader;
use super::filesystem::{BytesLoader, PathLoader};


pub const FILE_EXTENSION: &'static str = "ttf";


/// Font that the banner text can be rendered with.
macro_attr! {
    #[derive(NewtypeDeref!, NewtypeFrom!)]
    pub struct Font(rusttype::Font<'static>);
}
impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font(...)")
    }
}


/// Loader of fonts from TTF files in a directory.
///
/// Font resources are named after the font family,
/// i.e. `East Sea Dokdo` loads the file `East Sea Dokdo.ttf`.
#[derive(Debug)]
pub struct FontLoader {
    inner: BytesLoader,
}

impl FontLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FontLoader{
            inner: BytesLoader::new(
                PathLoader::for_extension(directory, FILE_EXTENSION)),
        }
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load<'n>(&self, name: &'n str) -> Result<Font, Self::Err> {
        let bytes = self.inner.load(name).map_err(FontError::Io)?;

        let fonts: Vec<_> = FontCollection::from_bytes(bytes).into_fonts().collect();
        match fonts.len() {
            0 => {
                error!("No fonts in a file for `{}` font resource", name);
                Err(FontError::NoFaces)
            }
            1 => {
                debug!("Font `{}` loaded successfully", name);
                Ok(fonts.into_iter().next().unwrap().into())
            }
            count => {
                error!("Font file for `{}` resource contains {} fonts, expected one",
                    name, count);
                Err(FontError::ExtraFaces(count))
            }
        }
    }
}


/// Error that may occur while loading a font.
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be found or read.
    Io(io::Error),
    /// The file contains no font faces at all.
    NoFaces,
    /// The file is a collection of several faces rather than a single font.
    ExtraFaces(usize),
}

impl Error for FontError {
    fn description(&self) -> &str { "font load error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            FontError::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FontError::Io(ref e) => write!(fmt, "cannot read font file: {}", e),
            FontError::NoFaces => write!(fmt, "no font faces found in the file"),
            FontError::ExtraFaces(c) => write!(fmt, "expected a single font face, found {}", c),
        }
    }
}


#[cfg(test)]
mod tests {
    use resources::Loader;
    use super::{FontError, FontLoader};

    #[test]
    fn missing_font_is_an_io_error() {
        let loader = FontLoader::new("/nonexistent-fonts");
        match loader.load("East Sea Dokdo") {
            Err(FontError::Io(_)) => {}
            result => panic!("unexpected result: {:?}", result),
        }
    }
}
