//! Module defining and implementing filesystem resource loaders.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use glob;

use super::Loader;


/// Loader resolving resource names to file paths in a directory.
///
/// Names are matched against file stems, so `load("Roboto")` finds
/// `Roboto.ttf` (or any other extension the loader was restricted to).
pub struct PathLoader {
    directory: PathBuf,
    extension: Option<String>,
}

impl PathLoader {
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        PathLoader{
            directory: directory.as_ref().to_owned(),
            extension: None,
        }
    }

    /// Create a loader which only resolves files with given extension.
    pub fn for_extension<D: AsRef<Path>, S: ToString>(directory: D, extension: S) -> Self {
        PathLoader{
            directory: directory.as_ref().to_owned(),
            extension: Some(extension.to_string().trim().to_lowercase()),
        }
    }
}

impl Loader for PathLoader {
    type Item = PathBuf;
    type Err = io::Error;

    /// "Load" a path "resource" from the loader's directory.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        let file_part = format!("{}.*", name);
        let pattern = format!("{}", self.directory.join(file_part).display());
        trace!("Globbing with {}", pattern);

        let glob_iter = match glob::glob(&pattern) {
            Ok(it) => it,
            Err(e) => {
                error!("Failed to glob over files with {}: {}", pattern, e);
                return Err(io::Error::new(io::ErrorKind::Other, e));
            }
        };
        let matches: Vec<_> = glob_iter
            .filter_map(Result::ok)
            .filter(|path| match self.extension {
                Some(ref wanted) => {
                    let ext = path.extension().and_then(|e| e.to_str())
                        .map(|s| s.trim().to_lowercase());
                    ext.as_ref() == Some(wanted)
                }
                None => true,
            })
            .collect();

        match matches.len() {
            0 => Err(io::Error::new(io::ErrorKind::NotFound,
                format!("resource `{}` not found in {}", name, self.directory.display()))),
            1 => Ok(matches.into_iter().next().unwrap()),
            c => Err(io::Error::new(io::ErrorKind::InvalidInput,
                format!("ambiguous resource name `{}` matching {} files in {}",
                    name, c, self.directory.display()))),
        }
    }
}

impl fmt::Debug for PathLoader {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("PathLoader")
            .field("directory", &self.directory)
            .field("extension", &self.extension)
            .finish()
    }
}


/// Loader for the byte content of files in given directory.
#[derive(Debug)]
pub struct BytesLoader {
    inner: PathLoader,
}

impl BytesLoader {
    #[inline]
    pub fn new(inner: PathLoader) -> Self {
        BytesLoader{inner}
    }
}
impl From<PathLoader> for BytesLoader {
    fn from(input: PathLoader) -> Self {
        Self::new(input)
    }
}

impl Loader for BytesLoader {
    type Item = Vec<u8>;
    type Err = io::Error;

    /// Load a file resource as its byte content.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        let path = self.inner.load(name)?;
        let file = File::open(path)?;

        let mut bytes = match file.metadata() {
            Ok(stat) => Vec::with_capacity(stat.len() as usize),
            Err(e) => {
                warn!("Failed to stat file of resource `{}` to obtain its size: {}",
                    name, e);
                Vec::new()
            }
        };

        let mut reader = BufReader::new(file);
        reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}


#[cfg(test)]
mod tests {
    use std::io;
    use super::super::Loader;
    use super::{BytesLoader, PathLoader};

    #[test]
    fn missing_resources_are_not_found() {
        let loader = PathLoader::for_extension("/nonexistent-directory", "ttf");
        let err = loader.load("nope").unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());

        let loader = BytesLoader::new(PathLoader::new("/nonexistent-directory"));
        assert!(loader.load("nope").is_err());
    }
}
