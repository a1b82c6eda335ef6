//! Module defining and implementing filesystem resource loaders.

use std::fmt;
use std::fs;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use log::{error, trace, warn};

use super::Loader;


/// Loader for file paths from given directory.
///
/// The resources here are just file *paths* (`std::path::PathBuf`),
/// and no substantial "loading" is performed (only name resolution).
///
/// This isn't particularly useful on its own, but can be wrapped around
/// to make more interesting loaders.
pub struct PathLoader {
    directory: PathBuf,
    extension: String,
}

impl PathLoader {
    /// Create a loader which only gives out paths to files
    /// with the extension given.
    pub fn for_extension<D, S>(directory: D, extension: S) -> Self
        where D: AsRef<Path>, S: ToString
    {
        PathLoader{
            directory: directory.as_ref().to_owned(),
            extension: extension.to_string().trim().to_lowercase(),
        }
    }
}

impl Loader for PathLoader {
    type Item = PathBuf;
    type Err = io::Error;

    /// "Load" a path "resource" from the loader's directory.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        let file_part = format!("{}.*", name);
        let pattern = format!("{}", self.directory.join(file_part).display());
        trace!("Globbing with {}", pattern);

        let glob_iter = match glob::glob(&pattern) {
            Ok(it) => it,
            Err(e) => {
                error!("Failed to glob over files with {}: {}", pattern, e);
                return Err(io::Error::new(io::ErrorKind::Other, e));
            },
        };
        let matches: Vec<_> = glob_iter
            .filter_map(Result::ok)
            .filter(|path| {
                let ext = path.extension().and_then(|e| e.to_str())
                    .map(|s| s.trim().to_lowercase());
                ext.as_deref() == Some(self.extension.as_str())
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


/// Loader for byte content of files in given directory.
#[derive(Debug)]
pub struct BytesLoader {
    inner: PathLoader,
}

impl BytesLoader {
    /// Create a loader which only loads files with the extension given.
    #[inline]
    pub fn for_extension<D, S>(directory: D, extension: S) -> Self
        where D: AsRef<Path>, S: ToString
    {
        BytesLoader{inner: PathLoader::for_extension(directory, extension)}
    }
}

impl Loader for BytesLoader {
    type Item = Vec<u8>;
    type Err = io::Error;

    /// Load a file resource as its byte content.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        let path = self.inner.load(name)?;
        let file = fs::OpenOptions::new().read(true).open(path)?;

        let mut bytes = match file.metadata() {
            Ok(stat) => Vec::with_capacity(stat.len() as usize),
            Err(e) => {
                warn!("Failed to stat file of resource `{}` to obtain its size: {}",
                    name, e);
                Vec::new()
            },
        };

        let mut reader = BufReader::new(file);
        reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}


/// Check whether given directory has at least one entry with the extension.
pub(super) fn has_any_with_extension<D: AsRef<Path>>(directory: D, extension: &str) -> bool {
    let entries = match fs::read_dir(directory.as_ref()) {
        Ok(entries) => entries,
        Err(_) => return false,
    };
    entries.filter_map(Result::ok).any(|e| {
        e.path().extension().and_then(|x| x.to_str())
            .map(|x| x.eq_ignore_ascii_case(extension))
            .unwrap_or(false)
    })
}


#[cfg(test)]
mod tests {
    use std::fs;

    use super::{BytesLoader, Loader, PathLoader};

    #[test]
    fn load_by_name_without_extension() {
        let dir = std::env::temp_dir().join("memebatch-fs-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("hello.txt"), b"salut").unwrap();

        let path = PathLoader::for_extension(&dir, "txt").load("hello").unwrap();
        assert_eq!(Some("hello.txt"), path.file_name().and_then(|n| n.to_str()));

        let bytes = BytesLoader::for_extension(&dir, "txt").load("hello").unwrap();
        assert_eq!(b"salut".to_vec(), bytes);
    }

    #[test]
    fn missing_resource_is_not_found() {
        let dir = std::env::temp_dir().join("memebatch-fs-test-empty");
        fs::create_dir_all(&dir).unwrap();
        let err = PathLoader::for_extension(&dir, "txt").load("nope").unwrap_err();
        assert_eq!(std::io::ErrorKind::NotFound, err.kind());
    }
}
