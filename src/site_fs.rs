use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SiteFsError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
}

impl SiteFsError {
    fn from_io(path: &Path, e: std::io::Error) -> Self {
        if e.kind() == ErrorKind::PermissionDenied {
            SiteFsError::PermissionDenied(path.to_path_buf())
        } else {
            SiteFsError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    }
}

/// Filesystem access scoped to a site root.
///
/// Paths handed to these methods are absolute or already joined onto
/// [`SiteFilesystem::root_path`].
pub trait SiteFilesystem {
    fn root_path(&self) -> &Path;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn get_contents(&self, path: &Path) -> Result<String, SiteFsError>;

    fn put_contents(&self, path: &Path, contents: &str) -> Result<(), SiteFsError>;

    /// Removes `path`. Removing a path that does not exist is not an error.
    fn delete(&self, path: &Path) -> Result<(), SiteFsError>;
}

impl<T: SiteFilesystem + ?Sized> SiteFilesystem for &T {
    fn root_path(&self) -> &Path {
        (**self).root_path()
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn get_contents(&self, path: &Path) -> Result<String, SiteFsError> {
        (**self).get_contents(path)
    }

    fn put_contents(&self, path: &Path, contents: &str) -> Result<(), SiteFsError> {
        (**self).put_contents(path, contents)
    }

    fn delete(&self, path: &Path) -> Result<(), SiteFsError> {
        (**self).delete(path)
    }
}

/// [`SiteFilesystem`] over the local disk.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalFilesystem { root: root.into() }
    }
}

impl SiteFilesystem for LocalFilesystem {
    fn root_path(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn get_contents(&self, path: &Path) -> Result<String, SiteFsError> {
        let bytes = std::fs::read(path).map_err(|e| SiteFsError::from_io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Writes to a temporary file in the same directory, fsyncs it, then
    /// renames it into place.
    fn put_contents(&self, path: &Path, contents: &str) -> Result<(), SiteFsError> {
        let parent = path.parent().unwrap_or(Path::new("."));

        let mut temp_file =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| SiteFsError::from_io(parent, e))?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| SiteFsError::from_io(path, e))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| SiteFsError::from_io(path, e))?;

        temp_file
            .persist(path)
            .map_err(|e| SiteFsError::from_io(path, e.error))?;

        Ok(())
    }

    fn delete(&self, path: &Path) -> Result<(), SiteFsError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SiteFsError::from_io(path, e)),
        }
    }
}
