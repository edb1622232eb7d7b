// ============================================================
// Layer 6 — Upload Directory
// ============================================================
// Raw-bytes storage for uploaded PDF manuals: one file per
// manual, named after the upload, in a flat directory.
//
//   data/
//     corolla_2019.pdf
//     golf_mk7.pdf
//
// Names are validated before they touch the filesystem so a
// request can never read or delete outside `dir`.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::domain::error::{CoreError, CoreResult};

const PDF_EXTENSION: &str = "pdf";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reduce an uploaded file name to a bare `*.pdf` file name.
    ///
    /// Browsers may send a full client path ("C:\\docs\\manual.pdf");
    /// only the last component is kept.
    pub fn sanitize_name(raw: &str) -> CoreResult<String> {
        let base = raw
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        if base.is_empty() || base == "." || base == ".." {
            return Err(CoreError::InvalidRequest("missing file name".into()));
        }
        if !has_pdf_extension(base) {
            return Err(CoreError::InvalidRequest(format!(
                "'{base}' is not a PDF file"
            )));
        }
        Ok(base.to_string())
    }

    /// Write an upload, replacing any file with the same name.
    pub fn save(&self, name: &str, bytes: &[u8]) -> CoreResult<PathBuf> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, bytes)?;
        tracing::debug!("Stored '{}' ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    pub fn read(&self, name: &str) -> CoreResult<Vec<u8>> {
        let path = self.path_for(name)?;
        fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CoreError::DocumentNotFound(name.to_string()),
            _ => CoreError::Io(e),
        })
    }

    /// Returns false when there was nothing to delete.
    pub fn remove(&self, name: &str) -> CoreResult<bool> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Stored manual names, sorted. A missing directory is an empty store.
    pub fn list(&self) -> CoreResult<Vec<String>> {
        if !self.dir.exists() {
            tracing::debug!(
                "Upload directory '{}' does not exist yet",
                self.dir.display()
            );
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if has_pdf_extension(name) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    fn path_for(&self, name: &str) -> CoreResult<PathBuf> {
        let clean = Self::sanitize_name(name)?;
        if clean != name {
            return Err(CoreError::DocumentNotFound(name.to_string()));
        }
        Ok(self.dir.join(clean))
    }
}

fn has_pdf_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PDF_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_last_component() {
        assert_eq!(FileStore::sanitize_name("manual.pdf").unwrap(), "manual.pdf");
        assert_eq!(
            FileStore::sanitize_name("C:\\Users\\me\\Golf.PDF").unwrap(),
            "Golf.PDF"
        );
        assert_eq!(
            FileStore::sanitize_name("../../etc/owner.pdf").unwrap(),
            "owner.pdf"
        );
    }

    #[test]
    fn test_sanitize_rejects_non_pdf() {
        assert!(matches!(
            FileStore::sanitize_name("notes.txt"),
            Err(CoreError::InvalidRequest(_))
        ));
        assert!(matches!(
            FileStore::sanitize_name(""),
            Err(CoreError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_save_list_read_remove() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("uploads"));

        assert!(store.list().unwrap().is_empty());

        store.save("b.pdf", b"bee").unwrap();
        store.save("a.pdf", b"ay").unwrap();
        fs::write(store.dir().join("notes.txt"), b"ignored").unwrap();

        assert_eq!(store.list().unwrap(), vec!["a.pdf", "b.pdf"]);
        assert_eq!(store.read("b.pdf").unwrap(), b"bee");

        assert!(store.remove("a.pdf").unwrap());
        assert!(!store.remove("a.pdf").unwrap());
        assert_eq!(store.list().unwrap(), vec!["b.pdf"]);
    }

    #[test]
    fn test_read_unknown_is_not_found() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());

        assert!(matches!(
            store.read("ghost.pdf"),
            Err(CoreError::DocumentNotFound(_))
        ));
    }

    #[test]
    fn test_traversal_names_never_resolve() {
        let tmp   = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());

        assert!(matches!(
            store.read("../secret.pdf"),
            Err(CoreError::DocumentNotFound(_))
        ));
    }
}
