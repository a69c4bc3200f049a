//! Output file writing.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};

/// Writes rendered documentation to disk.
///
/// Text is written to a temporary file next to the destination and renamed
/// over it once complete, so a failure never leaves a partial output file.
pub struct OutputWriter;

impl OutputWriter {
    /// Output file path for `name` in `out_dir`.
    pub fn output_path(out_dir: &Path, name: &str, ext: &str) -> PathBuf {
        out_dir.join(format!("{}.{}", name, ext))
    }

    /// Create or replace `path` with `contents`.
    pub fn write(path: &Path, contents: &str) -> ExtractResult<()> {
        let write_error = |source: io::Error| ExtractError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = Builder::new()
            .prefix(".adte-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(write_error)?;
        debug!("Writing {} bytes to {:?}", contents.len(), temp.path());

        temp.write_all(contents.as_bytes()).map_err(write_error)?;
        temp.flush().map_err(write_error)?;

        // Temporary files are created owner-only; output files are documents.
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(Permissions::from_mode(0o644))
                .map_err(write_error)?;
        }

        temp.persist(path).map_err(|e| write_error(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_output_path() {
        let path = OutputWriter::output_path(Path::new("docs"), "web", "rst");
        assert_eq!(path, PathBuf::from("docs/web.rst"));
    }

    #[test]
    fn test_write_creates_and_overwrites() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("web.md");

        OutputWriter::write(&path, "first\n").unwrap();
        OutputWriter::write(&path, "second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_to_missing_dir() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing").join("web.md");

        let err = OutputWriter::write(&path, "text").unwrap_err();

        assert!(matches!(err, ExtractError::Write { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_written_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let path = temp.path().join("web.md");
        OutputWriter::write(&path, "text\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
