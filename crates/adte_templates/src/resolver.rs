//! Template resolution.
//!
//! A template is either a user supplied Jinja2 file, or one of the built-in
//! role templates selected by output format.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::format::OutputFormat;

/// Where a resolved template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Built-in template embedded in the binary.
    Builtin { name: &'static str },
    /// Template file on disk. `dir` is the loader root for includes.
    File {
        path: PathBuf,
        dir: PathBuf,
        name: String,
    },
}

impl TemplateSource {
    /// Template name as known to the engine.
    pub fn name(&self) -> &str {
        match self {
            TemplateSource::Builtin { name } => *name,
            TemplateSource::File { name, .. } => name.as_str(),
        }
    }

    /// Human readable location, used in messages.
    pub fn display_path(&self) -> String {
        match self {
            TemplateSource::Builtin { name } => format!("<built-in>/{}", name),
            TemplateSource::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TemplateSource::Builtin { .. })
    }
}

/// Resolves the template to use for an invocation.
pub struct TemplateResolver;

impl TemplateResolver {
    /// Resolve an explicit template file, or fall back to the built-in
    /// template for `format`.
    pub fn resolve(explicit: Option<&Path>, format: OutputFormat) -> TemplateResult<TemplateSource> {
        match explicit {
            Some(path) => Self::resolve_file(path),
            None => Self::resolve_builtin(format),
        }
    }

    /// Resolve a template file on disk.
    pub fn resolve_file(path: &Path) -> TemplateResult<TemplateSource> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if name.is_empty() || !dir.join(&name).is_file() {
            return Err(TemplateError::NotFound {
                name: if name.is_empty() {
                    path.display().to_string()
                } else {
                    name
                },
                search_path: dir.display().to_string(),
            });
        }

        debug!("Resolved template file {:?} in {:?}", name, dir);
        Ok(TemplateSource::File {
            path: path.to_path_buf(),
            dir,
            name,
        })
    }

    /// Resolve the built-in template for `format`.
    pub fn resolve_builtin(format: OutputFormat) -> TemplateResult<TemplateSource> {
        let name = format
            .builtin_template()
            .ok_or_else(|| TemplateError::NoDefaultTemplate(format.to_string()))?;
        debug!("Resolved built-in template {}", name);
        Ok(TemplateSource::Builtin { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_builtin_per_format() {
        let md = TemplateResolver::resolve(None, OutputFormat::Md).unwrap();
        assert_eq!(md, TemplateSource::Builtin { name: "role.md.j2" });
        assert!(md.is_builtin());

        let rst = TemplateResolver::resolve(None, OutputFormat::Rst).unwrap();
        assert_eq!(rst.name(), "role.rst.j2");
    }

    #[test]
    fn test_other_format_has_no_default() {
        let err = TemplateResolver::resolve(None, OutputFormat::Other).unwrap_err();
        assert!(matches!(err, TemplateError::NoDefaultTemplate(_)));
    }

    #[test]
    fn test_resolve_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.txt.j2");
        fs::write(&path, "{{ name }}").unwrap();

        let source = TemplateResolver::resolve(Some(path.as_path()), OutputFormat::Other).unwrap();

        assert_eq!(source.name(), "custom.txt.j2");
        assert_eq!(source.display_path(), path.display().to_string());
        match source {
            TemplateSource::File { dir, .. } => assert_eq!(dir, temp.path()),
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[test]
    fn test_bare_file_name_uses_current_dir() {
        let err = TemplateResolver::resolve_file(Path::new("surely-missing-template.j2")).unwrap_err();
        match err {
            TemplateError::NotFound { name, search_path } => {
                assert_eq!(name, "surely-missing-template.j2");
                assert_eq!(search_path, ".");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
