//! Parsed spec document.

use std::path::{Component, Path, PathBuf};

use serde_yaml::Value;

/// A spec file parsed into a YAML value tree.
///
/// The document is immutable once loaded. Mapping order is preserved, so a
/// template iterating over options sees them in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    path: PathBuf,
    content: Value,
}

impl SpecDocument {
    /// Wrap already parsed content.
    pub fn new(path: impl Into<PathBuf>, content: Value) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    /// Path of the spec file, exactly as it was given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed content of the spec file. An empty file yields `Value::Null`.
    pub fn content(&self) -> &Value {
        &self.content
    }

    /// Consume the document, returning its content.
    pub fn into_content(self) -> Value {
        self.content
    }

    /// Role name derived from the role directory layout
    /// `<name>/meta/argument_specs.yml`.
    pub fn role_name(&self) -> Option<String> {
        role_name_from_path(&self.path)
    }
}

/// Derive the role name from a spec file path: the name of the directory two
/// levels above the file, after making the path absolute.
///
/// Returns `None` when the absolute path has fewer than three components or
/// the directory name is not valid UTF-8.
pub fn role_name_from_path(path: &Path) -> Option<String> {
    let absolute = normalize(&std::path::absolute(path).ok()?);
    absolute
        .parent()?
        .parent()?
        .file_name()?
        .to_str()
        .map(String::from)
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other),
        }
    }
    result
}
