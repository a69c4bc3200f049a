//! Spec file reading utilities.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::document::SpecDocument;
use crate::error::{SpecError, SpecResult};

/// Reader for spec files.
pub struct SpecReader;

impl SpecReader {
    /// Read and parse a spec file.
    pub fn read(path: impl AsRef<Path>) -> SpecResult<SpecDocument> {
        let path = path.as_ref();
        debug!("Reading spec file from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SpecError::NotFound(path.to_path_buf()),
            _ => SpecError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Self::parse(path, &content)
    }

    /// Parse spec file content that has already been read from `path`.
    pub fn parse(path: impl AsRef<Path>, content: &str) -> SpecResult<SpecDocument> {
        let path = path.as_ref();
        let parse_error = |source: serde_yaml::Error| SpecError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let mut value: Value = serde_yaml::from_str(content).map_err(&parse_error)?;
        // `<<: *anchor` merge keys are shared option blocks in Ansible specs.
        value.apply_merge().map_err(&parse_error)?;
        Ok(SpecDocument::new(path, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_argument_specs() {
        let content = r#"
argument_specs:
  main:
    short_description: Install a web server
    options:
      port:
        type: int
        default: 80
      docroot:
        type: path
"#;

        let doc = SpecReader::parse("roles/web/meta/argument_specs.yml", content).unwrap();
        let options = &doc.content()["argument_specs"]["main"]["options"];
        let keys: Vec<_> = options
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(keys, vec!["port", "docroot"]);
    }

    #[test]
    fn test_parse_empty_content() {
        let doc = SpecReader::parse("empty.yml", "").unwrap();
        assert_eq!(doc.content(), &Value::Null);
    }

    #[test]
    fn test_parse_applies_merge_keys() {
        let content = r#"
base: &base
  type: str
  required: false
argument_specs:
  main:
    options:
      user:
        <<: *base
        description: Login name.
      group:
        <<: *base
        type: int
"#;

        let doc = SpecReader::parse("merge.yml", content).unwrap();
        let options = &doc.content()["argument_specs"]["main"]["options"];

        assert_eq!(options["user"]["type"].as_str(), Some("str"));
        assert_eq!(options["user"]["required"].as_bool(), Some(false));
        assert_eq!(options["group"]["type"].as_str(), Some("int"));
        assert!(options["user"].get("<<").is_none());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = SpecReader::parse("bad.yml", "key: [unclosed").unwrap_err();
        assert!(matches!(err, SpecError::Parse { .. }));
        assert!(err.to_string().contains("bad.yml"));
    }
}
