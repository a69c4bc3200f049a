//! Options for an extraction run.

use std::path::PathBuf;

use adte_templates::OutputFormat;

use crate::error::{ExtractError, ExtractResult};

/// Options controlling which spec files are processed and how.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Spec files to process, one output file each.
    pub spec_files: Vec<PathBuf>,
    /// Role or playbook name. Derived from each spec file path when unset.
    pub name: Option<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Output file extension. Defaults to the format name.
    pub ext: Option<String>,
    /// Template file. Defaults to the built-in template for the format.
    pub template: Option<PathBuf>,
    /// Output directory. Must exist.
    pub out_dir: PathBuf,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            spec_files: Vec::new(),
            name: None,
            format: OutputFormat::default(),
            ext: None,
            template: None,
            out_dir: PathBuf::from("."),
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spec_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.spec_files.push(path.into());
        self
    }

    pub fn with_spec_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.spec_files.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }

    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = Some(path.into());
        self
    }

    pub fn with_out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = path.into();
        self
    }

    /// Check the cross-option rules.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.name.is_some() && self.spec_files.len() > 1 {
            return Err(ExtractError::InvalidOptions(
                "when the --name option is used, only one spec file may be specified".into(),
            ));
        }
        if self.format == OutputFormat::Other {
            if self.ext.is_none() {
                return Err(ExtractError::InvalidOptions(
                    "when format 'other' is specified, the --ext option is required".into(),
                ));
            }
            if self.template.is_none() {
                return Err(ExtractError::InvalidOptions(
                    "when format 'other' is specified, the --template option is required".into(),
                ));
            }
        }
        if self.ext.is_some() && self.out_ext().is_empty() {
            return Err(ExtractError::InvalidOptions(
                "the --ext option must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Extension of the output files, without surrounding dots.
    pub fn out_ext(&self) -> String {
        match &self.ext {
            Some(ext) => ext.trim_matches('.').to_string(),
            None => self
                .format
                .default_extension()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExtractOptions::new();
        assert_eq!(options.format, OutputFormat::Md);
        assert_eq!(options.out_dir, PathBuf::from("."));
        assert_eq!(options.out_ext(), "md");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_ext_dots_are_stripped() {
        let options = ExtractOptions::new().with_ext(".adoc");
        assert_eq!(options.out_ext(), "adoc");
        assert_eq!(ExtractOptions::new().with_ext("txt.").out_ext(), "txt");
    }

    #[test]
    fn test_name_with_multiple_spec_files() {
        let options = ExtractOptions::new()
            .with_spec_files(["a.yml", "b.yml"])
            .with_name("web");
        assert!(matches!(options.validate(), Err(ExtractError::InvalidOptions(_))));
    }

    #[test]
    fn test_other_format_requirements() {
        let missing_ext = ExtractOptions::new()
            .with_format(OutputFormat::Other)
            .with_template("t.j2");
        let err = missing_ext.validate().unwrap_err();
        assert!(err.to_string().contains("--ext"));

        let missing_template = ExtractOptions::new()
            .with_format(OutputFormat::Other)
            .with_ext("adoc");
        let err = missing_template.validate().unwrap_err();
        assert!(err.to_string().contains("--template"));

        let complete = ExtractOptions::new()
            .with_format(OutputFormat::Other)
            .with_ext("adoc")
            .with_template("t.j2");
        assert!(complete.validate().is_ok());
        assert_eq!(complete.out_ext(), "adoc");
    }

    #[test]
    fn test_empty_ext_rejected() {
        let options = ExtractOptions::new().with_ext("..");
        assert!(options.validate().is_err());
    }
}
