//! Command line definition.

use std::path::PathBuf;

use adte_core::ExtractOptions;
use adte_templates::filters::FILTER_NAMES;
use adte_templates::OutputFormat;
use clap::Parser;

/// Extract documentation from Ansible spec files using Jinja2 templates
#[derive(Parser, Debug)]
#[command(name = "ansible-doc-template-extractor")]
#[command(version, about = "Extract documentation from Ansible spec files using Jinja2 templates")]
#[command(long_about = r#"
Extract documentation from a spec file in YAML format (such as
<role>/meta/argument_specs.yml for roles) using a Jinja2 template file.

Template files for the RST and Markdown output formats for roles are built in.
For playbooks and for other output formats, templates are provided by the user.
See --help-template for the variables available to templates.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Spec file error
  4 - Template error
  5 - Output file error
"#)]
pub struct Cli {
    /// Path name of the spec file that documents the role or playbook.
    /// Zero or more spec files can be specified.
    #[arg(value_name = "SPEC_FILE")]
    pub spec_files: Vec<PathBuf>,

    /// Path name of the output directory
    #[arg(short, long, value_name = "DIR", env = "ADTE_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Name of the Ansible role or playbook. Only one spec file may be
    /// specified with this option. Default: derived from the spec file path
    /// <name>/meta/argument_specs.yml
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Format of the output file(s): md, rst, other
    #[arg(short, long, value_name = "FORMAT", env = "ADTE_FORMAT", default_value = "md")]
    pub format: OutputFormat,

    /// File extension of the output file(s). Default: the format for 'md' and
    /// 'rst'. Required for format 'other'
    #[arg(long, value_name = "EXT", env = "ADTE_EXT")]
    pub ext: Option<String>,

    /// Path name of the Jinja2 template file. Default: the built-in role
    /// template for 'md' and 'rst'. Required for format 'other'
    #[arg(short, long, value_name = "FILE", env = "ADTE_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Show help for the template file and exit
    #[arg(long)]
    pub help_template: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Convert the parsed arguments into pipeline options.
    pub fn to_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::new()
            .with_spec_files(self.spec_files.iter().cloned())
            .with_format(self.format)
            .with_out_dir(self.out_dir.clone());
        options.name = self.name.clone();
        options.ext = self.ext.clone();
        options.template = self.template.clone();
        options
    }
}

/// Reference text for template authors.
pub fn template_help() -> String {
    format!(
        r#"
Help for Jinja2 template file

Jinja2 template files are described in https://jinja.palletsprojects.com/en/stable/templates/

This program sets up the following variables for use by the template:

* name (str): Name of the Ansible role or playbook.

* spec_file_name (str): Path name of Ansible spec file.

* spec_file_dict (dict): Content of Ansible spec file.

Undefined variables are errors. Besides the standard Jinja2 filters, these
filters are available: {}.
"#,
        FILTER_NAMES.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "ansible-doc-template-extractor",
            "-o",
            "docs",
            "-f",
            "other",
            "--ext",
            ".adoc",
            "-t",
            "role.adoc.j2",
            "roles/web/meta/argument_specs.yml",
        ])
        .unwrap();

        let options = cli.to_options();
        assert_eq!(options.out_dir, PathBuf::from("docs"));
        assert_eq!(options.format, OutputFormat::Other);
        assert_eq!(options.out_ext(), "adoc");
        assert_eq!(options.template, Some(PathBuf::from("role.adoc.j2")));
        assert_eq!(options.spec_files.len(), 1);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Cli::try_parse_from(["ansible-doc-template-extractor", "-f", "html"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["ansible-doc-template-extractor", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_template_help_lists_variables_and_filters() {
        let help = template_help();
        assert!(help.contains("spec_file_dict (dict)"));
        assert!(help.contains("to_rst, to_md"));
    }
}
