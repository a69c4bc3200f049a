//! Output formats.

use std::fmt;
use std::str::FromStr;

/// Output format of the generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown, with a built-in role template.
    #[default]
    Md,
    /// reStructuredText, with a built-in role template.
    Rst,
    /// Any other format. Requires a user template and an explicit extension.
    Other,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Md, OutputFormat::Rst, OutputFormat::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Md => "md",
            OutputFormat::Rst => "rst",
            OutputFormat::Other => "other",
        }
    }

    /// File extension used when none is given explicitly.
    pub fn default_extension(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Md => Some("md"),
            OutputFormat::Rst => Some("rst"),
            OutputFormat::Other => None,
        }
    }

    /// Name of the built-in role template for this format.
    pub fn builtin_template(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Md => Some(crate::builtin::ROLE_MD_NAME),
            OutputFormat::Rst => Some(crate::builtin::ROLE_RST_NAME),
            OutputFormat::Other => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "invalid format '{}' (valid values: {})",
                    s,
                    OutputFormat::ALL.map(|f| f.as_str()).join(", ")
                )
            })
    }
}
