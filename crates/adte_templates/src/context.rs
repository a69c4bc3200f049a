//! Variables exposed to templates.

use serde::Serialize;
use serde_yaml::Value;

/// The fixed set of variables a template can reference.
///
/// - `name`: name of the Ansible role or playbook
/// - `spec_file_name`: path of the spec file, as given on the command line
/// - `spec_file_dict`: parsed content of the spec file
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    pub name: &'a str,
    pub spec_file_name: String,
    pub spec_file_dict: &'a Value,
}

impl<'a> RenderContext<'a> {
    pub fn new(name: &'a str, spec_file_name: impl Into<String>, spec_file_dict: &'a Value) -> Self {
        Self {
            name,
            spec_file_name: spec_file_name.into(),
            spec_file_dict,
        }
    }
}
