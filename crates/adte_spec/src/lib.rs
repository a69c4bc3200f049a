//! # adte_spec
//!
//! Loading of Ansible spec files for ansible-doc-template-extractor.
//!
//! A spec file is a YAML document that describes the parameters of an Ansible
//! role (usually `<role>/meta/argument_specs.yml`) or playbook. This crate does
//! not enforce the Ansible schema: the parsed document is handed to a template
//! as-is, so any well-formed YAML is accepted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use adte_spec::SpecReader;
//!
//! let spec = SpecReader::read("roles/webserver/meta/argument_specs.yml").unwrap();
//! assert_eq!(spec.role_name().as_deref(), Some("webserver"));
//! ```

pub mod document;
pub mod error;
pub mod reader;

pub use document::{role_name_from_path, SpecDocument};
pub use error::{SpecError, SpecResult};
pub use reader::SpecReader;
