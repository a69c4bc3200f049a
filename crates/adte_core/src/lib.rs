//! # adte_core
//!
//! The extraction pipeline of ansible-doc-template-extractor.
//!
//! For every spec file the pipeline runs the same linear sequence, failing
//! fast at the first error:
//!
//! 1. derive the role name (or use the one given)
//! 2. load and parse the spec file
//! 3. render the template with `name`, `spec_file_name` and `spec_file_dict`
//! 4. write `<out_dir>/<name>.<ext>` atomically
//!
//! The template is resolved and compiled once, when the [`Extractor`] is
//! created.
//!
//! ## Example
//!
//! ```rust,no_run
//! use adte_core::{ExtractOptions, Extractor};
//! use adte_templates::OutputFormat;
//!
//! let options = ExtractOptions::new()
//!     .with_spec_file("roles/webserver/meta/argument_specs.yml")
//!     .with_format(OutputFormat::Rst)
//!     .with_out_dir("docs");
//!
//! let extractor = Extractor::new(options).unwrap();
//! for file in extractor.run().unwrap() {
//!     println!("{} -> {}", file.name, file.output.display());
//! }
//! ```

pub mod error;
pub mod extractor;
pub mod options;
pub mod output;

pub use error::{ExtractError, ExtractResult};
pub use extractor::{ExtractEvent, ExtractedFile, Extractor};
pub use options::ExtractOptions;
pub use output::OutputWriter;
