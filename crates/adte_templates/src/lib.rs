//! # adte_templates
//!
//! Template handling for ansible-doc-template-extractor.
//!
//! This crate turns a parsed spec document into documentation text:
//!
//! - **Resolution**: pick an explicit Jinja2 template file, or the built-in
//!   role template for the requested output format
//! - **Markup**: convert Ansible inline markup such as `C(...)` to RST or
//!   Markdown
//! - **Rendering**: a strict [`minijinja`] environment with the markup and
//!   Ansible data filters registered
//!
//! ## Example
//!
//! ```rust,no_run
//! use adte_templates::{OutputFormat, RenderContext, TemplateRenderer, TemplateResolver};
//!
//! let source = TemplateResolver::resolve(None, OutputFormat::Rst).unwrap();
//! let renderer = TemplateRenderer::load(source).unwrap();
//!
//! let spec = serde_yaml::from_str("argument_specs: {}").unwrap();
//! let context = RenderContext::new("webserver", "meta/argument_specs.yml", &spec);
//! let text = renderer.render(&context).unwrap();
//! ```

pub mod builtin;
pub mod context;
pub mod error;
pub mod filters;
pub mod format;
pub mod markup;
pub mod renderer;
pub mod resolver;

pub use context::RenderContext;
pub use error::{TemplateError, TemplateResult};
pub use format::OutputFormat;
pub use markup::{to_md, to_rst};
pub use renderer::TemplateRenderer;
pub use resolver::{TemplateResolver, TemplateSource};
