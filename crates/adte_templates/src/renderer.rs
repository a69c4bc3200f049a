//! Template loading and rendering.

use minijinja::{path_loader, AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use tracing::debug;

use crate::builtin;
use crate::context::RenderContext;
use crate::error::{TemplateError, TemplateResult};
use crate::filters;
use crate::resolver::TemplateSource;

/// A compiled template, ready to render any number of spec files.
pub struct TemplateRenderer {
    env: Environment<'static>,
    source: TemplateSource,
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl TemplateRenderer {
    /// Load and compile the template. Syntax errors surface here, before any
    /// spec file is read.
    pub fn load(source: TemplateSource) -> TemplateResult<Self> {
        let label = source.display_path();
        let mut env = Self::environment();

        match &source {
            TemplateSource::Builtin { .. } => {
                for (name, text) in builtin::TEMPLATES {
                    env.add_template(name, text)
                        .map_err(|e| TemplateError::from_engine(name, e))?;
                }
            }
            TemplateSource::File { dir, .. } => env.set_loader(path_loader(dir.clone())),
        }

        debug!("Compiling template {}", label);
        env.get_template(source.name()).map_err(|e| match (e.kind(), &source) {
            (ErrorKind::TemplateNotFound, TemplateSource::File { dir, name, .. }) => TemplateError::NotFound {
                name: name.clone(),
                search_path: dir.display().to_string(),
            },
            _ => TemplateError::from_engine(&label, e),
        })?;

        Ok(Self { env, source })
    }

    /// Environment configured like the Jinja2 one Ansible template authors
    /// expect: block whitespace trimmed, undefined variables are errors,
    /// no HTML escaping.
    pub fn environment() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
        filters::register(&mut env);
        env
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Render the template. The result always ends with a newline.
    pub fn render(&self, context: &RenderContext<'_>) -> TemplateResult<String> {
        let label = self.source.display_path();
        let template = self
            .env
            .get_template(self.source.name())
            .map_err(|e| TemplateError::from_engine(&label, e))?;

        let mut text = template
            .render(context)
            .map_err(|e| TemplateError::from_engine(&label, e))?;

        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(text)
    }
}
