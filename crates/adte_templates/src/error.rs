//! Error types for templates.

use std::error::Error as _;

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while resolving, loading or rendering a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Could not find template name {name} in search path: {search_path}")]
    NotFound { name: String, search_path: String },

    #[error("No default template exists for format '{0}'; specify a template file")]
    NoDefaultTemplate(String),

    #[error("Syntax error in template file {template}{}: {message}", line_suffix(.line))]
    Syntax {
        template: String,
        line: Option<usize>,
        message: String,
    },

    #[error("Could not render template file {template}{}: undefined reference: {message}", line_suffix(.line))]
    UndefinedReference {
        template: String,
        line: Option<usize>,
        message: String,
    },

    #[error("Could not render template file {template}{}: {message}", line_suffix(.line))]
    RenderingFailed {
        template: String,
        line: Option<usize>,
        message: String,
    },
}

impl TemplateError {
    /// Classify an engine error raised while loading or rendering `template`.
    ///
    /// A template that cannot be found while rendering (a missing include or
    /// import) is a rendering failure of `template`; the engine message names
    /// the missing file. [`TemplateError::NotFound`] is only produced when the
    /// template itself is resolved.
    pub fn from_engine(template: &str, err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        let line = err.line();
        let message = engine_message(&err);

        match err.kind() {
            ErrorKind::SyntaxError | ErrorKind::BadEscape => TemplateError::Syntax {
                template: template.to_string(),
                line,
                message,
            },
            ErrorKind::UndefinedError
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownMethod
            | ErrorKind::UnknownBlock => TemplateError::UndefinedReference {
                template: template.to_string(),
                line,
                message,
            },
            _ => TemplateError::RenderingFailed {
                template: template.to_string(),
                line,
                message,
            },
        }
    }

    /// Line number reported by the engine, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            TemplateError::Syntax { line, .. }
            | TemplateError::UndefinedReference { line, .. }
            | TemplateError::RenderingFailed { line, .. } => *line,
            _ => None,
        }
    }
}

/// Engine errors raised inside an included template carry the real cause
/// as their source.
fn engine_message(err: &minijinja::Error) -> String {
    let mut message = match err.detail() {
        Some(detail) => format!("{}: {}", err.kind(), detail),
        None => err.kind().to_string(),
    };
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(", line {}", l)).unwrap_or_default()
}
