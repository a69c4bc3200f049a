//! The extraction pipeline.

use std::fmt;
use std::path::{Path, PathBuf};

use adte_spec::{role_name_from_path, SpecReader};
use adte_templates::{RenderContext, TemplateRenderer, TemplateResolver, TemplateSource};
use tracing::{debug, info};

use crate::error::{ExtractError, ExtractResult};
use crate::options::ExtractOptions;
use crate::output::OutputWriter;

/// Result of processing one spec file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Role or playbook name used for the output.
    pub name: String,
    /// Spec file that was processed.
    pub spec_file: PathBuf,
    /// Output file that was written.
    pub output: PathBuf,
}

/// Progress of the pipeline. Every event but `CreatedOutput` is reported
/// before its step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractEvent<'a> {
    /// The template is about to be loaded.
    LoadingTemplate(&'a str),
    /// The name for the next spec file is known.
    Name(&'a str),
    /// The spec file is about to be read.
    LoadingSpec(&'a Path),
    /// The output file was written.
    CreatedOutput(&'a Path),
}

impl fmt::Display for ExtractEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractEvent::LoadingTemplate(template) => write!(f, "Loading template file: {}", template),
            ExtractEvent::Name(name) => write!(f, "Ansible name: {}", name),
            ExtractEvent::LoadingSpec(path) => write!(f, "Loading spec file: {}", path.display()),
            ExtractEvent::CreatedOutput(path) => write!(f, "Created output file: {}", path.display()),
        }
    }
}

/// Renders spec files through one template.
#[derive(Debug)]
pub struct Extractor {
    options: ExtractOptions,
    renderer: TemplateRenderer,
    out_ext: String,
}

impl Extractor {
    /// Validate `options`, then resolve and compile the template.
    pub fn new(options: ExtractOptions) -> ExtractResult<Self> {
        Self::new_with(options, &mut |_| {})
    }

    /// Like [`Extractor::new`], reporting to `on_event` before the template
    /// is loaded.
    pub fn new_with(
        options: ExtractOptions,
        on_event: &mut dyn FnMut(ExtractEvent<'_>),
    ) -> ExtractResult<Self> {
        options.validate()?;

        let label = match &options.template {
            Some(path) => path.display().to_string(),
            None => TemplateResolver::resolve_builtin(options.format)?.display_path(),
        };
        emit(on_event, ExtractEvent::LoadingTemplate(&label));

        let source = TemplateResolver::resolve(options.template.as_deref(), options.format)?;
        let renderer = TemplateRenderer::load(source)?;
        let out_ext = options.out_ext();

        Ok(Self {
            options,
            renderer,
            out_ext,
        })
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn template(&self) -> &TemplateSource {
        self.renderer.source()
    }

    /// Process every configured spec file, stopping at the first failure.
    pub fn run(&self) -> ExtractResult<Vec<ExtractedFile>> {
        self.run_with(&mut |_| {})
    }

    /// Like [`Extractor::run`], reporting each step to `on_event`.
    pub fn run_with(
        &self,
        on_event: &mut dyn FnMut(ExtractEvent<'_>),
    ) -> ExtractResult<Vec<ExtractedFile>> {
        self.options
            .spec_files
            .iter()
            .map(|spec_file| self.extract_with(spec_file, on_event))
            .collect()
    }

    /// Process a single spec file.
    pub fn extract(&self, spec_file: &Path) -> ExtractResult<ExtractedFile> {
        self.extract_with(spec_file, &mut |_| {})
    }

    fn extract_with(
        &self,
        spec_file: &Path,
        on_event: &mut dyn FnMut(ExtractEvent<'_>),
    ) -> ExtractResult<ExtractedFile> {
        let name = self.resolve_name(spec_file)?;
        emit(on_event, ExtractEvent::Name(&name));

        let output = OutputWriter::output_path(&self.options.out_dir, &name, &self.out_ext);

        emit(on_event, ExtractEvent::LoadingSpec(spec_file));
        let spec = SpecReader::read(spec_file)?;

        let context = RenderContext::new(&name, spec_file.display().to_string(), spec.content());
        let text = self.renderer.render(&context)?;
        debug!("Rendered {} bytes for {}", text.len(), name);

        OutputWriter::write(&output, &text)?;
        emit(on_event, ExtractEvent::CreatedOutput(&output));

        Ok(ExtractedFile {
            name,
            spec_file: spec_file.to_path_buf(),
            output,
        })
    }

    fn resolve_name(&self, spec_file: &Path) -> ExtractResult<String> {
        match &self.options.name {
            Some(name) => Ok(name.clone()),
            None => role_name_from_path(spec_file)
                .ok_or_else(|| ExtractError::NoName(spec_file.to_path_buf())),
        }
    }
}

fn emit(on_event: &mut dyn FnMut(ExtractEvent<'_>), event: ExtractEvent<'_>) {
    info!("{}", event);
    on_event(event);
}
