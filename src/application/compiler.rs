//! Compiler pipeline
//!
//! Runs the registered passes against a container builder, in order, each
//! exactly once.
//!
//! ## Flow
//!
//! 1. Every pass starts as `NotProcessed`
//! 2. Passes run in registration order; a pass becomes `Processed` once it
//!    returns successfully
//! 3. The first failing pass aborts the build; later passes never run

use anyhow::Context;
use tracing::info;

use crate::application::passes::{ConverterPass, TranslatorPass};
use crate::config::WireupConfig;
use crate::container::ContainerBuilder;
use crate::error::WireupResult;

/// A one-shot transform applied to the container during its build.
pub trait CompilerPass {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    fn process(&self, container: &mut ContainerBuilder) -> WireupResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassState {
    NotProcessed,
    Processed,
}

/// Per-pass outcome of a successful compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    passes: Vec<(String, PassState)>,
}

impl CompileReport {
    fn pending(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            passes: names
                .into_iter()
                .map(|name| (name, PassState::NotProcessed))
                .collect(),
        }
    }

    pub fn passes(&self) -> &[(String, PassState)] {
        &self.passes
    }

    pub fn state(&self, name: &str) -> Option<PassState> {
        self.passes
            .iter()
            .find(|(pass, _)| pass == name)
            .map(|(_, state)| *state)
    }

    pub fn all_processed(&self) -> bool {
        self.passes
            .iter()
            .all(|(_, state)| *state == PassState::Processed)
    }
}

#[derive(Default)]
pub struct Compiler {
    passes: Vec<Box<dyn CompilerPass>>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translator pass, then converter pass, configured from `config`.
    pub fn with_defaults(config: &WireupConfig) -> Self {
        Self::new()
            .with_pass(TranslatorPass::from_config(&config.translator))
            .with_pass(ConverterPass::from_config(&config.converter))
    }

    pub fn with_pass(mut self, pass: impl CompilerPass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn add_pass(&mut self, pass: Box<dyn CompilerPass>) {
        self.passes.push(pass);
    }

    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    pub fn compile(&self, container: &mut ContainerBuilder) -> WireupResult<CompileReport> {
        let mut report =
            CompileReport::pending(self.passes.iter().map(|pass| pass.name().to_string()));

        for (pass, (_, state)) in self.passes.iter().zip(report.passes.iter_mut()) {
            pass.process(container)?;
            *state = PassState::Processed;
            info!(pass = pass.name(), "compiler pass processed");
        }

        Ok(report)
    }

    /// Like [`Compiler::compile`], naming the failing pass in the error.
    pub fn compile_with_context(
        &self,
        container: &mut ContainerBuilder,
    ) -> anyhow::Result<CompileReport> {
        let mut report =
            CompileReport::pending(self.passes.iter().map(|pass| pass.name().to_string()));

        for (pass, (_, state)) in self.passes.iter().zip(report.passes.iter_mut()) {
            pass.process(container)
                .with_context(|| format!("compiler pass '{}' failed", pass.name()))?;
            *state = PassState::Processed;
        }

        Ok(report)
    }
}

impl std::fmt::Debug for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler")
            .field("passes", &self.pass_names())
            .finish()
    }
}
