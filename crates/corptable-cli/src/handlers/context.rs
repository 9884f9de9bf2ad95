use anyhow::Result;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, TabularView};
use crate::presentation::{ConsoleRenderer, Renderer};

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + TabularView,
    {
        let renderer = ConsoleRenderer::new(self.format.into());
        renderer.render(view_model)
    }
}
