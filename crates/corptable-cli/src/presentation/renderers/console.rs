use std::io::{self, Write};

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusLevel, TabularView,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    /// Colors are enabled only for text output to a terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: format == OutputFormat::Text && io::stdout().is_terminal(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + TabularView,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, result)?;
                writeln!(out)?;
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut *out);
                writer.write_record(result.content.header())?;
                for row in result.content.rows() {
                    writer.write_record(&row)?;
                }
                writer.flush()?;
            }
            OutputFormat::Text => self.render_text(out, result)?,
        }
        Ok(())
    }

    fn render_text<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if let Some(badge) = &result.badge {
            if self.color {
                let label = match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Info => badge.label.cyan().bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                    StatusLevel::Error => badge.label.red().bold().to_string(),
                };
                writeln!(out, "{} {}", badge.icon(), label)?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view())?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + TabularView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)
    }
}
