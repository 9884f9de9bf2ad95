// NOTE: corptable layering
//
// types    -> records, ids, fields, query/page shapes
// engine   -> pure evaluation: filter/sort/paginate, collation, form rules
// runtime  -> the authoritative in-memory store, seed data, config file
// cli      -> controllers (state + intent), presentation (view models, views)
//
// Controllers never touch terminal APIs and views never touch the store:
// a controller produces a view model, a renderer draws it. That keeps every
// interaction testable with scripted input and ratatui's TestBackend.

mod args;
mod commands;
pub mod controllers;
pub mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, ListArgs, LogLevel, OutputFormat};
pub use commands::run;
