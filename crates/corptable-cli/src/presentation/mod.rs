//! # Presentation Layer
//!
//! MVVM-style split between controller state and output.
//!
//! ```text
//! [ Controller / Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!                                                                (Console / JSON / CSV / TUI)
//! ```
//!
//! ## Where does code go?
//!
//! ### `view_models/`
//! Serializable data contracts. No calculation. The JSON output of `list`
//! and `show` is exactly these structs.
//!
//! ### `presenters/`
//! Pure functions from records, pages and controller state to view models.
//! Row numbering, sort indicators and key hints are decided here.
//!
//! ### `views/`
//! `fmt::Display` wrappers for console text and ratatui widgets for the TUI.
//! A view borrows its view model and only maps it onto text or cells.
//!
//! ### `renderers/`
//! Drivers: `ConsoleRenderer` writes a `CommandResultViewModel` as text, JSON
//! or CSV; `TuiRenderer` lays out the table screen and its overlays.
//!
//! ### `formatters/`
//! Small string helpers shared by the views (width-aware padding and
//! truncation).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, CrosstermKeys, KeySource, Renderer, TuiRenderer};
pub use view_models::{CreateView, TabularView};
