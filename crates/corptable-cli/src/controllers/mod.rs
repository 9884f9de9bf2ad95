//! Stateful controllers behind the table screen.
//!
//! Controllers own state and turn user intent into store calls. They know
//! nothing about terminals; the TUI and the tests drive them the same way.

pub mod confirm;
pub mod form;
pub mod table;

pub use confirm::{ConfirmDelete, delete_prompt};
pub use form::{FormController, FormMode, FormOutcome};
pub use table::{DeleteOutcome, Notice, SubmitResult, TableController};
