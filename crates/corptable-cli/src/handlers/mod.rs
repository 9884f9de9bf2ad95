pub mod config;
pub mod context;
pub mod list;
pub mod show;
pub mod tui;

pub use context::HandlerContext;
