pub mod company;
pub mod config;
pub mod tui;

pub use company::{CompanyDetailView, CompanyListView};
pub use config::{ConfigInitView, ConfigPathView, ConfigView};
