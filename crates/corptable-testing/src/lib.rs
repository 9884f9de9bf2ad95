//! Shared fixtures for corptable tests.

pub mod builder;
pub mod stores;

pub use builder::CompanyBuilder;
pub use stores::{FailingStore, store_with_managers};
