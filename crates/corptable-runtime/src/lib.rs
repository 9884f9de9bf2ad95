pub mod config;
pub mod error;
pub mod seed;
pub mod store;

pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use seed::{SeedRecord, load_seed, sample_companies};
pub use store::{CompanyStore, InMemoryStore};
