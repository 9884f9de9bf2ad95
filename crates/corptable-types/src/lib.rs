pub mod company;
pub mod error;
pub mod field;
pub mod query;

pub use company::{Address, Company, CompanyDraft, CompanyId, CompanyPatch};
pub use error::{Error, Result};
pub use field::{CompanyField, FormField, SortValue};
pub use query::{CompanyPage, CompanyQuery, DEFAULT_PAGE_SIZE, Sort, SortDirection};
