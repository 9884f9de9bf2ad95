pub mod company;
pub mod config;
pub mod form;
pub mod table;

pub use company::{present_company_detail, present_company_list, present_list_result};
pub use config::{present_config, present_config_init, present_config_path};
pub use form::{present_confirm, present_form};
pub use table::{browse_hints, build_table_screen, confirm_hints, filter_hints, form_hints};
