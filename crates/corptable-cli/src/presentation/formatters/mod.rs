pub mod text;

pub use text::{pad_right, truncate, width};
