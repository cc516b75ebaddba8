mod cell_text;
mod error;
mod menu_page;
pub mod static_selector;

pub use error::Error;
pub use menu_page::{monday_of, Day, Week};
