mod category;
mod day;
mod week;

pub use day::Day;
pub use week::{monday_of, Week};
