pub mod colors;
pub mod date;
pub mod time;

pub use time::format_elapsed;
