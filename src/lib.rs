pub mod cli;
pub mod config;
pub mod format;
pub mod input;
pub mod output;
pub mod parse;
pub mod scale;
pub mod units;
pub mod utils;

pub use format::{human_readable_number, to_string_fully_specified};
pub use parse::{parse_double, parse_int, parse_unsigned_int, ParseError};
pub use units::system::UnitSystem;
pub use utils::split::str_split;
