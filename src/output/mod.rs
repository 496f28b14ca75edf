pub mod errors;
pub mod table;
